//! # Shoreline
//!
//! Shared-world town service: named interactable areas hosting a
//! two-party trading game and a weighted-random fishing activity.
//!
//! Each area runs as its own actor task, so commands against one area are
//! handled strictly in arrival order while different areas proceed
//! concurrently. Successful commands broadcast a fresh area snapshot to
//! every subscriber; failures are reported only to the caller.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use shoreline::prelude::*;
//!
//! # async fn run() -> Result<(), ShorelineError> {
//! shoreline::telemetry::init();
//!
//! let town = Town::new([
//!     AreaDefinition::Trading {
//!         id: AreaId::new("Market"),
//!         bounds: BoundingBox::new(0.0, 0.0, 100.0, 100.0),
//!     },
//!     AreaDefinition::Fishing {
//!         id: AreaId::new("Pier"),
//!         bounds: BoundingBox::new(200.0, 0.0, 60.0, 40.0),
//!     },
//! ])?;
//!
//! let ada = PlayerInfo::new(PlayerId(1), "ada");
//! let response = town
//!     .handle_command(
//!         &ada,
//!         CommandRequest {
//!             command_id: CommandId(1),
//!             interactable_id: AreaId::new("Market"),
//!             command: AreaCommand::JoinGame,
//!         },
//!     )
//!     .await;
//! assert!(!response.outcome.is_error());
//! # Ok(())
//! # }
//! ```

mod error;
pub mod telemetry;
mod town;

pub use error::ShorelineError;
pub use town::{AreaDefinition, Town};

/// The common imports for embedding the town service.
pub mod prelude {
    pub use crate::{AreaDefinition, ShorelineError, Town};
    pub use shoreline_area::{
        AreaDirectory, AreaHandle, AreaSubscriber, FishingArea, InteractableArea, NullSink,
        ResultSink, TradingArea,
    };
    pub use shoreline_fishing::{BoundedNumber, FishSpawner, spawn_weighted, stock_spawners};
    pub use shoreline_game::{GameInstance, GameRules, Trading};
    pub use shoreline_protocol::{
        AreaCommand, AreaId, AreaModel, BoundingBox, CatchableFish, Codec, CommandId,
        CommandOutcome, CommandRequest, CommandResponse, GameId, GameResult, GameStatus,
        JsonCodec, PlayerId, PlayerInfo, ResponsePayload, TradeOffer,
    };
}
