//! Wire protocol for the Shoreline town service.
//!
//! Everything that crosses the boundary between the core and the outer
//! transport layer lives here: identity newtypes, the command/response
//! envelope pair, the per-area snapshot models, and the [`Codec`] used to
//! move them as bytes.
//!
//! # Key types
//!
//! - [`CommandRequest`] / [`CommandResponse`] — the correlated envelope pair
//! - [`AreaCommand`] — the closed, tagged command set areas understand
//! - [`AreaModel`] — what an area looks like to its occupants
//! - [`Codec`] / [`JsonCodec`] — byte-level encoding for the transport seam

mod codec;
mod command;
mod error;
mod model;
mod types;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use command::{
    AreaCommand, CommandOutcome, CommandRequest, CommandResponse, ResponsePayload, TradeOffer,
};
pub use error::ProtocolError;
pub use model::{
    AreaModel, CatchableFish, GameModel, TradeRole, TradingMove, TradingState,
};
pub use types::{
    AreaId, BoundingBox, CommandId, GameId, GameResult, GameStatus, PlayerId, PlayerInfo,
};
