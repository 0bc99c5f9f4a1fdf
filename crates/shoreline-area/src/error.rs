//! Error types for the area layer.
//!
//! Everything here is converted to an error string at the command
//! boundary and delivered only to the originating caller — failures are
//! never broadcast and never take down the area actor.

use shoreline_fishing::ValidationError;
use shoreline_game::GameError;
use shoreline_protocol::AreaId;

/// Errors that can occur while handling an area command.
#[derive(Debug, thiserror::Error)]
pub enum AreaError {
    /// A game-lifecycle violation (not in progress, full, already seated).
    #[error(transparent)]
    Game(#[from] GameError),

    /// Malformed fish-generation inputs.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The supplied game id does not identify the live instance.
    #[error("gameID does not match the game in progress.")]
    GameIdMismatch,

    /// The area does not support this command tag.
    #[error("unsupported command: {0}")]
    UnsupportedCommand(&'static str),

    /// An area definition with a degenerate bounding box.
    #[error("malformed area definition for {0}")]
    MalformedArea(AreaId),

    /// No area registered under this id.
    #[error("no interactable area with id {0}")]
    NotFound(AreaId),

    /// The area's actor is gone (channel closed or shutting down).
    #[error("area {0} is unavailable")]
    Unavailable(AreaId),
}
