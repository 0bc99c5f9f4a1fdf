//! Unified error type for the Shoreline service.

use shoreline_area::AreaError;
use shoreline_fishing::ValidationError;
use shoreline_game::GameError;
use shoreline_protocol::ProtocolError;

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `shoreline` meta-crate, you deal with this single error
/// type instead of importing errors from each sub-crate. The `#[from]`
/// attribute on each variant auto-generates `From` impls, so the `?`
/// operator converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum ShorelineError {
    /// A protocol-level error (encode, decode, invalid message).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A fish-generation validation error.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A game-lifecycle error.
    #[error(transparent)]
    Game(#[from] GameError),

    /// An area-level error (routing, dispatch, malformed definitions).
    #[error(transparent)]
    Area(#[from] AreaError),
}
