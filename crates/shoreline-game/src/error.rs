//! Error types for the game layer.
//!
//! The display strings are part of the wire contract: clients match on
//! them, so they must not drift.

/// A join, leave, or move attempted against an incompatible game status.
/// Caught at the area boundary and converted to an error response; never
/// fatal to the area or to other instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The game has not started or has already concluded.
    #[error("Game is not in progress.")]
    NotInProgress,

    /// Every seat in the game is taken.
    #[error("This game is full.")]
    GameFull,

    /// The joining player already holds a seat.
    #[error("You are already in this game.")]
    AlreadyInGame,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stable_messages() {
        assert_eq!(GameError::NotInProgress.to_string(), "Game is not in progress.");
        assert_eq!(GameError::GameFull.to_string(), "This game is full.");
        assert_eq!(
            GameError::AlreadyInGame.to_string(),
            "You are already in this game."
        );
    }
}
