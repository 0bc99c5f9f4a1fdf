//! Identity types and shared scalar models.
//!
//! The id types are newtype wrappers so a `GameId` can never be passed
//! where a `CommandId` is expected. All of them serialize transparently —
//! a `PlayerId(42)` is just `42` on the wire.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identity types
// ---------------------------------------------------------------------------

/// A unique identifier for a player, assigned by the session layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P-{}", self.0)
    }
}

/// A unique identifier for one game instance. Never reused: a replacement
/// game in the same area gets a fresh id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub u64);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G-{}", self.0)
    }
}

/// Correlates a [`CommandRequest`](crate::CommandRequest) with its
/// [`CommandResponse`](crate::CommandResponse), one to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandId(pub u64);

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C-{}", self.0)
    }
}

/// A unique identifier for an interactable area. Areas are named regions of
/// the world map, so the id is the region's name rather than a counter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AreaId(pub String);

impl AreaId {
    /// Convenience constructor for anything stringy.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player as the area layer sees them: a stable id plus the display name
/// used when crediting game results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    /// The player's unique id.
    pub id: PlayerId,
    /// Human-readable display name.
    pub user_name: String,
}

impl PlayerInfo {
    pub fn new(id: PlayerId, user_name: impl Into<String>) -> Self {
        Self {
            id,
            user_name: user_name.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Geometry
// ---------------------------------------------------------------------------

/// The rectangular region of the map an area occupies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A zero-area rectangle is a malformed map object.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

// ---------------------------------------------------------------------------
// Game lifecycle
// ---------------------------------------------------------------------------

/// The lifecycle status of a game instance.
///
/// ```text
/// WaitingToStart → InProgress → Over
/// ```
///
/// `Over` is terminal. A concluded instance is replaced by the next
/// `JoinGame`, never resurrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    WaitingToStart,
    InProgress,
    Over,
}

impl GameStatus {
    /// Returns `true` once the game has concluded.
    pub fn is_over(&self) -> bool {
        matches!(self, Self::Over)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WaitingToStart => write!(f, "WAITING_TO_START"),
            Self::InProgress => write!(f, "IN_PROGRESS"),
            Self::Over => write!(f, "OVER"),
        }
    }
}

/// The recorded outcome of one concluded game instance.
///
/// Scores are keyed by display name (falling back to the raw player id
/// when the player has already left the area).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    /// Which instance this outcome belongs to.
    pub game_id: GameId,
    /// Display name → score.
    pub scores: HashMap<String, u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_serializes_as_plain_number() {
        let json = serde_json::to_string(&PlayerId(42)).unwrap();
        assert_eq!(json, "42");
    }

    #[test]
    fn test_player_id_display() {
        assert_eq!(PlayerId(7).to_string(), "P-7");
    }

    #[test]
    fn test_area_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&AreaId::new("TradingPost")).unwrap();
        assert_eq!(json, "\"TradingPost\"");
    }

    #[test]
    fn test_game_status_wire_names() {
        let json = serde_json::to_string(&GameStatus::WaitingToStart).unwrap();
        assert_eq!(json, "\"WAITING_TO_START\"");
        let json = serde_json::to_string(&GameStatus::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");
        let json = serde_json::to_string(&GameStatus::Over).unwrap();
        assert_eq!(json, "\"OVER\"");
    }

    #[test]
    fn test_game_status_is_over() {
        assert!(GameStatus::Over.is_over());
        assert!(!GameStatus::InProgress.is_over());
        assert!(!GameStatus::WaitingToStart.is_over());
    }

    #[test]
    fn test_bounding_box_degenerate() {
        assert!(BoundingBox::new(0.0, 0.0, 0.0, 10.0).is_degenerate());
        assert!(BoundingBox::new(0.0, 0.0, 10.0, 0.0).is_degenerate());
        assert!(!BoundingBox::new(5.0, 5.0, 10.0, 10.0).is_degenerate());
    }

    #[test]
    fn test_game_result_round_trip() {
        let mut scores = HashMap::new();
        scores.insert("ada".to_string(), 1);
        scores.insert("grace".to_string(), 1);
        let result = GameResult {
            game_id: GameId(3),
            scores,
        };
        let bytes = serde_json::to_vec(&result).unwrap();
        let decoded: GameResult = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(result, decoded);
    }
}
