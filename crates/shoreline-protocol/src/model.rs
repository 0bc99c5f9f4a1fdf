//! Snapshot models: what an area and its hosted activity look like on the
//! wire. These are the structures broadcast to every occupant after a
//! state change.

use serde::{Deserialize, Serialize};

use crate::{AreaId, GameId, GameResult, GameStatus, PlayerId};

// ---------------------------------------------------------------------------
// Fish
// ---------------------------------------------------------------------------

/// One generated fish, frozen at spawn time.
///
/// A `CatchableFish` is a pure value: once spawned it carries no link back
/// to the spawner that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatchableFish {
    /// Species name, e.g. "salmon".
    pub name: String,
    /// Weight in pounds.
    pub weight: f64,
    /// Length in feet.
    pub length: f64,
    /// Configured rarity weight of the species (higher is more common).
    pub rarity: f64,
    /// How fast this fish moves while hooked.
    pub movement_speed: f64,
}

// ---------------------------------------------------------------------------
// Trading
// ---------------------------------------------------------------------------

/// Which of the two trading seats a player occupies. The first joiner is
/// role `1`, the second role `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeRole {
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
}

impl TradeRole {
    /// The opposite seat.
    pub fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

/// A move as recorded in the trading history: the resolved role plus the
/// offer it carried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingMove {
    /// Seat that made the move.
    pub player: TradeRole,
    /// The fish put on the table (empty to rescind).
    pub fish: Vec<CatchableFish>,
    /// `true` accepts the standing offers and ends the game.
    pub accept: bool,
}

/// Full state of a trading negotiation.
///
/// Transitions replace the whole struct; no field is ever updated in
/// isolation, so a snapshot taken between commands is always consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingState {
    pub status: GameStatus,
    /// Seat 1, filled by the first joiner.
    pub player1: Option<PlayerId>,
    /// Seat 2, filled by the second joiner.
    pub player2: Option<PlayerId>,
    /// Whose turn the UI should prompt. Not enforced server-side; see the
    /// trading rules for why.
    pub turn: TradeRole,
    /// Seat 1's standing offer.
    pub offer1: Vec<CatchableFish>,
    /// Seat 2's standing offer.
    pub offer2: Vec<CatchableFish>,
    /// Set when a player accepted the standing offers.
    pub accepted: bool,
    /// Every move applied to this game, in order.
    pub moves: Vec<TradingMove>,
}

// ---------------------------------------------------------------------------
// Area snapshots
// ---------------------------------------------------------------------------

/// Snapshot of one game instance: identity, roster, state, and the outcome
/// once concluded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameModel<S> {
    pub id: GameId,
    /// Players in join order — the order assigns roles.
    pub players: Vec<PlayerId>,
    pub state: S,
    /// Present only after the game concluded. Written once.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<GameResult>,
}

/// The externally visible snapshot of an interactable area, broadcast to
/// occupants after every state-mutating command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AreaModel {
    /// An area hosting the two-party trading negotiation.
    TradingArea {
        id: AreaId,
        occupants: Vec<PlayerId>,
        #[serde(skip_serializing_if = "Option::is_none")]
        game: Option<GameModel<TradingState>>,
        history: Vec<GameResult>,
    },
    /// An area hosting the fish-generation activity and its trophy display.
    FishingArea {
        id: AreaId,
        occupants: Vec<PlayerId>,
        #[serde(skip_serializing_if = "Option::is_none")]
        best_fish: Option<CatchableFish>,
        inventory: Vec<CatchableFish>,
    },
}

impl AreaModel {
    /// The id of the area this snapshot describes.
    pub fn id(&self) -> &AreaId {
        match self {
            Self::TradingArea { id, .. } | Self::FishingArea { id, .. } => id,
        }
    }

    /// The occupants visible in this snapshot.
    pub fn occupants(&self) -> &[PlayerId] {
        match self {
            Self::TradingArea { occupants, .. } | Self::FishingArea { occupants, .. } => occupants,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minnow() -> CatchableFish {
        CatchableFish {
            name: "minnow".into(),
            weight: 0.2,
            length: 0.3,
            rarity: 50.0,
            movement_speed: 2.0,
        }
    }

    #[test]
    fn test_trade_role_wire_names() {
        assert_eq!(serde_json::to_string(&TradeRole::One).unwrap(), "\"1\"");
        assert_eq!(serde_json::to_string(&TradeRole::Two).unwrap(), "\"2\"");
    }

    #[test]
    fn test_trade_role_other() {
        assert_eq!(TradeRole::One.other(), TradeRole::Two);
        assert_eq!(TradeRole::Two.other(), TradeRole::One);
    }

    #[test]
    fn test_area_model_internally_tagged() {
        let model = AreaModel::TradingArea {
            id: AreaId::new("Market"),
            occupants: vec![PlayerId(1)],
            game: None,
            history: vec![],
        };
        let json: serde_json::Value = serde_json::to_value(&model).unwrap();
        assert_eq!(json["type"], "TradingArea");
        assert_eq!(json["id"], "Market");
        // Absent game is omitted entirely, not serialized as null.
        assert!(json.get("game").is_none());
    }

    #[test]
    fn test_fishing_area_model_round_trip() {
        let model = AreaModel::FishingArea {
            id: AreaId::new("Pier"),
            occupants: vec![PlayerId(9)],
            best_fish: Some(minnow()),
            inventory: vec![minnow()],
        };
        let bytes = serde_json::to_vec(&model).unwrap();
        let decoded: AreaModel = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(model, decoded);
    }

    #[test]
    fn test_area_model_accessors() {
        let model = AreaModel::FishingArea {
            id: AreaId::new("Pier"),
            occupants: vec![PlayerId(4), PlayerId(5)],
            best_fish: None,
            inventory: vec![],
        };
        assert_eq!(model.id(), &AreaId::new("Pier"));
        assert_eq!(model.occupants(), &[PlayerId(4), PlayerId(5)]);
    }

    #[test]
    fn test_trading_state_round_trip() {
        let state = TradingState {
            status: GameStatus::InProgress,
            player1: Some(PlayerId(1)),
            player2: Some(PlayerId(2)),
            turn: TradeRole::Two,
            offer1: vec![minnow()],
            offer2: vec![],
            accepted: false,
            moves: vec![TradingMove {
                player: TradeRole::One,
                fish: vec![minnow()],
                accept: false,
            }],
        };
        let bytes = serde_json::to_vec(&state).unwrap();
        let decoded: TradingState = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(state, decoded);
    }
}
