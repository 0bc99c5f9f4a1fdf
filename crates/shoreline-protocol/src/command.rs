//! The command/response envelope pair.
//!
//! Commands form a closed, tagged set. Each request carries a
//! [`CommandId`]; the matching response echoes it, so the transport layer
//! can correlate the two without keeping protocol state of its own.

use serde::{Deserialize, Serialize};

use crate::{AreaId, CatchableFish, CommandId, GameId};

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// A trading move as sent by a client. The acting seat is resolved
/// server-side from the sender's identity, never trusted from the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeOffer {
    /// The fish to put on the table (empty to rescind a standing offer).
    pub fish: Vec<CatchableFish>,
    /// `true` accepts both standing offers and concludes the game.
    pub accept: bool,
}

/// Every command an interactable area can receive.
///
/// The set is closed: areas are total over the tags they support and fail
/// any other tag with an "unsupported command" error naming it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AreaCommand {
    /// Join the hosted game, creating a fresh instance if none is live.
    JoinGame,
    /// Apply a move to the identified game instance.
    GameMove {
        game_id: GameId,
        #[serde(rename = "move")]
        offer: TradeOffer,
    },
    /// Apply a trading move to whatever instance is live. Kept alongside
    /// `GameMove` for clients that do not track instance ids.
    TradeCommand {
        game_id: GameId,
        #[serde(rename = "move")]
        offer: TradeOffer,
    },
    /// Leave the identified game instance.
    LeaveGame { game_id: GameId },
    /// Cast a line and generate one fish.
    CastLine,
    /// Put a caught fish on the area's trophy display.
    StoreFish { fish: CatchableFish },
}

impl AreaCommand {
    /// The wire tag, used in "unsupported command" errors.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::JoinGame => "JoinGame",
            Self::GameMove { .. } => "GameMove",
            Self::TradeCommand { .. } => "TradeCommand",
            Self::LeaveGame { .. } => "LeaveGame",
            Self::CastLine => "CastLine",
            Self::StoreFish { .. } => "StoreFish",
        }
    }
}

// ---------------------------------------------------------------------------
// Envelopes
// ---------------------------------------------------------------------------

/// An inbound command, addressed to one area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandRequest {
    /// Correlation id, echoed verbatim in the response.
    pub command_id: CommandId,
    /// Routing key: which area handles this command.
    pub interactable_id: AreaId,
    /// The command itself.
    pub command: AreaCommand,
}

/// The typed payload of a successful command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ResponsePayload {
    /// Reply to `JoinGame`: the id of the instance that was joined.
    GameJoined { game_id: GameId },
    /// Reply to `CastLine`: the generated fish.
    FishCaught { fish: CatchableFish },
}

/// Either a payload or an error string, never both. `Payload(None)` is an
/// empty success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum CommandOutcome {
    Payload(Option<ResponsePayload>),
    Error(String),
}

impl CommandOutcome {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// The reply to one [`CommandRequest`], delivered only to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandResponse {
    /// Same id as the request this answers.
    pub command_id: CommandId,
    /// The area that handled (or failed to handle) the command.
    pub interactable_id: AreaId,
    pub outcome: CommandOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_internally_tagged() {
        let cmd = AreaCommand::LeaveGame { game_id: GameId(7) };
        let json: serde_json::Value = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["type"], "LeaveGame");
        assert_eq!(json["game_id"], 7);
    }

    #[test]
    fn test_game_move_wire_field_is_move() {
        let cmd = AreaCommand::GameMove {
            game_id: GameId(1),
            offer: TradeOffer {
                fish: vec![],
                accept: true,
            },
        };
        let json: serde_json::Value = serde_json::to_value(&cmd).unwrap();
        assert_eq!(json["move"]["accept"], true);
        assert!(json.get("offer").is_none());
    }

    #[test]
    fn test_command_tags() {
        assert_eq!(AreaCommand::JoinGame.tag(), "JoinGame");
        assert_eq!(AreaCommand::CastLine.tag(), "CastLine");
        assert_eq!(
            AreaCommand::LeaveGame { game_id: GameId(1) }.tag(),
            "LeaveGame"
        );
    }

    #[test]
    fn test_unknown_command_tag_fails_to_decode() {
        let unknown = r#"{"type": "TeleportHome"}"#;
        let result: Result<AreaCommand, _> = serde_json::from_str(unknown);
        assert!(result.is_err());
    }

    #[test]
    fn test_request_round_trip() {
        let request = CommandRequest {
            command_id: CommandId(12),
            interactable_id: AreaId::new("Market"),
            command: AreaCommand::JoinGame,
        };
        let bytes = serde_json::to_vec(&request).unwrap();
        let decoded: CommandRequest = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(request, decoded);
    }

    #[test]
    fn test_outcome_payload_shape() {
        let outcome = CommandOutcome::Payload(Some(ResponsePayload::GameJoined {
            game_id: GameId(4),
        }));
        let json: serde_json::Value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["type"], "Payload");
        assert_eq!(json["data"]["type"], "GameJoined");
        assert_eq!(json["data"]["game_id"], 4);
        assert!(!outcome.is_error());
    }

    #[test]
    fn test_outcome_empty_success_shape() {
        let outcome = CommandOutcome::Payload(None);
        let json: serde_json::Value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["type"], "Payload");
        assert!(json["data"].is_null());
    }

    #[test]
    fn test_outcome_error_shape() {
        let outcome = CommandOutcome::Error("Game is not in progress.".into());
        let json: serde_json::Value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["type"], "Error");
        assert_eq!(json["data"], "Game is not in progress.");
        assert!(outcome.is_error());
    }
}
