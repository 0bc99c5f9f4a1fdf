//! The trading area: hosts at most one live trading game, keeps the
//! result history, and records outcomes through the sink.

use shoreline_game::{GameError, GameInstance, Trading};
use shoreline_protocol::{
    AreaCommand, AreaId, AreaModel, BoundingBox, GameId, GameResult, GameStatus, PlayerId,
    PlayerInfo, ResponsePayload, TradeOffer,
};

use crate::{AreaError, InteractableArea, NullSink, ResultSink};

/// Flat score credited to both seats of a concluded trade. This game type
/// records no asymmetric outcomes — ties only.
const FLAT_SCORE: u32 = 1;

/// A bounded region hosting the two-party trading negotiation.
pub struct TradingArea {
    id: AreaId,
    bounds: BoundingBox,
    occupants: Vec<PlayerInfo>,
    game: Option<GameInstance<Trading>>,
    history: Vec<GameResult>,
    sink: Box<dyn ResultSink>,
}

impl TradingArea {
    /// Creates a trading area with no persistence sink.
    ///
    /// # Errors
    /// [`AreaError::MalformedArea`] for a degenerate bounding box.
    pub fn new(id: AreaId, bounds: BoundingBox) -> Result<Self, AreaError> {
        Self::with_sink(id, bounds, Box::new(NullSink))
    }

    /// Creates a trading area that reports concluded games to `sink`.
    pub fn with_sink(
        id: AreaId,
        bounds: BoundingBox,
        sink: Box<dyn ResultSink>,
    ) -> Result<Self, AreaError> {
        if bounds.is_degenerate() {
            return Err(AreaError::MalformedArea(id));
        }
        Ok(Self {
            id,
            bounds,
            occupants: Vec::new(),
            game: None,
            history: Vec::new(),
            sink,
        })
    }

    /// The region of the map this area covers.
    pub fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    /// Display name for a player, falling back to the raw id once they
    /// have left the area.
    fn display_name(&self, player: PlayerId) -> String {
        self.occupants
            .iter()
            .find(|occupant| occupant.id == player)
            .map(|occupant| occupant.user_name.clone())
            .unwrap_or_else(|| player.to_string())
    }

    /// Called after every state-mutating command. If the live game has
    /// newly concluded, appends exactly one history entry for its id and
    /// hands it to the sink. Retried concluding commands find the entry
    /// already present and append nothing.
    fn record_outcome(&mut self) {
        let Some(game) = self.game.as_ref() else {
            return;
        };
        if game.status() != GameStatus::Over {
            return;
        }
        let game_id = game.id();
        if self.history.iter().any(|entry| entry.game_id == game_id) {
            return;
        }
        let (Some(player1), Some(player2)) = (game.state().player1, game.state().player2) else {
            return;
        };

        let mut scores = std::collections::HashMap::new();
        scores.insert(self.display_name(player1), FLAT_SCORE);
        scores.insert(self.display_name(player2), FLAT_SCORE);

        let result = GameResult { game_id, scores };
        if let Some(game) = self.game.as_mut() {
            game.set_result(result.clone());
        }
        self.history.push(result.clone());
        tracing::info!(area_id = %self.id, %game_id, "game concluded, outcome recorded");

        // Persistence is fire-and-forget: the in-memory transition already
        // happened, so a sink failure is logged and the command succeeds.
        if let Err(err) = self.sink.record(&self.id, &result) {
            tracing::warn!(area_id = %self.id, %game_id, %err, "result sink failed");
        }
    }

    /// The live instance, or "Game is not in progress." without one.
    fn live_game(&mut self) -> Result<&mut GameInstance<Trading>, AreaError> {
        self.game
            .as_mut()
            .ok_or(AreaError::Game(GameError::NotInProgress))
    }

    fn join_game(&mut self, player: &PlayerInfo) -> Result<Option<ResponsePayload>, AreaError> {
        // A concluded instance is replaced, never resurrected.
        let needs_new = match &self.game {
            None => true,
            Some(game) => game.status() == GameStatus::Over,
        };
        if needs_new {
            self.game = Some(GameInstance::new());
        }

        let game = self.live_game()?;
        game.join(player.id)?;
        let game_id = game.id();
        self.record_outcome();
        Ok(Some(ResponsePayload::GameJoined { game_id }))
    }

    fn apply_offer(
        &mut self,
        player: &PlayerInfo,
        game_id: Option<GameId>,
        offer: TradeOffer,
    ) -> Result<Option<ResponsePayload>, AreaError> {
        let game = self.live_game()?;
        if let Some(game_id) = game_id {
            if game.id() != game_id {
                return Err(AreaError::GameIdMismatch);
            }
        }
        game.apply_move(player.id, offer)?;
        self.record_outcome();
        Ok(None)
    }

    fn leave_game(
        &mut self,
        player: &PlayerInfo,
        game_id: GameId,
    ) -> Result<Option<ResponsePayload>, AreaError> {
        let game = self.live_game()?;
        if game.id() != game_id {
            return Err(AreaError::GameIdMismatch);
        }
        game.leave(player.id);
        self.record_outcome();
        Ok(None)
    }
}

impl InteractableArea for TradingArea {
    fn id(&self) -> &AreaId {
        &self.id
    }

    fn add_occupant(&mut self, player: PlayerInfo) {
        if !self.occupants.iter().any(|o| o.id == player.id) {
            self.occupants.push(player);
        }
    }

    fn remove_occupant(&mut self, player: PlayerId) {
        self.occupants.retain(|o| o.id != player);
    }

    fn snapshot(&self) -> AreaModel {
        AreaModel::TradingArea {
            id: self.id.clone(),
            occupants: self.occupants.iter().map(|o| o.id).collect(),
            game: self.game.as_ref().map(|g| g.model()),
            history: self.history.clone(),
        }
    }

    fn handle_command(
        &mut self,
        player: &PlayerInfo,
        command: AreaCommand,
    ) -> Result<Option<ResponsePayload>, AreaError> {
        match command {
            AreaCommand::JoinGame => self.join_game(player),
            AreaCommand::GameMove { game_id, offer } => {
                self.apply_offer(player, Some(game_id), offer)
            }
            // TradeCommand targets whatever instance is live; the id it
            // carries is informational only.
            AreaCommand::TradeCommand { offer, .. } => self.apply_offer(player, None, offer),
            AreaCommand::LeaveGame { game_id } => self.leave_game(player, game_id),
            other => Err(AreaError::UnsupportedCommand(other.tag())),
        }
    }
}
