//! The generic game engine: identity, roster, and lifecycle enforcement
//! around a variant's pure transition rules.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use serde::de::DeserializeOwned;
use shoreline_protocol::{GameId, GameModel, GameResult, GameStatus, PlayerId};

use crate::GameError;

/// Counter for generating unique game instance ids.
static NEXT_GAME_ID: AtomicU64 = AtomicU64::new(1);

/// The transition rules of one game variant.
///
/// Every method takes the current state by reference and returns a
/// complete replacement. Whole-state replacement is the atomic unit of
/// mutation here — partial field updates are forbidden by contract, so a
/// snapshot taken between transitions is always consistent.
pub trait GameRules: Send + Sync + 'static {
    /// The full game state. Serializable so areas can broadcast it.
    type State: Clone + Send + Sync + Serialize + DeserializeOwned + 'static;

    /// A move a player can make.
    type Move: Clone + Send + Sync + 'static;

    /// The state of a game nobody has joined yet.
    fn initial() -> Self::State;

    /// The lifecycle status encoded in `state`.
    fn status(state: &Self::State) -> GameStatus;

    /// Seats `player`, flipping the status to `InProgress` once the roster
    /// is complete.
    ///
    /// # Errors
    /// [`GameError::GameFull`] when every seat is taken.
    fn join(state: &Self::State, player: PlayerId) -> Result<Self::State, GameError>;

    /// Removes `player`. Before the roster ever completed this resets to
    /// the initial state; after the game started it concludes the game.
    fn leave(state: &Self::State, player: PlayerId) -> Self::State;

    /// Applies one move. Only called while the game is `InProgress`; the
    /// transition may itself conclude the game.
    fn apply(
        state: &Self::State,
        player: PlayerId,
        mv: Self::Move,
    ) -> Result<Self::State, GameError>;
}

/// One playthrough of a game variant: a unique id, the roster in join
/// order (the order assigns roles), the current state, and the write-once
/// result.
pub struct GameInstance<R: GameRules> {
    id: GameId,
    players: Vec<PlayerId>,
    state: R::State,
    result: Option<GameResult>,
}

impl<R: GameRules> GameInstance<R> {
    /// Creates a fresh instance with a never-reused id.
    pub fn new() -> Self {
        Self {
            id: GameId(NEXT_GAME_ID.fetch_add(1, Ordering::Relaxed)),
            players: Vec::new(),
            state: R::initial(),
            result: None,
        }
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    /// Roster in join order.
    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    pub fn status(&self) -> GameStatus {
        R::status(&self.state)
    }

    pub fn result(&self) -> Option<&GameResult> {
        self.result.as_ref()
    }

    /// Seats a player.
    ///
    /// # Errors
    /// [`GameError::AlreadyInGame`] if the player holds a seat already,
    /// [`GameError::GameFull`] if no seat is free.
    pub fn join(&mut self, player: PlayerId) -> Result<(), GameError> {
        if self.players.contains(&player) {
            return Err(GameError::AlreadyInGame);
        }
        self.state = R::join(&self.state, player)?;
        self.players.push(player);
        tracing::debug!(game_id = %self.id, %player, players = self.players.len(), "player joined game");
        Ok(())
    }

    /// Removes a player. A no-op for non-members. If the roster never
    /// completed the game resets to its initial state with the slot
    /// vacated; if the game had started it concludes.
    pub fn leave(&mut self, player: PlayerId) {
        if !self.players.contains(&player) {
            return;
        }
        self.state = R::leave(&self.state, player);
        self.players.retain(|p| *p != player);
        tracing::debug!(game_id = %self.id, %player, status = %self.status(), "player left game");
    }

    /// Applies one move on behalf of `player`.
    ///
    /// # Errors
    /// [`GameError::NotInProgress`] unless the game is `InProgress`; any
    /// error the rules raise for the move itself.
    pub fn apply_move(&mut self, player: PlayerId, mv: R::Move) -> Result<(), GameError> {
        if self.status() != GameStatus::InProgress {
            return Err(GameError::NotInProgress);
        }
        self.state = R::apply(&self.state, player, mv)?;
        Ok(())
    }

    /// Records the terminal result. Set once on conclusion; later calls
    /// are ignored.
    pub fn set_result(&mut self, result: GameResult) {
        if self.result.is_none() {
            self.result = Some(result);
        }
    }

    /// Snapshot for broadcasting.
    pub fn model(&self) -> GameModel<R::State> {
        GameModel {
            id: self.id,
            players: self.players.clone(),
            state: self.state.clone(),
            result: self.result.clone(),
        }
    }
}

impl<R: GameRules> Default for GameInstance<R> {
    fn default() -> Self {
        Self::new()
    }
}
