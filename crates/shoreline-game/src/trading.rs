//! The two-party item-trading negotiation.

use shoreline_protocol::{GameStatus, PlayerId, TradeOffer, TradeRole, TradingMove, TradingState};

use crate::{GameError, GameRules};

/// Rules for the trading game: two seats, alternating offers, and a single
/// accept to conclude.
///
/// The acting seat is resolved from the roster at face value — a mover who
/// is not `player1` is treated as seat 2. The `turn` field is advisory: a
/// seat may overwrite either standing offer out of turn. That looseness is
/// deliberate (the client only offers the button to the seat whose turn it
/// is) and tightening it would break existing clients.
pub struct Trading;

impl Trading {
    fn role_of(state: &TradingState, player: PlayerId) -> TradeRole {
        if state.player1 == Some(player) {
            TradeRole::One
        } else {
            TradeRole::Two
        }
    }
}

impl GameRules for Trading {
    type State = TradingState;
    type Move = TradeOffer;

    fn initial() -> TradingState {
        TradingState {
            status: GameStatus::WaitingToStart,
            player1: None,
            player2: None,
            turn: TradeRole::One,
            offer1: Vec::new(),
            offer2: Vec::new(),
            accepted: false,
            moves: Vec::new(),
        }
    }

    fn status(state: &TradingState) -> GameStatus {
        state.status
    }

    fn join(state: &TradingState, player: PlayerId) -> Result<TradingState, GameError> {
        if state.player1 == Some(player) || state.player2 == Some(player) {
            return Err(GameError::AlreadyInGame);
        }

        let mut next = state.clone();
        if next.player1.is_none() {
            next.player1 = Some(player);
        } else if next.player2.is_none() {
            next.player2 = Some(player);
        } else {
            return Err(GameError::GameFull);
        }

        if next.player1.is_some() && next.player2.is_some() {
            next.status = GameStatus::InProgress;
        }
        Ok(next)
    }

    fn leave(state: &TradingState, player: PlayerId) -> TradingState {
        if state.player1 != Some(player) && state.player2 != Some(player) {
            return state.clone();
        }
        // Roster never completed: vacate everything, record nothing.
        if state.player2.is_none() {
            return Self::initial();
        }
        // Either seat leaving a started game concludes it. No forfeiter is
        // recorded; the history credits both seats the same flat score.
        let mut next = state.clone();
        next.status = GameStatus::Over;
        next
    }

    fn apply(
        state: &TradingState,
        player: PlayerId,
        mv: TradeOffer,
    ) -> Result<TradingState, GameError> {
        let role = Self::role_of(state, player);
        let mut next = state.clone();

        if mv.accept {
            // Accept freezes both standing offers as-is.
            next.status = GameStatus::Over;
            next.accepted = true;
        } else {
            match role {
                TradeRole::One => next.offer1 = mv.fish.clone(),
                TradeRole::Two => next.offer2 = mv.fish.clone(),
            }
            next.turn = role.other();
        }

        next.moves.push(TradingMove {
            player: role,
            fish: mv.fish,
            accept: mv.accept,
        });
        Ok(next)
    }
}
