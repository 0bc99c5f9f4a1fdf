//! Turn-based game lifecycle for Shoreline areas.
//!
//! [`GameRules`] is the extension point: a game variant supplies pure
//! state-transition functions, and the generic [`GameInstance`] wraps them
//! with identity, a role-assigning roster, and the
//! `WAITING_TO_START → IN_PROGRESS → OVER` lifecycle contract.
//!
//! [`Trading`] is the concrete two-party offer/accept negotiation hosted
//! by trading areas.

mod engine;
mod error;
mod trading;

pub use engine::{GameInstance, GameRules};
pub use error::GameError;
pub use trading::Trading;
