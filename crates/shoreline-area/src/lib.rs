//! Interactable areas for the Shoreline town service.
//!
//! Each area runs as an isolated Tokio task (actor model) that owns its
//! activity state exclusively. Commands arrive on the actor's channel and
//! run to completion one at a time, which gives per-area mutual exclusion
//! by construction — no locks, and no way for two commands to interleave
//! against the same game instance. Areas share nothing with each other, so
//! commands for different areas proceed concurrently.
//!
//! # Key types
//!
//! - [`InteractableArea`] — the capability set an area variant implements
//! - [`TradingArea`] / [`FishingArea`] — the two concrete variants
//! - [`AreaHandle`] — send commands to a running area actor
//! - [`AreaDirectory`] — routes command envelopes to areas by id
//! - [`ResultSink`] — fire-and-forget persistence seam for game outcomes

mod area;
mod directory;
mod error;
mod fishing_area;
mod sink;
mod trading_area;

pub use area::{AreaHandle, AreaSubscriber, InteractableArea, spawn_area};
pub use directory::AreaDirectory;
pub use error::AreaError;
pub use fishing_area::FishingArea;
pub use sink::{NullSink, ResultSink, SinkError};
pub use trading_area::TradingArea;
