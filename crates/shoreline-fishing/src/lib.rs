//! Fish generation for Shoreline.
//!
//! A [`FishSpawner`] is a validated factory that produces randomized
//! [`CatchableFish`](shoreline_protocol::CatchableFish) snapshots from
//! configured weight and length ranges. [`spawn_weighted`] picks one
//! spawner out of a set by cumulative rarity, so common species come up
//! proportionally more often than rare ones.
//!
//! # Key types
//!
//! - [`BoundedNumber`] — a validated range with biased random sampling
//! - [`FishSpawner`] — per-species configuration and sampling state
//! - [`spawn_weighted`] — cumulative-rarity selection over a spawner set
//! - [`stock_spawners`] — the default species catalog

mod catalog;
mod error;
mod range;
mod select;
mod spawner;

pub use catalog::stock_spawners;
pub use error::ValidationError;
pub use range::BoundedNumber;
pub use select::spawn_weighted;
pub use spawner::{
    FishSpawner, MAX_FISH_LENGTH, MAX_FISH_RARITY, MAX_FISH_WEIGHT, MAX_MOVEMENT_SPEED,
    SPAWN_BIAS,
};
