//! The stock species catalog used by fishing areas that don't configure
//! their own.

use crate::{BoundedNumber, FishSpawner, ValidationError};

/// Builds the default spawner set. Listed in selection order; rarity
/// weights make salmon the everyday catch and clownfish the prize.
pub fn stock_spawners() -> Result<Vec<FishSpawner>, ValidationError> {
    Ok(vec![
        FishSpawner::new(
            "clownfish",
            7.0,
            7.0,
            BoundedNumber::new(0.1, 1.3)?,
            BoundedNumber::new(1.0, 7.0)?,
        )?,
        FishSpawner::new(
            "shark",
            10.0,
            7.0,
            BoundedNumber::new(50.0, 300.0)?,
            BoundedNumber::new(40.0, 135.0)?,
        )?,
        FishSpawner::new(
            "angler",
            10.0,
            7.0,
            BoundedNumber::new(40.0, 150.0)?,
            BoundedNumber::new(20.0, 30.0)?,
        )?,
        FishSpawner::new(
            "salmon",
            50.0,
            5.0,
            BoundedNumber::new(10.0, 30.0)?,
            BoundedNumber::new(15.0, 45.0)?,
        )?,
    ])
}
