//! Per-species fish factories.

use rand::Rng;
use shoreline_protocol::CatchableFish;

use crate::{BoundedNumber, ValidationError};

/// Upper bound on any spawnable weight, in pounds. The heaviest whale ever
/// weighed on earth. Revisit if we start fishing on another planet.
pub const MAX_FISH_WEIGHT: f64 = 750_000.0;

/// Upper bound on any spawnable length, in feet.
pub const MAX_FISH_LENGTH: f64 = 350.0;

/// Movement speed magnitude must stay below this.
pub const MAX_MOVEMENT_SPEED: f64 = 10.0;

/// Rarity lives strictly between 0 and this.
pub const MAX_FISH_RARITY: f64 = 100.0;

/// Bias exponent applied when sampling weight and length. Above 1, so
/// spawns skew toward the small end of the range.
pub const SPAWN_BIAS: f64 = 1.5;

/// A validated factory that generates [`CatchableFish`] within configured
/// bounds.
///
/// The weight and length ranges are the factory's sampling state: every
/// [`spawn`](Self::spawn) re-rolls their held values in place. The rest of
/// the configuration is immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct FishSpawner {
    name: String,
    rarity: f64,
    movement_speed: f64,
    weight_range: BoundedNumber,
    length_range: BoundedNumber,
}

impl FishSpawner {
    /// Validates and builds a spawner for one species.
    ///
    /// # Errors
    /// - [`ValidationError::EmptyName`] for an empty name
    /// - [`ValidationError::InvalidRarity`] unless `0 < rarity < 100`
    /// - [`ValidationError::InvalidMovementSpeed`] unless `|speed| < 10`
    /// - [`ValidationError::InvalidWeightRange`] unless the range sits
    ///   below [`MAX_FISH_WEIGHT`]
    /// - [`ValidationError::InvalidLengthRange`] unless the range sits
    ///   within [`MAX_FISH_LENGTH`]
    pub fn new(
        name: impl Into<String>,
        rarity: f64,
        movement_speed: f64,
        weight_range: BoundedNumber,
        length_range: BoundedNumber,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if weight_range.min() < 0.0 || weight_range.max() >= MAX_FISH_WEIGHT {
            return Err(ValidationError::InvalidWeightRange {
                max: MAX_FISH_WEIGHT,
            });
        }
        if length_range.min() < 0.0 || length_range.max() > MAX_FISH_LENGTH {
            return Err(ValidationError::InvalidLengthRange {
                max: MAX_FISH_LENGTH,
            });
        }
        if rarity <= 0.0 || rarity >= MAX_FISH_RARITY {
            return Err(ValidationError::InvalidRarity {
                max: MAX_FISH_RARITY,
            });
        }
        if movement_speed.abs() >= MAX_MOVEMENT_SPEED {
            return Err(ValidationError::InvalidMovementSpeed {
                max: MAX_MOVEMENT_SPEED,
            });
        }

        Ok(Self {
            name,
            rarity,
            movement_speed,
            weight_range,
            length_range,
        })
    }

    /// Species name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Configured rarity weight (higher is more common).
    pub fn rarity(&self) -> f64 {
        self.rarity
    }

    /// Generates one fish. Weight and length are re-sampled from the held
    /// ranges with [`SPAWN_BIAS`]; the snapshot is independent of this
    /// spawner once returned.
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> CatchableFish {
        CatchableFish {
            name: self.name.clone(),
            weight: self.weight_range.sample_with_bias(rng, SPAWN_BIAS),
            length: self.length_range.sample_with_bias(rng, SPAWN_BIAS),
            rarity: self.rarity,
            movement_speed: self.movement_speed,
        }
    }
}
