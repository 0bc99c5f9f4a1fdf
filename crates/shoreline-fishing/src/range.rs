//! A validated numeric range with biased random sampling.

use rand::Rng;

use crate::ValidationError;

/// A number confined to `[min, max]` with `0 < min <= max`.
///
/// Writes clamp into the range, so `min <= value <= max` holds at all
/// times. The held value doubles as the sampling state for
/// [`sample_with_bias`](Self::sample_with_bias): each call overwrites it
/// with the fresh draw.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedNumber {
    min: f64,
    max: f64,
    value: f64,
}

impl BoundedNumber {
    /// Creates a range whose value starts at `min`.
    ///
    /// # Errors
    /// [`ValidationError::InvalidRange`] if `min <= 0` or `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Self, ValidationError> {
        if min <= 0.0 || min > max {
            return Err(ValidationError::InvalidRange);
        }
        Ok(Self {
            min,
            max,
            value: min,
        })
    }

    /// Creates a range whose value starts at `initial`, clamped into
    /// `[min, max]`.
    pub fn with_initial(min: f64, max: f64, initial: f64) -> Result<Self, ValidationError> {
        let mut range = Self::new(min, max)?;
        range.set(initial);
        Ok(range)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Stores `value`, clamped into `[min, max]`.
    pub fn set(&mut self, value: f64) {
        self.value = self.clamped(value);
    }

    /// Draws a uniform number in `[0, 1]`, raises it to `bias`, scales the
    /// result into the range, clamps, stores, and returns it.
    ///
    /// - `bias = 0` always yields `max`: any draw to the zeroth power is 1,
    ///   which scales past `max` and clamps back down.
    /// - `bias = 1` is uniform.
    /// - `bias > 1` skews toward `min`; `0 < bias < 1` skews toward `max`.
    pub fn sample_with_bias<R: Rng + ?Sized>(&mut self, rng: &mut R, bias: f64) -> f64 {
        let draw: f64 = rng.random();
        let scaled = (draw.powf(bias) * (self.max - self.min + 1.0) + self.min).abs();
        self.set(scaled);
        self.value
    }

    fn clamped(&self, value: f64) -> f64 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}
