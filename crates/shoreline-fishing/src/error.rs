//! Error types for fish generation.

/// Malformed construction arguments or an out-of-domain draw. Fatal to the
/// call that raised it: nothing is constructed, the caller must fix its
/// inputs before retrying.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Range construction with `min <= 0` or `min > max`.
    #[error("invalid range: min must be above 0 and no greater than max")]
    InvalidRange,

    /// A fish species needs a non-empty name.
    #[error("fish name must be at least one character long")]
    EmptyName,

    /// Rarity outside the open interval (0, 100).
    #[error("rarity must be strictly between 0 and {max}")]
    InvalidRarity { max: f64 },

    /// Movement speed magnitude at or above the domain limit.
    #[error("fish movement speed magnitude must be below {max}")]
    InvalidMovementSpeed { max: f64 },

    /// Weight range outside what any earth fish could weigh.
    #[error("invalid weight range: min must be at least 0 and max below {max}")]
    InvalidWeightRange { max: f64 },

    /// Length range outside what any earth fish could measure.
    #[error("invalid length range: min must be at least 0 and max at most {max}")]
    InvalidLengthRange { max: f64 },

    /// Weighted selection over an empty spawner set.
    #[error("no spawners to select from")]
    NoSpawners,

    /// Weighted selection with a draw outside [0, 1].
    #[error("draw must be between 0 and 1")]
    DrawOutOfRange,
}
