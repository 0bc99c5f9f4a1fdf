//! Fire-and-forget persistence seam for game outcomes.
//!
//! The sink is called after the in-memory transition has completed; its
//! outcome never affects command success. Failures are logged by the
//! caller and otherwise dropped.

use shoreline_protocol::{AreaId, GameResult};

/// A persistence failure. Carries only a description; the core does not
/// depend on the storage technology behind the sink.
#[derive(Debug, thiserror::Error)]
#[error("result sink failed: {0}")]
pub struct SinkError(pub String);

/// Receives each concluded game's result exactly once per instance.
pub trait ResultSink: Send + 'static {
    /// Records one outcome.
    ///
    /// # Errors
    /// Implementations may fail; callers log and continue.
    fn record(&mut self, area: &AreaId, result: &GameResult) -> Result<(), SinkError>;
}

/// The default sink: discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ResultSink for NullSink {
    fn record(&mut self, _area: &AreaId, _result: &GameResult) -> Result<(), SinkError> {
        Ok(())
    }
}
