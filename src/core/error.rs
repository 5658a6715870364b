//! Error types for draw runs

use thiserror::Error;

/// Failures surfaced by a draw run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The sequencer was asked to do something its current state does not allow,
    /// such as drawing from an empty candidate pool.
    #[error("invalid state: {0}")]
    InvalidState(String),
    /// `start()` was called while an earlier run was still scheduled
    #[error("a draw is already running")]
    AlreadyRunning,
    /// The run task ended without reporting back (panic or runtime shutdown)
    #[error("draw task failed: {0}")]
    TaskFailed(String),
}

impl DrawError {
    pub(crate) fn empty_pool() -> Self {
        DrawError::InvalidState("cannot draw from an empty candidate pool".to_string())
    }
}
