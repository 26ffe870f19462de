//! Error types for the bench harness and trace output.

use glint_common::Frequency;

/// Errors that can occur while setting up or recording a simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// The bench clock frequency is zero, negative, or not finite.
    #[error("bench clock must be a positive frequency, got {0}")]
    InvalidClock(Frequency),

    /// A value was recorded for a line that was never registered.
    #[error("trace line {0} was never registered")]
    UnknownLine(usize),

    /// An I/O error occurred while writing trace data.
    #[error("trace I/O error: {0}")]
    Io(#[from] std::io::Error),
}
