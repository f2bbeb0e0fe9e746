//! Error types for circuit construction, gate application and configuration.

use thiserror::Error;

/// Result type alias for simulator operations.
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors raised by the simulator core.
///
/// Measuring a state whose probabilities sum to zero is deliberately not an
/// error: the sampler falls back to the all-zero label.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Qubit count is zero or above the supported ceiling.
    #[error("invalid qubit count {count} (must be between 1 and {max})")]
    InvalidQubitCount { count: usize, max: usize },

    /// A gate location does not name a qubit of the register.
    #[error("location {loc} is out of range (num_qubits = {num_qubits})")]
    LocOutOfRange { loc: usize, num_qubits: usize },

    /// Control and target of a two-qubit gate coincide.
    #[error("control and target overlap at location {loc}")]
    OverlappingLocs { loc: usize },

    /// A state was handed to a circuit of a different width.
    #[error("qubit count mismatch: expected {expected}, got {actual}")]
    QubitCountMismatch { expected: usize, actual: usize },

    /// A raw amplitude vector does not have 2^N entries.
    #[error("dimension mismatch: expected {expected} amplitudes, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("configuration error: {0}")]
    Config(String),
}
