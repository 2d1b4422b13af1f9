//! Error type for simulation runs.

use thiserror::Error;

use crate::validation::ValidationError;

/// Reasons a simulation run can fail.
///
/// A failed run never returns partial results.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// The workload or configuration violates a precondition.
    #[error("invalid input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),

    /// The configuration is well-formed but the discipline is not implemented.
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// An algorithm name could not be parsed.
    #[error("unknown algorithm specification '{0}' (expected fcfs, spn, rr:<quantum> or priority)")]
    InvalidAlgorithm(String),

    /// A scheduler returned without completing a process.
    #[error("process {pid} did not complete")]
    IncompleteRun {
        /// Offending process.
        pid: u32,
    },

    /// Configuration could not be deserialized.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl SimulationError {
    /// Validation errors carried by an `InvalidInput` failure.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
            _ => &[],
        }
    }
}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
