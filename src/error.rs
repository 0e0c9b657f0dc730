//! Error types for the network engine.

use thiserror::Error;

/// Result type alias for this crate.
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Every failure the engine can report.
///
/// All errors are raised synchronously by the call that detects them, and
/// always before any neuron or connection state has been touched.
#[derive(Error, Debug)]
pub enum NetworkError {
    /// Invalid topology or hyperparameters.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// A vector did not match the layer it was meant for.
    #[error("{what}: expected {expected} values, got {actual}")]
    Dimension {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// NaN or infinity where a finite value is required.
    #[error("non-finite {what} at index {index}: {value}")]
    NumericInstability {
        what: &'static str,
        index: usize,
        value: f64,
    },

    /// An output neuron was trained without a target value.
    #[error("output neuron {neuron} has no target value")]
    MissingTarget { neuron: usize },

    /// A trainer was given no samples.
    #[error("dataset is empty")]
    EmptyDataset,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl NetworkError {
    pub(crate) fn dimension(what: &'static str, expected: usize, actual: usize) -> Self {
        NetworkError::Dimension { what, expected, actual }
    }
}

/// Rejects the first non-finite entry of `values`.
pub(crate) fn ensure_finite(what: &'static str, values: &[f64]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(NetworkError::NumericInstability {
            what,
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}
