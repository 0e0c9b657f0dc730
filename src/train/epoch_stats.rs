use serde::{Serialize, Deserialize};

/// One progress report emitted by the training loop.
///
/// Reports are produced on the first epoch, on every `log_frequency`-th
/// epoch, and on the final epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Mean of the network error over all samples in this epoch.
    pub average_error: f64,
    /// Wall-clock duration of this single epoch in milliseconds.
    pub elapsed_ms: u64,
}
