use serde::{Serialize, Deserialize};

use crate::error::{NetworkError, Result};

/// Configuration for a training run.
///
/// # Fields
/// - `epochs`        — full passes over the dataset; always run to completion
/// - `log_frequency` — a report is emitted every `log_frequency` epochs, plus
///                     the first and the last
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub epochs: usize,
    pub log_frequency: usize,
}

impl TrainConfig {
    pub fn new(epochs: usize, log_frequency: usize) -> Self {
        TrainConfig { epochs, log_frequency }
    }

    pub fn validate(&self) -> Result<()> {
        if self.epochs == 0 {
            return Err(NetworkError::Configuration("epochs must be at least 1".to_string()));
        }
        if self.log_frequency == 0 {
            return Err(NetworkError::Configuration(
                "log_frequency must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether the 1-based `epoch` should be reported.
    pub fn should_report(&self, epoch: usize) -> bool {
        epoch == 1 || epoch % self.log_frequency == 0 || epoch == self.epochs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_schedule() {
        let config = TrainConfig::new(25, 10);
        let reported: Vec<usize> = (1..=25).filter(|&e| config.should_report(e)).collect();
        assert_eq!(reported, vec![1, 10, 20, 25]);
    }

    #[test]
    fn test_zero_values_rejected() {
        assert!(TrainConfig::new(0, 1).validate().is_err());
        assert!(TrainConfig::new(1, 0).validate().is_err());
        assert!(TrainConfig::new(1, 1).validate().is_ok());
    }
}
