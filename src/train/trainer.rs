use crate::error::Result;
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::loop_fn::{train_loop, validate_dataset};
use crate::train::sample::Sample;
use crate::train::train_config::TrainConfig;

/// Drives fixed-length training runs of one network over one dataset.
///
/// The trainer keeps no state of its own between runs; everything learned
/// lives in the network's weights.
pub struct Trainer<'a> {
    network: &'a mut Network,
    dataset: &'a [Sample],
}

impl<'a> Trainer<'a> {
    /// Fails if the dataset is empty or any sample does not fit `network`.
    pub fn new(network: &'a mut Network, dataset: &'a [Sample]) -> Result<Trainer<'a>> {
        validate_dataset(network, dataset)?;
        Ok(Trainer { network, dataset })
    }

    pub fn network(&self) -> &Network {
        &*self.network
    }

    pub fn dataset(&self) -> &[Sample] {
        self.dataset
    }

    /// Runs `epochs` epochs and returns every report produced along the way.
    pub fn train(&mut self, epochs: usize, log_frequency: usize) -> Result<Vec<EpochStats>> {
        let mut reports = Vec::new();
        let config = TrainConfig::new(epochs, log_frequency);
        self.train_with(&config, |stats| reports.push(stats.clone()))?;
        Ok(reports)
    }

    /// Runs `config.epochs` epochs, handing each report to `sink`.
    /// Returns the average error of the final epoch.
    pub fn train_with<F>(&mut self, config: &TrainConfig, sink: F) -> Result<f64>
    where
        F: FnMut(&EpochStats),
    {
        train_loop(&mut *self.network, self.dataset, config, sink)
    }
}
