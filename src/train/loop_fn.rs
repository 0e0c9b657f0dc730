use std::time::Instant;

use crate::error::{ensure_finite, NetworkError, Result};
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::sample::Sample;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` for `config.epochs` epochs and returns the average error
/// of the **last** epoch.
///
/// Each epoch visits every sample once, in dataset order, doing one forward
/// and one backward pass per sample (online gradient descent). There is no
/// shuffling and no early stopping.
///
/// `on_report` is called with the epoch's stats whenever
/// `TrainConfig::should_report` says so.
///
/// # Errors
/// Fails before touching the network if the config is invalid, the dataset
/// is empty, or any sample does not fit the network.
pub fn train_loop<F>(
    network: &mut Network,
    dataset: &[Sample],
    config: &TrainConfig,
    mut on_report: F,
) -> Result<f64>
where
    F: FnMut(&EpochStats),
{
    config.validate()?;
    validate_dataset(network, dataset)?;

    let mut last_error = 0.0;

    for epoch in 1..=config.epochs {
        let t_start = Instant::now();

        let average_error = run_one_epoch(network, dataset)?;
        last_error = average_error;

        if !average_error.is_finite() {
            tracing::warn!(epoch, average_error, "training error is not finite");
        }

        if config.should_report(epoch) {
            let stats = EpochStats {
                epoch,
                total_epochs: config.epochs,
                average_error,
                elapsed_ms: t_start.elapsed().as_millis() as u64,
            };
            tracing::info!(epoch, average_error, "epoch complete");
            on_report(&stats);
        }
    }

    Ok(last_error)
}

/// Checks that `dataset` is non-empty and every sample matches the network's
/// input and output widths with finite values.
pub fn validate_dataset(network: &Network, dataset: &[Sample]) -> Result<()> {
    if dataset.is_empty() {
        return Err(NetworkError::EmptyDataset);
    }

    let inputs = network.input_layer().size();
    let outputs = network.output_layer().size();
    for sample in dataset {
        if sample.input.len() != inputs {
            return Err(NetworkError::dimension("sample input", inputs, sample.input.len()));
        }
        if sample.target.len() != outputs {
            return Err(NetworkError::dimension("sample target", outputs, sample.target.len()));
        }
        ensure_finite("sample input", &sample.input)?;
        ensure_finite("sample target", &sample.target)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// One pass over the dataset. Returns the mean per-sample network error.
fn run_one_epoch(network: &mut Network, dataset: &[Sample]) -> Result<f64> {
    let n = dataset.len() as f64;
    let mut average = 0.0;

    for sample in dataset {
        network.activate(&sample.input)?;
        network.train(&sample.target)?;
        average += network.error() / n;
    }

    Ok(average)
}
