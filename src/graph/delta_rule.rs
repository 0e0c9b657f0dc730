use serde::{Deserialize, Serialize};

use crate::activation::sigmoid::Sigmoid;
use crate::loss::mse::MseLoss;

/// How a neuron's error signal is formed during the backward pass.
///
/// - `Standard`       — textbook back-propagation: every delta is scaled by
///   σ′ of the neuron's weighted input.
/// - `OmitDerivative` — the σ′ factor is dropped: output delta is plain
///   `output − target`, hidden delta is the weighted sum of downstream deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeltaRule {
    #[default]
    Standard,
    OmitDerivative,
}

impl DeltaRule {
    fn slope(&self, weighted_input: f64) -> f64 {
        match self {
            DeltaRule::Standard => Sigmoid::derivative(weighted_input),
            DeltaRule::OmitDerivative => 1.0,
        }
    }

    /// Delta of a neuron with no outgoing connections.
    pub fn output_delta(&self, weighted_input: f64, output: f64, target: f64) -> f64 {
        MseLoss::derivative(output, target) * self.slope(weighted_input)
    }

    /// Delta of a hidden neuron, given Σ weight · downstream delta.
    pub fn hidden_delta(&self, weighted_input: f64, downstream: f64) -> f64 {
        self.slope(weighted_input) * downstream
    }
}
