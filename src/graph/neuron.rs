use serde::{Deserialize, Serialize};

use crate::graph::connection::ConnectionId;

/// Index of a neuron inside its `Graph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NeuronId(pub usize);

/// Scalar state of one unit plus the ids of the connections touching it.
///
/// `weighted_input`, `output` and `delta` are overwritten on every
/// activate/train cycle; nothing is kept between cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neuron {
    pub is_bias: bool,
    pub weighted_input: f64,
    pub output: f64,
    pub delta: f64,
    pub learning_rate: f64,
    pub incoming: Vec<ConnectionId>,
    pub outgoing: Vec<ConnectionId>,
}

impl Neuron {
    pub fn new(learning_rate: f64) -> Neuron {
        Neuron {
            is_bias: false,
            weighted_input: 0.0,
            output: 0.0,
            delta: 0.0,
            learning_rate,
            incoming: Vec::new(),
            outgoing: Vec::new(),
        }
    }

    /// A bias unit: no inputs, output pinned to 1.
    pub fn bias(learning_rate: f64) -> Neuron {
        Neuron {
            is_bias: true,
            output: 1.0,
            ..Neuron::new(learning_rate)
        }
    }

    pub fn is_output_neuron(&self) -> bool {
        self.outgoing.is_empty()
    }

    pub fn is_input_neuron(&self) -> bool {
        self.incoming.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_neuron_is_both_input_and_output() {
        let n = Neuron::new(0.3);
        assert!(n.is_input_neuron());
        assert!(n.is_output_neuron());
        assert!(!n.is_bias);
    }

    #[test]
    fn test_bias_starts_at_one() {
        let b = Neuron::bias(0.3);
        assert!(b.is_bias);
        assert_eq!(b.output, 1.0);
        assert!(b.incoming.is_empty());
    }
}
