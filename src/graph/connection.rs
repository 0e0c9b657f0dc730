use serde::{Deserialize, Serialize};

use crate::graph::neuron::NeuronId;

/// Index of a connection inside its `Graph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectionId(pub usize);

/// A weighted, directed edge between two neurons.
///
/// The same id appears on the source's `outgoing` list and on the target's
/// `incoming` list. Only `Graph::train_neuron` on the source mutates `weight`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub source: NeuronId,
    pub target: NeuronId,
    pub weight: f64,
}

impl Connection {
    pub fn new(source: NeuronId, target: NeuronId, weight: f64) -> Connection {
        Connection { source, target, weight }
    }
}
