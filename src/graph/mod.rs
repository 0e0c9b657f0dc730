pub mod arena;
pub mod connection;
pub mod delta_rule;
pub mod neuron;

pub use arena::Graph;
pub use connection::{Connection, ConnectionId};
pub use delta_rule::DeltaRule;
pub use neuron::{Neuron, NeuronId};
