pub mod error;
pub mod activation;
pub mod loss;
pub mod graph;
pub mod layers;
pub mod network;
pub mod train;

// Convenience re-exports
pub use error::{NetworkError, Result};
pub use activation::sigmoid::Sigmoid;
pub use loss::mse::MseLoss;
pub use graph::{Connection, ConnectionId, DeltaRule, Graph, Neuron, NeuronId};
pub use layers::layer::Layer;
pub use network::{Network, NetworkConfig, WeightInit};
pub use train::{train_loop, EpochStats, Sample, TrainConfig, Trainer};
