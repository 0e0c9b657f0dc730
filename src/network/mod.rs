pub mod config;
pub mod network;

pub use config::{NetworkConfig, WeightInit, WeightSampler};
pub use network::Network;
