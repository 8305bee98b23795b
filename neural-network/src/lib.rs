// Modules
pub mod activations;
pub mod cost;
pub mod error;
pub mod layer;
pub mod network;
pub mod network_config;
pub mod neuron;

pub use activations::ActivationType;
pub use cost::{CostFunction, CostType, CrossEntropy, LogLikelihood, MeanSquaredError};
pub use error::NetworkError;
pub use layer::{Layer, LayerKind};
pub use network::{Network, TrainReport};
pub use network_config::{NetworkConfig, NetworkConfigBuilder, TrainOptions};
pub use neuron::Neuron;
