use crate::cost::CostType;
use crate::error::NetworkError;
use crate::layer::LayerKind;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for a neural network.
///
/// Holds the architecture parameters: layer sizes, the layer variant, and
/// the cost function used to seed backpropagation.
///
/// # Example
///
/// ```
/// use neural_network::NetworkConfig;
///
/// let config = NetworkConfig::default();
/// assert_eq!(config.layers, vec![784, 128, 10]); // MNIST-like architecture
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Builder)]
#[builder(default)]
pub struct NetworkConfig {
    /// Sizes of each layer in the network. The first entry is the external
    /// input width (and the size of the input layer); each subsequent entry
    /// is a layer's neuron count.
    pub layers: Vec<usize>,

    /// The layer variant used throughout the network
    pub layer_kind: LayerKind,

    /// The cost function selected once per network
    pub cost: CostType,
}

impl NetworkConfig {
    pub fn new(layers: Vec<usize>, layer_kind: LayerKind, cost: CostType) -> Self {
        Self {
            layers,
            layer_kind,
            cost,
        }
    }

    /// A softmax-output configuration paired with the log-likelihood cost.
    pub fn softmax(layers: Vec<usize>) -> Self {
        Self::new(layers, LayerKind::Softmax, CostType::LogLikelihood)
    }

    /// Loads a network configuration from a JSON file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use neural_network::NetworkConfig;
    /// use std::path::Path;
    ///
    /// let config = NetworkConfig::load(Path::new("config.json")).unwrap();
    /// ```
    pub fn load(path: &Path) -> Result<Self, NetworkError> {
        let config_str = fs::read_to_string(path)?;
        let config = serde_json::from_str(&config_str)?;
        Ok(config)
    }
}

/// Default configuration suitable for MNIST-like datasets: 784 inputs,
/// one 128-neuron hidden layer, 10 sigmoid outputs, cross-entropy cost.
impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            layers: vec![784, 128, 10],
            layer_kind: LayerKind::Dense,
            cost: CostType::CrossEntropy,
        }
    }
}

/// Hyperparameters for one training call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainOptions {
    /// Upper bound on passes over the data
    pub epochs: usize,
    /// Step-size multiplier applied to error signals
    pub learning_rate: f64,
    /// Full-batch training stops early once the mean output-layer cost per
    /// epoch falls to or below this value. Ignored by the stochastic
    /// variant.
    pub threshold: f64,
    /// Number of examples drawn per stochastic epoch. `None` falls back to
    /// one hundredth of the dataset (at least one example). Ignored by the
    /// full-batch variant.
    pub batch_size: Option<usize>,
}

impl TrainOptions {
    /// Defaults for the stochastic variant, which runs fewer but sampled
    /// epochs.
    pub fn stochastic() -> Self {
        Self {
            epochs: 10_000,
            ..Self::default()
        }
    }

    /// The effective batch size for a dataset of `len` examples.
    pub fn batch_size_for(&self, len: usize) -> usize {
        self.batch_size.unwrap_or((len / 100).max(1))
    }
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self {
            epochs: 20_000,
            learning_rate: 0.3,
            threshold: 0.005,
            batch_size: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_config() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("test_config.json");

        let config_json = r#"{
            "layers": [784, 200, 10],
            "layer_kind": "Dense",
            "cost": "MeanSquaredError"
        }"#;

        let mut file = File::create(&config_path).unwrap();
        file.write_all(config_json.as_bytes()).unwrap();

        let config = NetworkConfig::load(&config_path).unwrap();
        assert_eq!(config.layers, vec![784, 200, 10]);
        assert_eq!(config.layer_kind, LayerKind::Dense);
        assert_eq!(config.cost, CostType::MeanSquaredError);
    }

    #[test]
    fn test_load_rejects_malformed_config() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("broken.json");

        let mut file = File::create(&config_path).unwrap();
        file.write_all(b"{\"layers\": \"nope\"}").unwrap();

        assert!(matches!(
            NetworkConfig::load(&config_path),
            Err(NetworkError::Json(_))
        ));
    }

    #[test]
    fn test_default_config() {
        let config = NetworkConfig::default();
        assert_eq!(config.layers, vec![784, 128, 10]);
        assert_eq!(config.layer_kind, LayerKind::Dense);
        assert_eq!(config.cost, CostType::CrossEntropy);
    }

    #[test]
    fn test_builder_fills_unset_fields_from_defaults() {
        let config = NetworkConfigBuilder::default()
            .layers(vec![2, 5, 3])
            .build()
            .unwrap();

        assert_eq!(config.layers, vec![2, 5, 3]);
        assert_eq!(config.layer_kind, LayerKind::Dense);
        assert_eq!(config.cost, CostType::CrossEntropy);
    }

    #[test]
    fn test_softmax_config_pairs_log_likelihood() {
        let config = NetworkConfig::softmax(vec![4, 8, 3]);
        assert_eq!(config.layer_kind, LayerKind::Softmax);
        assert_eq!(config.cost, CostType::LogLikelihood);
    }

    #[test]
    fn test_train_options_defaults() {
        let options = TrainOptions::default();
        assert_eq!(options.epochs, 20_000);
        assert_eq!(options.learning_rate, 0.3);
        assert_eq!(options.threshold, 0.005);
        assert_eq!(options.batch_size, None);

        assert_eq!(TrainOptions::stochastic().epochs, 10_000);
    }

    #[test]
    fn test_batch_size_fallback() {
        let options = TrainOptions::default();
        assert_eq!(options.batch_size_for(1_000), 10);
        assert_eq!(options.batch_size_for(50), 1);

        let explicit = TrainOptions {
            batch_size: Some(8),
            ..TrainOptions::default()
        };
        assert_eq!(explicit.batch_size_for(1_000), 8);
    }
}
