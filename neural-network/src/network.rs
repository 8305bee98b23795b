//! The network training engine: feedforward evaluation, backpropagated
//! error signals, in-place weight/bias adjustment, and the epoch loops.

use crate::cost::{CostFunction, CostType};
use crate::error::NetworkError;
use crate::layer::{Layer, LayerKind};
use crate::network_config::{NetworkConfig, TrainOptions};
use rand::Rng;

/// Outcome of a training run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainReport {
    /// Number of epochs actually executed
    pub epochs_run: usize,
    /// Mean output-layer cost of the last executed epoch
    pub final_cost: f64,
}

/// A feedforward neural network with configurable layers and a pluggable
/// cost function.
///
/// Layer 0 receives the raw external input; the last layer is the output
/// layer. For `i > 0`, the neurons of `layers[i]` have input arity equal to
/// the size of `layers[i - 1]`; layer 0's neurons have input arity equal to
/// the external input width. The network holds exclusive ownership of its
/// layers and neurons, and training mutates them in place.
///
/// # Examples
///
/// ```
/// use neural_network::{CostType, LayerKind, Network, TrainOptions};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let mut network =
///     Network::new(&[2, 5, 3], LayerKind::Dense, CostType::CrossEntropy, &mut rng).unwrap();
///
/// let data = vec![(vec![0.0, 1.0], vec![1.0, 0.0, 1.0])];
/// let options = TrainOptions {
///     epochs: 200,
///     ..TrainOptions::default()
/// };
/// let report = network.train(&data, &options).unwrap();
/// assert!(report.epochs_run >= 1);
///
/// let prediction = network.process(&[0.0, 1.0]).unwrap();
/// assert_eq!(prediction.len(), 3);
/// ```
pub struct Network {
    layers: Vec<Layer>,
    cost: Box<dyn CostFunction>,
}

impl Network {
    /// Creates a network from a list of layer sizes.
    ///
    /// `sizes[0]` is the external input width (and the size of layer 0);
    /// each subsequent entry is a layer's neuron count. Weight vectors are
    /// sized accordingly, initialized through the supplied random source.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::TooFewLayers`] for fewer than two layers
    /// (a single layer would leave nothing to train) and
    /// [`NetworkError::EmptyLayer`] if any size is zero.
    pub fn new<R: Rng + ?Sized>(
        sizes: &[usize],
        kind: LayerKind,
        cost: CostType,
        rng: &mut R,
    ) -> Result<Self, NetworkError> {
        if sizes.len() < 2 {
            return Err(NetworkError::TooFewLayers(sizes.len()));
        }
        if let Some(index) = sizes.iter().position(|&size| size == 0) {
            return Err(NetworkError::EmptyLayer { index });
        }

        let layers = sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| {
                let input_size = if i == 0 { sizes[0] } else { sizes[i - 1] };
                Layer::new(size, input_size, kind, rng)
            })
            .collect();

        Ok(Self {
            layers,
            cost: cost.create_cost(),
        })
    }

    /// Creates a network from a [`NetworkConfig`].
    pub fn from_config<R: Rng + ?Sized>(
        config: &NetworkConfig,
        rng: &mut R,
    ) -> Result<Self, NetworkError> {
        Self::new(&config.layers, config.layer_kind, config.cost, rng)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// The external input width the network accepts
    pub fn input_size(&self) -> usize {
        self.layers[0].input_size()
    }

    /// The number of neurons in the output layer
    pub fn output_size(&self) -> usize {
        self.layers[self.layers.len() - 1].size()
    }

    /// Feeds an input vector through every layer in order and returns the
    /// final layer's output. Pure function of the current weights; never
    /// mutates the network.
    pub fn process(&self, input: &[f64]) -> Result<Vec<f64>, NetworkError> {
        self.layers
            .iter()
            .try_fold(input.to_vec(), |current, layer| layer.process(&current))
    }

    /// Same computation as [`Network::process`], but records and returns
    /// every layer's output vector, in layer order.
    ///
    /// The raw input itself is not part of the returned sequence; it only
    /// feeds layer 0.
    pub fn feed_forward(&self, input: &[f64]) -> Result<Vec<Vec<f64>>, NetworkError> {
        let mut outputs = Vec::with_capacity(self.layers.len());
        let mut current = input.to_vec();
        for layer in &self.layers {
            current = layer.process(&current)?;
            outputs.push(current.clone());
        }
        Ok(outputs)
    }

    /// Computes one error value per neuron per layer, from the output layer
    /// back to layer 1, given a [`Network::feed_forward`] result and the
    /// target vector for one example.
    ///
    /// `deltas[i]` corresponds to `layers[i + 1]`; no deltas are computed
    /// for layer 0, which only contributes as an error source through its
    /// output. The output layer is seeded by the cost function's delta.
    /// Hidden-layer deltas are the plain weighted sum of the next layer's
    /// deltas through the connecting weights; the local activation
    /// derivative is deliberately left out of that step.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::OutputsLengthMismatch`] unless `outputs`
    /// holds one vector per layer, and
    /// [`NetworkError::TargetLengthMismatch`] if the target length differs
    /// from the output layer's size.
    pub fn calculate_deltas(
        &self,
        outputs: &[Vec<f64>],
        target: &[f64],
    ) -> Result<Vec<Vec<f64>>, NetworkError> {
        if outputs.len() != self.layers.len() {
            return Err(NetworkError::OutputsLengthMismatch {
                expected: self.layers.len(),
                got: outputs.len(),
            });
        }

        let last = self.layers.len() - 1;
        if target.len() != outputs[last].len() {
            return Err(NetworkError::TargetLengthMismatch {
                expected: outputs[last].len(),
                got: target.len(),
            });
        }

        let mut deltas = vec![Vec::new(); last];

        // Output layer: seeded by the cost function, fed by the activations
        // of the layer just before it.
        deltas[last - 1] = outputs[last]
            .iter()
            .zip(target)
            .map(|(&output, &target)| self.cost.delta(&outputs[last - 1], output, target))
            .collect();

        // Hidden layers, walking backward.
        for i in (1..last).rev() {
            let next_layer = &self.layers[i + 1];
            let next_deltas = &deltas[i];
            let layer_deltas: Vec<f64> = (0..self.layers[i].size())
                .map(|j| {
                    next_layer
                        .neurons()
                        .iter()
                        .zip(next_deltas)
                        .map(|(neuron, delta)| neuron.weight(j) * delta)
                        .sum()
                })
                .collect();
            deltas[i - 1] = layer_deltas;
        }

        Ok(deltas)
    }

    /// Moves every weight and bias of layers 1..N against the computed error
    /// signals. This is the sole place where neuron state is mutated.
    fn adjust(&mut self, outputs: &[Vec<f64>], deltas: &[Vec<f64>], learning_rate: f64) {
        for i in 1..self.layers.len() {
            let inputs = &outputs[i - 1];
            for (neuron, &delta) in self.layers[i].neurons_mut().iter_mut().zip(&deltas[i - 1]) {
                for (k, &activation) in inputs.iter().enumerate() {
                    let updated = neuron.weight(k) - learning_rate * delta * activation;
                    neuron.set_weight(k, updated);
                }
                neuron.set_bias(neuron.bias() - learning_rate * delta);
            }
        }
    }

    /// Runs one feedforward + backpropagation + adjustment cycle for a
    /// single example and returns its mean output-layer cost.
    ///
    /// Degenerate (`NaN`) cost terms count as zero so they cannot poison
    /// the epoch accumulator.
    pub fn learn(
        &mut self,
        input: &[f64],
        target: &[f64],
        learning_rate: f64,
    ) -> Result<f64, NetworkError> {
        let outputs = self.feed_forward(input)?;
        let deltas = self.calculate_deltas(&outputs, target)?;
        self.adjust(&outputs, &deltas, learning_rate);

        let final_output = &outputs[outputs.len() - 1];
        let total: f64 = final_output
            .iter()
            .zip(target)
            .map(|(&output, &target)| {
                let cost = self.cost.cost(output, target);
                if cost.is_nan() { 0.0 } else { cost }
            })
            .sum();
        Ok(total / final_output.len() as f64)
    }

    /// Performs one update cycle per example, in original order, and
    /// returns the mean example cost of the pass.
    ///
    /// Updates are sequential: each example's adjustment is visible to the
    /// next example in the same pass.
    pub fn run_epoch(
        &mut self,
        data: &[(Vec<f64>, Vec<f64>)],
        learning_rate: f64,
    ) -> Result<f64, NetworkError> {
        if data.is_empty() {
            return Err(NetworkError::EmptyTrainingSet);
        }

        let mut total = 0.0;
        for (input, target) in data {
            total += self.learn(input, target, learning_rate)?;
        }
        Ok(total / data.len() as f64)
    }

    /// Performs one update cycle per sampled example, drawing `batch_size`
    /// distinct examples from the supplied random source, and returns the
    /// mean cost of the sample. The sample carries no guarantee of covering
    /// the full dataset.
    pub fn run_epoch_sampled<R: Rng + ?Sized>(
        &mut self,
        data: &[(Vec<f64>, Vec<f64>)],
        learning_rate: f64,
        batch_size: usize,
        rng: &mut R,
    ) -> Result<f64, NetworkError> {
        if data.is_empty() {
            return Err(NetworkError::EmptyTrainingSet);
        }

        let amount = batch_size.clamp(1, data.len());
        let mut total = 0.0;
        for idx in rand::seq::index::sample(rng, data.len(), amount) {
            let (input, target) = &data[idx];
            total += self.learn(input, target, learning_rate)?;
        }
        Ok(total / amount as f64)
    }

    /// Full-batch training: every epoch iterates all examples once, in
    /// original order, with per-example updates.
    ///
    /// Stops early once the epoch's mean output-layer cost falls to or
    /// below `options.threshold`, otherwise runs for `options.epochs`
    /// passes. Not cancellable mid-call.
    pub fn train(
        &mut self,
        data: &[(Vec<f64>, Vec<f64>)],
        options: &TrainOptions,
    ) -> Result<TrainReport, NetworkError> {
        let mut final_cost = f64::INFINITY;
        for epoch in 1..=options.epochs {
            final_cost = self.run_epoch(data, options.learning_rate)?;
            if final_cost <= options.threshold {
                return Ok(TrainReport {
                    epochs_run: epoch,
                    final_cost,
                });
            }
        }
        Ok(TrainReport {
            epochs_run: options.epochs,
            final_cost,
        })
    }

    /// Stochastic mini-batch training: every epoch draws a random sample of
    /// `batch_size` examples and performs per-example updates on it.
    ///
    /// Runs for exactly `options.epochs` iterations; there is no
    /// convergence threshold.
    pub fn train_stochastic<R: Rng + ?Sized>(
        &mut self,
        data: &[(Vec<f64>, Vec<f64>)],
        options: &TrainOptions,
        rng: &mut R,
    ) -> Result<TrainReport, NetworkError> {
        if data.is_empty() {
            return Err(NetworkError::EmptyTrainingSet);
        }

        let batch_size = options.batch_size_for(data.len());
        let mut final_cost = f64::INFINITY;
        for _ in 0..options.epochs {
            final_cost = self.run_epoch_sampled(data, options.learning_rate, batch_size, rng)?;
        }
        Ok(TrainReport {
            epochs_run: options.epochs,
            final_cost,
        })
    }
}
