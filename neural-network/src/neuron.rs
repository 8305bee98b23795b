//! A single neuron: a weight vector, a bias, and an activation rule.

use crate::activations::ActivationType;
use crate::error::NetworkError;
use rand::Rng;

/// A unit computing a weighted sum of its inputs plus a bias, then an
/// activation function.
///
/// The weight width is fixed at construction and must equal the length of
/// any input vector passed to [`Neuron::process`]; a mismatch is a usage
/// error and fails with [`NetworkError::ArityMismatch`].
///
/// # Examples
///
/// ```
/// use neural_network::{ActivationType, Neuron};
///
/// let neuron = Neuron::new(vec![0.5, -0.5], 0.0, ActivationType::Sigmoid);
/// let output = neuron.process(&[1.0, 1.0]).unwrap();
/// assert!((output - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Neuron {
    weights: Vec<f64>,
    bias: f64,
    activation: ActivationType,
}

impl Neuron {
    /// Creates a neuron from explicit weights and bias.
    pub fn new(weights: Vec<f64>, bias: f64, activation: ActivationType) -> Self {
        Self {
            weights,
            bias,
            activation,
        }
    }

    /// Creates a neuron with all-zero weights and bias, the deterministic
    /// baseline unit each layer starts with.
    pub fn zeroed(input_size: usize, activation: ActivationType) -> Self {
        Self::new(vec![0.0; input_size], 0.0, activation)
    }

    /// Creates a neuron with weights and bias drawn uniformly from [-1, 1].
    pub fn random<R: Rng + ?Sized>(
        input_size: usize,
        activation: ActivationType,
        rng: &mut R,
    ) -> Self {
        let weights = (0..input_size)
            .map(|_| rng.random_range(-1.0..=1.0))
            .collect();
        Self::new(weights, rng.random_range(-1.0..=1.0), activation)
    }

    /// Given an input vector, returns the neuron's scalar output.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::ArityMismatch`] if the input length differs
    /// from the weight width.
    pub fn process(&self, input: &[f64]) -> Result<f64, NetworkError> {
        if input.len() != self.weights.len() {
            return Err(NetworkError::ArityMismatch {
                expected: self.weights.len(),
                got: input.len(),
            });
        }

        let weighted_sum: f64 = self
            .weights
            .iter()
            .zip(input)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.bias;

        Ok(self.activation.apply(weighted_sum))
    }

    /// The number of inputs this neuron accepts.
    pub fn input_size(&self) -> usize {
        self.weights.len()
    }

    pub fn activation(&self) -> ActivationType {
        self.activation
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Replaces the whole weight vector. The new vector keeps the neuron's
    /// arity contract with its layer, so the length must not change.
    pub fn set_weights(&mut self, weights: Vec<f64>) -> Result<(), NetworkError> {
        if weights.len() != self.weights.len() {
            return Err(NetworkError::ArityMismatch {
                expected: self.weights.len(),
                got: weights.len(),
            });
        }
        self.weights = weights;
        Ok(())
    }

    /// The weight applied to input index `i`.
    pub fn weight(&self, i: usize) -> f64 {
        self.weights[i]
    }

    pub fn set_weight(&mut self, i: usize, value: f64) {
        self.weights[i] = value;
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn set_bias(&mut self, value: f64) {
        self.bias = value;
    }
}
