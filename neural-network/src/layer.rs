//! Layers: ordered collections of neurons sharing one input arity.

use crate::activations::ActivationType;
use crate::error::NetworkError;
use crate::neuron::Neuron;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The kind of layer to build, which fixes the neuron variant it holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerKind {
    /// Sigmoid neurons, outputs reported as-is
    Dense,
    /// Exponential-score neurons whose outputs are normalized so the layer's
    /// output vector sums to 1
    Softmax,
}

impl LayerKind {
    fn activation(self) -> ActivationType {
        match self {
            LayerKind::Dense => ActivationType::Sigmoid,
            LayerKind::Softmax => ActivationType::Exponential,
        }
    }
}

/// A single layer of neurons, transforming one vector into another.
///
/// Neuron order is significant: it is the output-index order. All neurons in
/// a layer share the same input arity.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    neurons: Vec<Neuron>,
    kind: LayerKind,
}

impl Layer {
    /// Creates a layer of `size` neurons, each accepting `input_size` inputs.
    ///
    /// The first neuron is zero-initialized as a deterministic baseline
    /// unit; the rest draw weights and bias uniformly from [-1, 1] using the
    /// supplied random source.
    pub fn new<R: Rng + ?Sized>(
        size: usize,
        input_size: usize,
        kind: LayerKind,
        rng: &mut R,
    ) -> Self {
        let activation = kind.activation();
        let neurons = (0..size)
            .map(|i| {
                if i == 0 {
                    Neuron::zeroed(input_size, activation)
                } else {
                    Neuron::random(input_size, activation, rng)
                }
            })
            .collect();
        Self { neurons, kind }
    }

    /// Applies every neuron to the same input vector, producing one output
    /// scalar per neuron in neuron order.
    ///
    /// Softmax layers divide each raw exponential score by the sum of all
    /// scores in the layer, so the returned vector sums to 1 up to
    /// floating-point rounding. That normalization is a layer-wide invariant
    /// no individual neuron can express.
    pub fn process(&self, input: &[f64]) -> Result<Vec<f64>, NetworkError> {
        let raw: Vec<f64> = self
            .neurons
            .iter()
            .map(|neuron| neuron.process(input))
            .collect::<Result<_, _>>()?;

        match self.kind {
            LayerKind::Dense => Ok(raw),
            LayerKind::Softmax => {
                let sum: f64 = raw.iter().sum();
                Ok(raw.into_iter().map(|score| score / sum).collect())
            }
        }
    }

    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    /// The number of neurons in the layer
    pub fn size(&self) -> usize {
        self.neurons.len()
    }

    /// The input arity shared by every neuron in the layer
    pub fn input_size(&self) -> usize {
        self.neurons.first().map_or(0, Neuron::input_size)
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn neurons_mut(&mut self) -> &mut [Neuron] {
        &mut self.neurons
    }

    pub fn neuron(&self, i: usize) -> &Neuron {
        &self.neurons[i]
    }

    /// Replaces the layer's neurons wholesale, e.g. to swap in a
    /// differently-initialized set.
    ///
    /// # Errors
    ///
    /// Returns [`NetworkError::MixedArity`] unless every new neuron shares
    /// the same input arity, and [`NetworkError::EmptyLayer`] for an empty
    /// replacement list.
    pub fn set_neurons(&mut self, neurons: Vec<Neuron>) -> Result<(), NetworkError> {
        let Some(first) = neurons.first() else {
            return Err(NetworkError::EmptyLayer { index: 0 });
        };
        if neurons.iter().any(|n| n.input_size() != first.input_size()) {
            return Err(NetworkError::MixedArity);
        }
        self.neurons = neurons;
        Ok(())
    }
}
