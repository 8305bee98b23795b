use serde::{Deserialize, Serialize};

/// The activation rule a neuron applies to its weighted sum.
///
/// This is a closed set: every neuron variant the library supports is one
/// of these rules applied to `sum_k(weight[k] * input[k]) + bias`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationType {
    /// Binary threshold: 1 if the weighted sum is greater than 0, else 0.
    /// Non-differentiable; useful for illustrating perceptron behavior.
    Step,
    /// Logistic function `1 / (1 + exp(-z))`, a smooth value in (0, 1)
    Sigmoid,
    /// Unnormalized exponential score `exp(z)`. Only meaningful inside a
    /// softmax layer, which normalizes the scores across the whole layer.
    Exponential,
}

impl ActivationType {
    /// Applies the activation rule to a weighted sum.
    pub fn apply(self, z: f64) -> f64 {
        match self {
            ActivationType::Step => {
                if z > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            ActivationType::Sigmoid => sigmoid(z),
            ActivationType::Exponential => z.exp(),
        }
    }
}

/// Logistic sigmoid `1 / (1 + exp(-z))`.
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Derivative of the sigmoid, expressed in terms of the raw input.
pub fn sigmoid_prime(z: f64) -> f64 {
    let s = sigmoid(z);
    s * (1.0 - s)
}
