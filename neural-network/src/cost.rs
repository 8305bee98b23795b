use crate::activations::sigmoid_prime;
use serde::{Deserialize, Serialize};

/// Type of cost function
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CostType {
    MeanSquaredError,
    CrossEntropy,
    LogLikelihood,
}

impl CostType {
    /// Creates a new cost function instance based on the type
    pub fn create_cost(&self) -> Box<dyn CostFunction> {
        match self {
            CostType::MeanSquaredError => Box::new(MeanSquaredError),
            CostType::CrossEntropy => Box::new(CrossEntropy),
            CostType::LogLikelihood => Box::new(LogLikelihood),
        }
    }
}

/// Trait defining the interface for cost functions.
///
/// A cost function is stateless: it scores a single output/target pair and
/// produces the error-signal contribution that seeds backpropagation at the
/// output layer. Cost values are meant to be non-negative; formulas that
/// degenerate to `NaN` at the edges (e.g. cross-entropy at an output of
/// exactly 0 or 1) are absorbed as zero by the epoch accumulator.
pub trait CostFunction: Send + Sync {
    /// Scores one output against its desired value
    fn cost(&self, output: f64, target: f64) -> f64;

    /// The error-signal contribution for one output neuron, given the
    /// activations feeding that neuron
    fn delta(&self, inputs: &[f64], output: f64, target: f64) -> f64;

    /// Returns the type of cost function
    fn cost_type(&self) -> CostType;
}

/// Quadratic cost `0.5 * (output - target)^2` for a single pair.
///
/// Its delta scales the raw error by the summed sigmoid slope of the
/// incoming activations.
#[derive(Debug, Clone, Copy)]
pub struct MeanSquaredError;

impl CostFunction for MeanSquaredError {
    fn cost(&self, output: f64, target: f64) -> f64 {
        0.5 * (output - target).powi(2)
    }

    fn delta(&self, inputs: &[f64], output: f64, target: f64) -> f64 {
        let error = output - target;
        inputs.iter().map(|&x| sigmoid_prime(x) * error).sum()
    }

    fn cost_type(&self) -> CostType {
        CostType::MeanSquaredError
    }
}

/// Cross-entropy cost `-(t*ln(o) + (1-t)*ln(1-o))` for a single pair.
///
/// `NaN` at outputs of exactly 0 or 1; its delta is the plain error
/// `output - target`, the classic seed for sigmoid output layers.
#[derive(Debug, Clone, Copy)]
pub struct CrossEntropy;

impl CostFunction for CrossEntropy {
    fn cost(&self, output: f64, target: f64) -> f64 {
        -(target * output.ln() + (1.0 - target) * (1.0 - output).ln())
    }

    fn delta(&self, _inputs: &[f64], output: f64, target: f64) -> f64 {
        output - target
    }

    fn cost_type(&self) -> CostType {
        CostType::CrossEntropy
    }
}

/// Log-likelihood cost `-ln(1 - |output - target|)`, the scoring rule
/// paired with softmax output layers.
#[derive(Debug, Clone, Copy)]
pub struct LogLikelihood;

impl CostFunction for LogLikelihood {
    fn cost(&self, output: f64, target: f64) -> f64 {
        -(1.0 - (output - target).abs()).ln()
    }

    fn delta(&self, _inputs: &[f64], output: f64, target: f64) -> f64 {
        output - target
    }

    fn cost_type(&self) -> CostType {
        CostType::LogLikelihood
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const ALL: [CostType; 3] = [
        CostType::MeanSquaredError,
        CostType::CrossEntropy,
        CostType::LogLikelihood,
    ];

    #[test]
    fn mean_squared_error_known_value() {
        let cost = MeanSquaredError;
        assert_relative_eq!(cost.cost(0.8, 1.0), 0.5 * 0.04, epsilon = 1e-12);
        assert_relative_eq!(cost.cost(1.0, 1.0), 0.0);
    }

    #[test]
    fn cross_entropy_known_value() {
        let cost = CrossEntropy;
        assert_relative_eq!(cost.cost(0.5, 1.0), -(0.5f64.ln()), epsilon = 1e-12);
        // Perfect confidence on the wrong class degenerates to NaN, which
        // the training loop treats as zero contribution.
        assert!(cost.cost(0.0, 1.0).is_nan() || cost.cost(0.0, 1.0).is_infinite());
    }

    #[test]
    fn log_likelihood_known_value() {
        let cost = LogLikelihood;
        assert_relative_eq!(cost.cost(0.75, 1.0), -(0.75f64.ln()), epsilon = 1e-12);
        assert_relative_eq!(cost.cost(1.0, 1.0), 0.0);
    }

    #[test]
    fn costs_are_non_negative_over_the_unit_interval() {
        let outputs = [0.05, 0.25, 0.5, 0.75, 0.95];
        let targets = [0.0, 1.0];

        for cost_type in ALL {
            let cost = cost_type.create_cost();
            for &o in &outputs {
                for &t in &targets {
                    let c = cost.cost(o, t);
                    let c = if c.is_nan() { 0.0 } else { c };
                    assert!(c >= 0.0, "{cost_type:?} cost({o}, {t}) = {c}");
                }
            }
        }
    }

    #[test]
    fn delta_sized_correction_moves_output_toward_target() {
        // Small incoming activations keep the quadratic cost's slope factor
        // below 1, so a full delta step may not overshoot.
        let inputs = [0.2, -0.3];
        let pairs = [(0.9, 0.0), (0.2, 1.0), (0.6, 1.0), (0.4, 0.0)];

        for cost_type in ALL {
            let cost = cost_type.create_cost();
            for &(output, target) in &pairs {
                let delta = cost.delta(&inputs, output, target);
                let corrected = output - delta;
                assert!(
                    (corrected - target).abs() < (output - target).abs(),
                    "{cost_type:?} delta {delta} did not reduce the error for ({output}, {target})"
                );
            }
        }
    }

    #[test]
    fn delta_carries_the_sign_of_the_error() {
        for cost_type in ALL {
            let cost = cost_type.create_cost();
            assert!(cost.delta(&[0.5], 0.9, 0.0) > 0.0);
            assert!(cost.delta(&[0.5], 0.1, 1.0) < 0.0);
        }
    }

    #[test]
    fn create_cost_round_trips_the_type() {
        for cost_type in ALL {
            assert_eq!(cost_type.create_cost().cost_type(), cost_type);
        }
    }
}
