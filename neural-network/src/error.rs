//! Error taxonomy for the neural network library.
//!
//! Every failure aborts the current call and surfaces to the embedding
//! caller; there are no retries and no fallback network states.

use thiserror::Error;

/// Errors that can occur while building, running, or training a network
#[derive(Debug, Error)]
pub enum NetworkError {
    /// An input vector's length disagrees with the configured weight width.
    /// This signals a caller configuration bug, not a transient condition.
    #[error("input length does not match weights length: expected {expected}, got {got}")]
    ArityMismatch { expected: usize, got: usize },

    /// A target vector's length disagrees with the output layer's neuron count
    #[error("target length does not match output layer size: expected {expected}, got {got}")]
    TargetLengthMismatch { expected: usize, got: usize },

    /// A recorded outputs sequence does not cover one vector per layer
    #[error("outputs length does not match layer count: expected {expected}, got {got}")]
    OutputsLengthMismatch { expected: usize, got: usize },

    /// A network needs an input layer and at least one trainable layer
    #[error("network requires at least two layers, got {0}")]
    TooFewLayers(usize),

    /// Every layer must contain at least one neuron
    #[error("layer {index} has size zero")]
    EmptyLayer { index: usize },

    /// Neurons handed to a layer must all share the same input arity
    #[error("neurons in a layer must share the same input arity")]
    MixedArity,

    /// Training was invoked with no examples
    #[error("training data is empty")]
    EmptyTrainingSet,

    /// Wrapper for standard I/O errors raised while loading configuration
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON errors raised while loading configuration
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
