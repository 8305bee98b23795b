use neural_network::TrainOptions;

/// How the trainer walks the dataset each epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainingStrategy {
    /// Every epoch visits all examples once, in original order, and the run
    /// stops early once the mean epoch cost reaches the threshold
    FullBatch,
    /// Every epoch draws a random sample of `batch_size` examples and runs
    /// for exactly `epochs` iterations
    Stochastic,
}

/// Configuration parameters for neural network training.
#[derive(Debug, Clone)]
pub struct TrainingConfig {
    /// Dataset walk per epoch
    pub strategy: TrainingStrategy,
    /// Upper bound on training epochs
    pub epochs: usize,
    /// Learning rate for gradient descent
    pub learning_rate: f64,
    /// Early-stop threshold on the mean epoch cost (full-batch only)
    pub threshold: f64,
    /// Examples per stochastic epoch; `None` means one hundredth of the
    /// dataset, at least one
    pub batch_size: Option<usize>,
    /// Seed for weight initialization and batch sampling. `None` draws from
    /// the operating system, making the run non-reproducible.
    pub seed: Option<u64>,
}

impl TrainingConfig {
    pub(crate) fn train_options(&self) -> TrainOptions {
        TrainOptions {
            epochs: self.epochs,
            learning_rate: self.learning_rate,
            threshold: self.threshold,
            batch_size: self.batch_size,
        }
    }

    /// Stochastic defaults: fewer epochs, sampled batches.
    pub fn stochastic() -> Self {
        let options = TrainOptions::stochastic();
        Self {
            strategy: TrainingStrategy::Stochastic,
            epochs: options.epochs,
            ..Self::default()
        }
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        let options = TrainOptions::default();
        Self {
            strategy: TrainingStrategy::FullBatch,
            epochs: options.epochs,
            learning_rate: options.learning_rate,
            threshold: options.threshold,
            batch_size: options.batch_size,
            seed: None,
        }
    }
}
