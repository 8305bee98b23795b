//! Training supervision for the neural network engine.
//!
//! This module wires a [`Network`] to a [`TrainingConfig`]: it owns the
//! epoch loop for both strategies, draws the random sources (seedable for
//! reproducible runs), renders progress bars, and records a
//! [`TrainingHistory`] of per-epoch costs.

use crate::training_config::{TrainingConfig, TrainingStrategy};
use crate::training_history::TrainingHistory;
use indicatif::{ProgressBar, ProgressStyle};
use neural_network::{Network, NetworkConfig, NetworkError, TrainReport};
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

/// Errors raised while supervising a training run
#[derive(Debug, Error)]
pub enum TrainingError {
    /// Propagated failure from the underlying network
    #[error("network error: {0}")]
    Network(#[from] NetworkError),
    /// The caller handed over a dataset with no examples
    #[error("no training examples were provided")]
    EmptyDataset,
}

/// Trainer manages the neural network training process.
///
/// The trainer handles network initialization from an architecture config,
/// strategy selection (full-batch or stochastic), progress visualization,
/// and history recording.
pub struct Trainer {
    network: Network,
    config: TrainingConfig,
    history: TrainingHistory,
    rng: StdRng,
}

impl Trainer {
    /// Creates a trainer with a freshly initialized network.
    ///
    /// `config.seed` drives both weight initialization and stochastic batch
    /// sampling; leaving it unset draws entropy from the operating system.
    pub fn new(
        architecture: &NetworkConfig,
        config: TrainingConfig,
    ) -> Result<Self, TrainingError> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let network = Network::from_config(architecture, &mut rng)?;

        Ok(Self {
            network,
            config,
            history: TrainingHistory::new(),
            rng,
        })
    }

    /// Wraps an already-built network, e.g. one constructed with custom
    /// layer sizes or a hand-seeded random source.
    pub fn with_network(network: Network, config: TrainingConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            network,
            config,
            history: TrainingHistory::new(),
            rng,
        }
    }

    /// Returns the training history containing per-epoch costs
    pub fn history(&self) -> &TrainingHistory {
        &self.history
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Runs inference with the current weights.
    pub fn predict(&self, input: &[f64]) -> Result<Vec<f64>, TrainingError> {
        Ok(self.network.process(input)?)
    }

    /// Trains the network on `(input, target)` pairs.
    ///
    /// Full-batch runs visit every example each epoch and stop early at the
    /// configured cost threshold; stochastic runs sample a batch per epoch
    /// and always execute the full epoch budget. Either way the run is
    /// synchronous and cannot be interrupted mid-call.
    ///
    /// # Returns
    /// * `Result<TrainReport, TrainingError>` - epochs executed and the
    ///   final mean epoch cost
    pub fn train(
        &mut self,
        data: &[(Vec<f64>, Vec<f64>)],
    ) -> Result<TrainReport, TrainingError> {
        if data.is_empty() {
            return Err(TrainingError::EmptyDataset);
        }

        let progress = ProgressBar::new(self.config.epochs as u64);
        progress.set_style(create_progress_style(
            "{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} Epoch {msg}",
        ));

        let options = self.config.train_options();
        let batch_size = options.batch_size_for(data.len());
        let mut final_cost = f64::INFINITY;
        let mut epochs_run = 0;

        for epoch in 1..=self.config.epochs {
            final_cost = match self.config.strategy {
                TrainingStrategy::FullBatch => {
                    self.network.run_epoch(data, options.learning_rate)?
                }
                TrainingStrategy::Stochastic => self.network.run_epoch_sampled(
                    data,
                    options.learning_rate,
                    batch_size,
                    &mut self.rng,
                )?,
            };

            epochs_run = epoch;
            self.history.record_epoch(epoch, final_cost);
            progress.set_message(format!("- Cost: {:.6}", final_cost));
            progress.inc(1);

            if self.config.strategy == TrainingStrategy::FullBatch
                && final_cost <= options.threshold
            {
                progress.finish_with_message(format!(
                    "Converged at epoch {} with cost {:.6}",
                    epoch, final_cost
                ));
                return Ok(TrainReport {
                    epochs_run,
                    final_cost,
                });
            }
        }

        progress.finish_with_message("Training completed!");

        Ok(TrainReport {
            epochs_run,
            final_cost,
        })
    }
}

/// Creates a progress bar style with the specified template.
fn create_progress_style(template: &str) -> ProgressStyle {
    ProgressStyle::with_template(template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("##-")
}
