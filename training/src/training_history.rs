/// Training history containing the mean cost recorded for each epoch
#[derive(Debug, Clone)]
pub struct TrainingHistory {
    /// Mean output-layer cost for each epoch, in epoch order
    pub costs: Vec<f64>,
    /// Lowest cost seen during training
    pub best_cost: f64,
    /// Epoch where the lowest cost was reached (1-based)
    pub best_epoch: usize,
}

impl TrainingHistory {
    pub fn new() -> Self {
        Self {
            costs: Vec::new(),
            best_cost: f64::INFINITY,
            best_epoch: 0,
        }
    }

    pub fn record_epoch(&mut self, epoch: usize, cost: f64) {
        self.costs.push(cost);

        if cost < self.best_cost {
            self.best_cost = cost;
            self.best_epoch = epoch;
        }
    }

    /// The number of epochs recorded so far
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Prints a summary of the training history
    pub fn print_summary(&self) {
        println!("\nTraining History Summary:");
        println!("------------------------");
        println!(
            "Best cost: {:.6} (epoch {})",
            self.best_cost, self.best_epoch
        );
        println!("Final cost: {:.6}", self.costs.last().unwrap_or(&0.0));

        // Print cost progression at 25% intervals
        let len = self.costs.len();
        if len >= 4 {
            println!("\nCost progression:");
            for i in 0..=3 {
                let idx = i * (len - 1) / 3;
                println!("Epoch {}: {:.6}", idx + 1, self.costs[idx]);
            }
        }
    }
}
