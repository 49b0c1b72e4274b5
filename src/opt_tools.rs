/// Records the swarm's global fitness after initialisation and after every
/// iteration of a run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CostHistory {
    cost_history: Vec<f64>,
}

impl CostHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cost_history: Vec::with_capacity(capacity),
        }
    }

    pub fn observe_cost(&mut self, cost: f64) {
        self.cost_history.push(cost);
    }

    pub fn cost_history(&self) -> &[f64] {
        &self.cost_history
    }

    pub fn last(&self) -> Option<f64> {
        self.cost_history.last().copied()
    }

    pub fn len(&self) -> usize {
        self.cost_history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cost_history.is_empty()
    }

    /// True if no recorded cost is worse than the one before it.
    pub fn is_non_increasing(&self) -> bool {
        self.cost_history.windows(2).all(|w| w[1] <= w[0])
    }
}
