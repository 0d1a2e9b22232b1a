use crate::domain::error::Result;
use crate::domain::problem::{Point, ProblemInstance, RESOURCES};

/// Absolute tolerance used for feasibility and binding checks.
pub const FEASIBILITY_TOLERANCE: f64 = 1e-9;

/// Optimal production plan for a `ProblemInstance`.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// One quantity per product, in product order.
    pub quantities: Point,
    /// Profit achieved at `quantities`.
    pub objective_value: f64,
}

impl Solution {
    /// The degenerate plan: produce nothing.
    pub fn origin() -> Self {
        Solution {
            quantities: [0.0, 0.0],
            objective_value: 0.0,
        }
    }

    /// Indices of the constraints that hold with equality at this solution.
    pub fn binding_constraints(&self, instance: &ProblemInstance) -> Vec<usize> {
        (0..RESOURCES)
            .filter(|&i| {
                let slack = instance.capacities[i] - instance.constraint_lhs(i, &self.quantities);
                slack.abs() <= FEASIBILITY_TOLERANCE * instance.capacities[i].max(1.0)
            })
            .collect()
    }
}

/// Common interface for production-mix solvers
pub trait Solver: Send + Sync {
    /// Find the profit-maximizing production plan.
    ///
    /// # Arguments
    /// * `instance` - Profits, resource consumption and capacities
    ///
    /// # Returns
    /// The optimal solution, or `SolverError::InvalidInput` when the instance
    /// fails validation
    fn solve(&self, instance: &ProblemInstance) -> Result<Solution>;

    /// Get the solver name for logging/debugging
    fn name(&self) -> &str;
}
