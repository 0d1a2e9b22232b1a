use thiserror::Error;

/// Result type for the production-mix core.
pub type Result<T> = std::result::Result<T, SolverError>;

/// Errors reported by the solver and the feasible-region sampler.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// A coefficient or capacity is negative or non-finite, or the instance
    /// leaves the objective unbounded.
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The sampler needs at least two grid points.
    #[error("Invalid grid size {grid_size}: at least 2 points are required")]
    InvalidGridSize { grid_size: usize },
}

impl SolverError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        SolverError::InvalidInput {
            reason: reason.into(),
        }
    }
}
