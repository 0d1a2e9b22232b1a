pub mod error;
pub mod problem;
pub mod sampler;
pub mod solver;
pub mod solvers;
pub mod validate;

pub use error::SolverError;
pub use problem::{ProblemInstance, Product};
pub use sampler::{sample, FeasibleRegionSample, DEFAULT_GRID_SIZE};
pub use solver::{Solution, Solver};
pub use solvers::vertex_solver::solve;
