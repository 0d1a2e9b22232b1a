pub mod vertex_solver;

pub use vertex_solver::VertexSolver;
