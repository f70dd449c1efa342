pub mod constants;
mod core;
mod errors;
mod solution;

pub use self::core::{BruteForceSolver, SolverConfig};
pub use errors::SolverError;
pub use solution::{SearchReport, Solution};
