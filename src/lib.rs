//! Calcsolve - A brute-force solver for calculator number puzzles
//!
//! Given a starting number, a target, a move budget and the keys of the
//! calculator, this library tries every sequence of key presses and reports
//! the ones that land exactly on the target.

pub mod iterator;
pub mod operator;
pub mod pipeline;
pub mod solver;
pub mod utils;

// Re-export the main public API
pub use iterator::{SequenceIterator, sequences};
pub use operator::{Operator, OperatorError, Outcome};
pub use pipeline::{Pipeline, Trace};
pub use solver::{BruteForceSolver, SearchReport, Solution, SolverConfig, SolverError};
pub use utils::UtilsError;

/// Find every sequence of `moves` keys from `operators` that turns `start`
/// into `target`
///
/// This is a convenience function that creates a solver with the default
/// configuration and runs the sequential search.
///
/// # Arguments
///
/// * `start` - The number initially on the display
/// * `target` - The number to reach
/// * `moves` - Exact number of key presses
/// * `operators` - The available keys, all distinct
///
/// # Returns
///
/// * `Ok(Vec<Solution>)` - Every winning sequence, in enumeration order
/// * `Err(SolverError)` - If the input is invalid or an operator fails outright
///
/// # Errors
///
/// This function will return an error if:
/// * The operator list is empty or contains duplicates
/// * The search space does not fit in a `u64`
/// * An operator cannot be applied at all to some intermediate value
///
/// # Examples
///
/// ```
/// use calcsolve::{Operator, find_sequences};
///
/// let keys = [Operator::Add(4), Operator::Multiply(4), Operator::Divide(4)];
/// match find_sequences(3, 4, 3, &keys) {
///     Ok(solutions) => {
///         for solution in solutions {
///             println!("Found: {}", solution);
///         }
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_sequences(
    start: i64,
    target: i64,
    moves: usize,
    operators: &[Operator],
) -> Result<Vec<Solution>, SolverError> {
    let solver = BruteForceSolver::new(start, target, moves, operators.to_vec())?;
    solver.run()
}
