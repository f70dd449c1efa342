use thiserror::Error;

use crate::operator::OperatorError;
use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Operator error: {0}")]
    OperatorError(#[from] OperatorError),
    #[error("Utils error: {0}")]
    UtilsError(#[from] UtilsError),
    #[error("Search space of {operators}^{moves} sequences is too large")]
    SearchSpaceTooLarge { operators: usize, moves: usize },
    #[error("Search cancelled")]
    Cancelled,
}
