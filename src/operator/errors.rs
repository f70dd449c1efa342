use thiserror::Error;

use crate::operator::ast::Operator;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OperatorError {
    #[error("Operator {operator} failed when applied to {input}")]
    OperationFailed { operator: Operator, input: i64 },
    #[error("Unrecognised operator: '{0}'")]
    Parse(String),
}
