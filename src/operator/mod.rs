//! Calculator operators: the keys of the puzzle and the validity envelope
//! every key press goes through.

mod ast;
pub mod constants;
mod display;
mod errors;
mod eval;
mod parse;

pub use ast::Operator;
pub use errors::OperatorError;
pub use eval::Outcome;

#[cfg(test)]
mod tests;
