use std::fmt;

use crate::operator::Operator;

/// A sequence of keys that takes the start to the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Position of the sequence in enumeration order.
    pub index: u64,
    pub operators: Vec<Operator>,
}

impl Solution {
    pub fn new(index: u64, operators: Vec<Operator>) -> Self {
        Self { index, operators }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[")?;
        for (idx, op) in self.operators.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", op)?;
        }
        write!(f, "]")
    }
}

/// Outcome of a search over some or all of the candidates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchReport {
    /// Candidates handed to the pipeline.
    pub visited: u64,
    pub solutions: Vec<Solution>,
}

impl SearchReport {
    /// Append a report covering the candidates right after this one's
    pub fn merge(&mut self, other: SearchReport) {
        self.visited += other.visited;
        self.solutions.extend(other.solutions);
    }
}
