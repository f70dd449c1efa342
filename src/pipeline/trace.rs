use std::fmt;

use crate::operator::{Operator, Outcome};

/// The step at which a run was discarded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Abort {
    /// Zero-based position of the offending operator in the sequence.
    pub step: usize,
    pub operator: Operator,
    pub outcome: Outcome,
}

/// Values shown on the display during a run, starting value first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    pub values: Vec<i64>,
    pub abort: Option<Abort>,
}

impl Trace {
    pub fn completed(&self) -> bool {
        self.abort.is_none()
    }

    /// Last value of a completed run
    pub fn final_value(&self) -> Option<i64> {
        if self.completed() {
            self.values.last().copied()
        } else {
            None
        }
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut values = self.values.iter();
        if let Some(first) = values.next() {
            write!(f, "{}", first)?;
        }
        for value in values {
            write!(f, " -> {}", value)?;
        }

        if let Some(abort) = &self.abort {
            let reason = match abort.outcome {
                Outcome::NoOperation => "no-op",
                Outcome::OutOfBounds => "out of bounds",
                Outcome::Changed(_) => "changed",
            };
            write!(
                f,
                " (aborted at step {}: {} is {})",
                abort.step + 1,
                abort.operator,
                reason
            )?;
        }
        Ok(())
    }
}
