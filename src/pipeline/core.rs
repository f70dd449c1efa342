use log::{debug, trace};

use crate::operator::{Operator, OperatorError, Outcome};
use crate::pipeline::trace::{Abort, Trace};

/// Applies operator sequences to a fixed starting value and checks them
/// against a fixed target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pipeline {
    start: i64,
    target: i64,
}

impl Pipeline {
    pub fn new(start: i64, target: i64) -> Self {
        Self { start, target }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    /// Final value of a run, or `None` when a step was a no-op or left the display
    fn fold(&self, sequence: &[Operator]) -> Result<Option<i64>, OperatorError> {
        let mut current = self.start;
        for (step, op) in sequence.iter().enumerate() {
            match op.apply(current)? {
                Outcome::Changed(value) => current = value,
                outcome => {
                    trace!("Run aborted at step {} ({}): {:?}", step, op, outcome);
                    return Ok(None);
                }
            }
        }
        Ok(Some(current))
    }

    /// Value the calculator shows after the sequence.
    ///
    /// A run that hits a no-op or leaves the display is discarded as a whole
    /// and reports the starting value, not the value reached before the bad
    /// step.
    ///
    /// # Errors
    ///
    /// Propagates [`OperatorError::OperationFailed`] from any step.
    pub fn run(&self, sequence: &[Operator]) -> Result<i64, OperatorError> {
        Ok(self.fold(sequence)?.unwrap_or(self.start))
    }

    /// Whether every step changes the value within the display and the run
    /// ends on the target.
    ///
    /// Aborted runs never succeed, even when the target equals the start.
    ///
    /// # Errors
    ///
    /// Propagates [`OperatorError::OperationFailed`] from any step.
    pub fn evaluate(&self, sequence: &[Operator]) -> Result<bool, OperatorError> {
        let reached = self.fold(sequence)? == Some(self.target);
        if reached {
            debug!("Sequence {:?} reaches {}", sequence, self.target);
        }
        Ok(reached)
    }

    /// Step-by-step values of a run, for reporting.
    ///
    /// # Errors
    ///
    /// Propagates [`OperatorError::OperationFailed`] from any step.
    pub fn trace(&self, sequence: &[Operator]) -> Result<Trace, OperatorError> {
        let mut values = Vec::with_capacity(sequence.len() + 1);
        values.push(self.start);

        let mut current = self.start;
        for (step, op) in sequence.iter().enumerate() {
            match op.apply(current)? {
                Outcome::Changed(value) => {
                    current = value;
                    values.push(value);
                }
                outcome => {
                    return Ok(Trace {
                        values,
                        abort: Some(Abort {
                            step,
                            operator: *op,
                            outcome,
                        }),
                    });
                }
            }
        }

        Ok(Trace {
            values,
            abort: None,
        })
    }
}
