use log::debug;

use crate::operator::Operator;

use super::state::Odometer;

/// Number of sequences of `length` operators drawn from `radix` choices,
/// `None` if it does not fit in a `u64`
pub fn candidate_count(radix: usize, length: usize) -> Option<u64> {
    let length = u32::try_from(length).ok()?;
    u64::try_from(radix).ok()?.checked_pow(length)
}

/// Lazy enumeration of every operator sequence of a fixed length.
///
/// Sequences come out in lexicographic order over the pool's ordering (the
/// last key varies fastest). The iterator is finite and deterministic, and
/// [`reset`](Self::reset) or [`seek`](Self::seek) restart it anywhere.
#[derive(Debug, Clone)]
pub struct SequenceIterator<'a> {
    operators: &'a [Operator],
    odometer: Odometer,
}

impl<'a> SequenceIterator<'a> {
    pub fn new(operators: &'a [Operator], length: usize) -> Self {
        debug!(
            "Enumerating sequences of {} moves over {} operators",
            length,
            operators.len()
        );
        Self {
            operators,
            odometer: Odometer::new(operators.len(), length),
        }
    }

    pub fn length(&self) -> usize {
        self.odometer.positions().len()
    }

    pub fn reset(&mut self) {
        self.odometer.reset();
    }

    /// Position the iterator so the next sequence is the one with this ordinal
    pub fn seek(&mut self, index: u64) {
        self.odometer.seek(index);
    }

    /// Write the next sequence into `buffer` instead of allocating one.
    ///
    /// Returns `false` once the enumeration is exhausted.
    pub fn next_into(&mut self, buffer: &mut Vec<Operator>) -> bool {
        if self.odometer.is_exhausted() {
            return false;
        }

        buffer.clear();
        buffer.extend(
            self.odometer
                .positions()
                .iter()
                .filter_map(|&idx| self.operators.get(idx).copied()),
        );
        self.odometer.advance();
        true
    }
}

impl Iterator for SequenceIterator<'_> {
    type Item = Vec<Operator>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut sequence = Vec::with_capacity(self.length());
        if self.next_into(&mut sequence) {
            Some(sequence)
        } else {
            None
        }
    }
}

/// Enumerate every sequence of `length` operators drawn from `operators`
pub fn sequences(operators: &[Operator], length: usize) -> SequenceIterator<'_> {
    SequenceIterator::new(operators, length)
}
