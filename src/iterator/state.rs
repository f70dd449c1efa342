/// Counter over `length` positions, each in `0..radix`, last position fastest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Odometer {
    radix: usize,
    positions: Vec<usize>,
    exhausted: bool,
}

impl Odometer {
    pub fn new(radix: usize, length: usize) -> Self {
        Self {
            radix,
            positions: vec![0; length],
            exhausted: radix == 0 && length > 0,
        }
    }

    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Step to the next reading; wraps past the last one into exhaustion
    pub fn advance(&mut self) {
        if self.exhausted {
            return;
        }
        for pos in self.positions.iter_mut().rev() {
            *pos += 1;
            if *pos < self.radix {
                return;
            }
            *pos = 0;
        }
        self.mark_exhausted();
    }

    pub fn reset(&mut self) {
        self.positions.fill(0);
        self.exhausted = self.radix == 0 && !self.positions.is_empty();
    }

    /// Jump to the reading with the given ordinal; past the end means exhausted
    pub fn seek(&mut self, index: u64) {
        if self.radix == 0 {
            self.positions.fill(0);
            self.exhausted = !self.positions.is_empty() || index > 0;
            return;
        }

        let radix = self.radix as u64;
        let mut rest = index;
        for pos in self.positions.iter_mut().rev() {
            // Remainder is below radix, which came from a usize.
            *pos = (rest % radix) as usize;
            rest /= radix;
        }
        self.exhausted = rest > 0;
    }

    pub fn mark_exhausted(&mut self) {
        self.exhausted = true;
    }
}
