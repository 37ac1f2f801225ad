use std::ops::AddAssign;

/// Per-run line accounting. Every line read is exactly one of accepted, invalid or duplicate.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct BatchStats {
    pub lines: u64,
    pub accepted: u64,
    pub invalid: u64,
    pub duplicates: u64
}

impl AddAssign for BatchStats {
    fn add_assign(&mut self, rhs: Self) {
        self.lines += rhs.lines;
        self.accepted += rhs.accepted;
        self.invalid += rhs.invalid;
        self.duplicates += rhs.duplicates;
    }
}
