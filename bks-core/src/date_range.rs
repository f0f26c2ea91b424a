use chrono::{Days, NaiveDate};

/// Iterator over every calendar day from `start` through `end` (inclusive).
///
/// Yields nothing when `start > end`.
#[derive(Clone, Eq, PartialEq, Copy, Debug)]
pub struct DayRange {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl DayRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DayRange {
            next: (start <= end).then_some(start),
            end,
        }
    }

    /// Number of days the range still yields.
    pub fn remaining(&self) -> usize {
        match self.next {
            Some(next) => ((self.end - next).num_days() + 1) as usize,
            None => 0,
        }
    }
}

impl Iterator for DayRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current < self.end {
            current.checked_add_days(Days::new(1))
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for DayRange {}
