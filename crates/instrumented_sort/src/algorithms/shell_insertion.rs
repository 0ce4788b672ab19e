use super::{SortMachine, Step};
use crate::{GapSequence, OperationCounters};

/// Gapped insertion sort.
///
/// Unlike [`super::insertion_sort`], every guard evaluation counts as a
/// comparison, including the one that stops the shifting. Swaps count shifts
/// plus one placement per key.
pub(crate) struct ShellInsertionSort<T> {
    gaps: GapSequence,
    gap_idx: usize,
    gap: usize,
    next: usize,
    hole: usize,
    key: Option<T>,
}

impl<T> ShellInsertionSort<T> {
    pub(crate) fn new(gaps: GapSequence) -> Self {
        Self {
            gaps,
            gap_idx: 0,
            gap: 0,
            next: 0,
            hole: 0,
            key: None,
        }
    }

    /// Moves to the next index that still needs inserting, crossing into
    /// later gaps as passes run out. Returns `false` when every gap is done.
    fn advance(&mut self, len: usize) -> bool {
        loop {
            let Some(gap) = self.gaps.get(self.gap_idx) else {
                return false;
            };
            if self.gap != gap {
                self.gap = gap;
                self.next = gap;
            }
            if self.next < len {
                return true;
            }
            self.gap_idx += 1;
            self.gap = 0;
        }
    }
}

impl<T: PartialOrd + Clone> SortMachine<T> for ShellInsertionSort<T> {
    fn step(&mut self, data: &mut [T], counters: &mut OperationCounters) -> Step {
        if self.key.is_none() {
            if !self.advance(data.len()) {
                return Step::Done;
            }
            self.key = Some(data[self.next].clone());
            self.hole = self.next;
            self.next += 1;
        }

        let gap = self.gap;
        let hole = self.hole;
        if hole >= gap {
            counters.record_comparison();
            let shifts = match &self.key {
                Some(key) => *key < data[hole - gap],
                None => false,
            };
            if shifts {
                data[hole] = data[hole - gap].clone();
                counters.record_swap();
                self.hole -= gap;
                return Step::Checkpoint;
            }
        }

        if let Some(key) = self.key.take() {
            data[hole] = key;
            counters.record_swap();
        }
        Step::Checkpoint
    }
}

pub fn shell_insertion_sort<T: PartialOrd + Clone>(
    data: &mut [T],
    counters: &mut OperationCounters,
    gaps: &GapSequence,
) {
    ShellInsertionSort::new(gaps.clone()).run_to_end(data, counters);
}
