use super::{SortMachine, Step};
use crate::OperationCounters;

/// Every scanned candidate is a checkpoint. The swap that closes each outer
/// iteration always happens, even in place, and is not a checkpoint.
pub(crate) struct SelectionSort {
    i: usize,
    j: usize,
    min: usize,
}

impl SelectionSort {
    pub(crate) fn new() -> Self {
        Self { i: 0, j: 1, min: 0 }
    }
}

impl<T: PartialOrd> SortMachine<T> for SelectionSort {
    fn step(&mut self, data: &mut [T], counters: &mut OperationCounters) -> Step {
        let len = data.len();
        while self.i < len {
            if self.j < len {
                counters.record_comparison();
                if data[self.j] < data[self.min] {
                    self.min = self.j;
                }
                self.j += 1;
                return Step::Checkpoint;
            }
            data.swap(self.i, self.min);
            counters.record_swap();
            self.i += 1;
            self.j = self.i + 1;
            self.min = self.i;
        }
        Step::Done
    }
}

pub fn selection_sort<T: PartialOrd>(data: &mut [T], counters: &mut OperationCounters) {
    SelectionSort::new().run_to_end(data, counters);
}
