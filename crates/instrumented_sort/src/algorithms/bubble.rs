use super::{SortMachine, Step};
use crate::OperationCounters;

/// Passes shrink from `len` to 1; every adjacent comparison is a checkpoint,
/// whether or not it swapped.
pub(crate) struct BubbleSort {
    pass_len: usize,
    j: usize,
}

impl BubbleSort {
    pub(crate) fn new(len: usize) -> Self {
        Self { pass_len: len, j: 0 }
    }
}

impl<T: PartialOrd> SortMachine<T> for BubbleSort {
    fn step(&mut self, data: &mut [T], counters: &mut OperationCounters) -> Step {
        while self.pass_len > 0 {
            if self.j + 1 < self.pass_len {
                let j = self.j;
                counters.record_comparison();
                if data[j + 1] < data[j] {
                    data.swap(j, j + 1);
                    counters.record_swap();
                }
                self.j += 1;
                return Step::Checkpoint;
            }
            self.pass_len -= 1;
            self.j = 0;
        }
        Step::Done
    }
}

pub fn bubble_sort<T: PartialOrd>(data: &mut [T], counters: &mut OperationCounters) {
    BubbleSort::new(data.len()).run_to_end(data, counters);
}
