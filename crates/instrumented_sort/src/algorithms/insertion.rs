use super::{SortMachine, Step};
use crate::OperationCounters;

/// Each shift counts one comparison and one swap; the final placement of the
/// key counts one more swap. The guard test that stops the shifting is not
/// counted.
pub(crate) struct InsertionSort<T> {
    next: usize,
    hole: usize,
    key: Option<T>,
}

impl<T> InsertionSort<T> {
    pub(crate) fn new() -> Self {
        Self {
            next: 1,
            hole: 0,
            key: None,
        }
    }
}

impl<T: PartialOrd + Clone> SortMachine<T> for InsertionSort<T> {
    fn step(&mut self, data: &mut [T], counters: &mut OperationCounters) -> Step {
        if self.key.is_none() {
            if self.next >= data.len() {
                return Step::Done;
            }
            self.key = Some(data[self.next].clone());
            self.hole = self.next;
            self.next += 1;
        }

        let hole = self.hole;
        let shifts = match &self.key {
            Some(key) => hole > 0 && *key < data[hole - 1],
            None => false,
        };
        if shifts {
            counters.record_comparison();
            data[hole] = data[hole - 1].clone();
            counters.record_swap();
            self.hole -= 1;
            return Step::Checkpoint;
        }

        if let Some(key) = self.key.take() {
            data[hole] = key;
            counters.record_swap();
        }
        Step::Checkpoint
    }
}

pub fn insertion_sort<T: PartialOrd + Clone>(data: &mut [T], counters: &mut OperationCounters) {
    InsertionSort::new().run_to_end(data, counters);
}
