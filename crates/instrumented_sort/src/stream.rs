use std::iter::FusedIterator;

use crate::OperationCounters;
use crate::algorithms::{Machine, SortMachine, Step};

/// Pull-based view of a sort in progress.
///
/// The sort only advances inside [`next`](Iterator::next) or
/// [`next_view`](SnapshotStream::next_view); between pulls the sequence can be
/// inspected freely. Dropping the stream early leaves the sequence at its last
/// checkpoint and the counters at the work done so far.
pub struct SnapshotStream<'a, T> {
    data: &'a mut [T],
    counters: &'a mut OperationCounters,
    machine: Machine<T>,
    finished: bool,
}

impl<'a, T: PartialOrd + Clone> SnapshotStream<'a, T> {
    pub(crate) fn new(
        data: &'a mut [T],
        counters: &'a mut OperationCounters,
        machine: Machine<T>,
    ) -> Self {
        Self {
            data,
            counters,
            machine,
            finished: false,
        }
    }

    /// Advances to the next checkpoint and borrows the sequence there,
    /// without copying it.
    pub fn next_view(&mut self) -> Option<&[T]> {
        if self.finished {
            return None;
        }
        match self.machine.step(self.data, self.counters) {
            Step::Checkpoint => Some(&*self.data),
            Step::Done => {
                self.finished = true;
                None
            }
        }
    }

    /// Runs the remaining steps without producing snapshots.
    pub fn finish(mut self) -> OperationCounters {
        if !self.finished {
            self.machine.run_to_end(self.data, self.counters);
            self.finished = true;
        }
        *self.counters
    }

    pub fn sequence(&self) -> &[T] {
        self.data
    }

    pub fn counters(&self) -> OperationCounters {
        *self.counters
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl<T: PartialOrd + Clone> Iterator for SnapshotStream<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_view().map(<[T]>::to_vec)
    }
}

impl<T: PartialOrd + Clone> FusedIterator for SnapshotStream<'_, T> {}
