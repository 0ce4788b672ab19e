use super::{SortMachine, Step};
use crate::{GapSequence, OperationCounters};

/// Gapped bubble sort. For each gap, the pass end shrinks from `len` down to
/// `gap + 1` and each `(end, j)` comparison is a checkpoint.
pub(crate) struct ShellBubbleSort {
    gaps: GapSequence,
    gap_idx: usize,
    end: Option<usize>,
    j: usize,
}

impl ShellBubbleSort {
    pub(crate) fn new(gaps: GapSequence) -> Self {
        Self {
            gaps,
            gap_idx: 0,
            end: None,
            j: 0,
        }
    }
}

impl<T: PartialOrd> SortMachine<T> for ShellBubbleSort {
    fn step(&mut self, data: &mut [T], counters: &mut OperationCounters) -> Step {
        let len = data.len();
        while let Some(gap) = self.gaps.get(self.gap_idx) {
            let end = *self.end.get_or_insert(len);
            if end <= gap {
                self.gap_idx += 1;
                self.end = None;
                self.j = 0;
                continue;
            }
            if self.j < end - gap {
                let j = self.j;
                counters.record_comparison();
                if data[j + gap] < data[j] {
                    data.swap(j, j + gap);
                    counters.record_swap();
                }
                self.j += 1;
                return Step::Checkpoint;
            }
            self.end = Some(end - 1);
            self.j = 0;
        }
        Step::Done
    }
}

pub fn shell_bubble_sort<T: PartialOrd>(
    data: &mut [T],
    counters: &mut OperationCounters,
    gaps: &GapSequence,
) {
    ShellBubbleSort::new(gaps.clone()).run_to_end(data, counters);
}
