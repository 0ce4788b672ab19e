//! Resumable sort machines.
//!
//! Each machine advances the sort to its next checkpoint per [`SortMachine::step`]
//! call, so the same code drives both plain runs and snapshot streams.

mod bubble;
mod insertion;
mod selection;
mod shell_bubble;
mod shell_insertion;

pub use bubble::bubble_sort;
pub use insertion::insertion_sort;
pub use selection::selection_sort;
pub use shell_bubble::shell_bubble_sort;
pub use shell_insertion::shell_insertion_sort;

use bubble::BubbleSort;
use insertion::InsertionSort;
use selection::SelectionSort;
use shell_bubble::ShellBubbleSort;
use shell_insertion::ShellInsertionSort;

use crate::{GapSequence, OperationCounters};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Step {
    /// Paused after a checkpoint; the slice holds a state worth showing.
    Checkpoint,
    Done,
}

pub(crate) trait SortMachine<T> {
    /// Advances to the next checkpoint. Once `Done` is returned, every
    /// further call returns `Done` without touching `data` or `counters`.
    fn step(&mut self, data: &mut [T], counters: &mut OperationCounters) -> Step;

    fn run_to_end(&mut self, data: &mut [T], counters: &mut OperationCounters) {
        while self.step(data, counters) == Step::Checkpoint {}
    }
}

pub(crate) enum Machine<T> {
    Bubble(BubbleSort),
    Insertion(InsertionSort<T>),
    Selection(SelectionSort),
    ShellInsertion(ShellInsertionSort<T>),
    ShellBubble(ShellBubbleSort),
}

impl<T> Machine<T> {
    pub(crate) fn bubble(len: usize) -> Self {
        Self::Bubble(BubbleSort::new(len))
    }

    pub(crate) fn insertion() -> Self {
        Self::Insertion(InsertionSort::new())
    }

    pub(crate) fn selection() -> Self {
        Self::Selection(SelectionSort::new())
    }

    pub(crate) fn shell_insertion(gaps: GapSequence) -> Self {
        Self::ShellInsertion(ShellInsertionSort::new(gaps))
    }

    pub(crate) fn shell_bubble(gaps: GapSequence) -> Self {
        Self::ShellBubble(ShellBubbleSort::new(gaps))
    }
}

impl<T: PartialOrd + Clone> SortMachine<T> for Machine<T> {
    fn step(&mut self, data: &mut [T], counters: &mut OperationCounters) -> Step {
        match self {
            Self::Bubble(m) => m.step(data, counters),
            Self::Insertion(m) => m.step(data, counters),
            Self::Selection(m) => m.step(data, counters),
            Self::ShellInsertion(m) => m.step(data, counters),
            Self::ShellBubble(m) => m.step(data, counters),
        }
    }
}
