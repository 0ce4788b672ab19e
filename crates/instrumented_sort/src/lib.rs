//! Classical sorting algorithms instrumented with exact comparison and swap
//! counts, with optional step-by-step snapshots of the sort in progress.

mod algorithms;
mod counters;
mod error;
pub mod gaps;
mod stream;

use std::fmt;
use std::str::FromStr;

pub use algorithms::{
    bubble_sort, insertion_sort, selection_sort, shell_bubble_sort, shell_insertion_sort,
};
pub use counters::OperationCounters;
pub use error::SortError;
pub use gaps::{GapSequence, GapStrategy, generate_gaps, generate_gaps_by_name};
pub use stream::SnapshotStream;

use algorithms::{Machine, SortMachine};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    BubbleSort,
    InsertionSort,
    SelectionSort,
    ShellInsertion(GapStrategy),
    ShellBubble(GapStrategy),
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 11] = [
    SortAlgorithm::BubbleSort,
    SortAlgorithm::InsertionSort,
    SortAlgorithm::SelectionSort,
    SortAlgorithm::ShellInsertion(GapStrategy::Shell),
    SortAlgorithm::ShellBubble(GapStrategy::Shell),
    SortAlgorithm::ShellInsertion(GapStrategy::Hibbard),
    SortAlgorithm::ShellBubble(GapStrategy::Hibbard),
    SortAlgorithm::ShellInsertion(GapStrategy::Knuth),
    SortAlgorithm::ShellBubble(GapStrategy::Knuth),
    SortAlgorithm::ShellInsertion(GapStrategy::Custom),
    SortAlgorithm::ShellBubble(GapStrategy::Custom),
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

pub fn algorithm_name(algo: SortAlgorithm) -> &'static str {
    match algo {
        SortAlgorithm::BubbleSort => "bubble_sort",
        SortAlgorithm::InsertionSort => "insertion_sort",
        SortAlgorithm::SelectionSort => "selection_sort",
        SortAlgorithm::ShellInsertion(GapStrategy::Shell) => "shell_sort",
        SortAlgorithm::ShellBubble(GapStrategy::Shell) => "shell_bubble_sort",
        SortAlgorithm::ShellInsertion(GapStrategy::Hibbard) => "shell_sort_hibbard",
        SortAlgorithm::ShellBubble(GapStrategy::Hibbard) => "shell_bubble_sort_hibbard",
        SortAlgorithm::ShellInsertion(GapStrategy::Knuth) => "shell_sort_knuth",
        SortAlgorithm::ShellBubble(GapStrategy::Knuth) => "shell_bubble_sort_knuth",
        SortAlgorithm::ShellInsertion(GapStrategy::Custom) => "custom_shell_sort",
        SortAlgorithm::ShellBubble(GapStrategy::Custom) => "custom_shell_bubble_sort",
    }
}

impl SortAlgorithm {
    /// Human-readable name used in reports and chart legends.
    pub fn label(self) -> &'static str {
        match self {
            Self::BubbleSort => "Bubble Sort",
            Self::InsertionSort => "Insertion Sort",
            Self::SelectionSort => "Selection Sort",
            Self::ShellInsertion(GapStrategy::Shell) => "Shell Sort (N/2^k)",
            Self::ShellBubble(GapStrategy::Shell) => "Shell Bubble Sort (N/2^k)",
            Self::ShellInsertion(GapStrategy::Hibbard) => "Shell Sort (Hibbard)",
            Self::ShellBubble(GapStrategy::Hibbard) => "Shell Bubble Sort (Hibbard)",
            Self::ShellInsertion(GapStrategy::Knuth) => "Shell Sort (Knuth)",
            Self::ShellBubble(GapStrategy::Knuth) => "Shell Bubble Sort (Knuth)",
            Self::ShellInsertion(GapStrategy::Custom) => "Custom Shell Sort",
            Self::ShellBubble(GapStrategy::Custom) => "Custom Shell Bubble Sort",
        }
    }

    pub fn gap_strategy(self) -> Option<GapStrategy> {
        match self {
            Self::ShellInsertion(strategy) | Self::ShellBubble(strategy) => Some(strategy),
            Self::BubbleSort | Self::InsertionSort | Self::SelectionSort => None,
        }
    }

    pub fn uses_custom_gaps(self) -> bool {
        self.gap_strategy() == Some(GapStrategy::Custom)
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(algorithm_name(*self))
    }
}

impl FromStr for SortAlgorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        all_algorithms()
            .iter()
            .copied()
            .find(|&algo| algorithm_name(algo) == name || algo.label() == name)
            .ok_or_else(|| SortError::InvalidAlgorithm {
                name: s.to_string(),
            })
    }
}

fn machine_for<T>(
    algo: SortAlgorithm,
    len: usize,
    custom_gaps: &[usize],
) -> Result<Machine<T>, SortError> {
    Ok(match algo {
        SortAlgorithm::BubbleSort => Machine::bubble(len),
        SortAlgorithm::InsertionSort => Machine::insertion(),
        SortAlgorithm::SelectionSort => Machine::selection(),
        SortAlgorithm::ShellInsertion(strategy) => {
            Machine::shell_insertion(generate_gaps(len, strategy, custom_gaps)?)
        }
        SortAlgorithm::ShellBubble(strategy) => {
            Machine::shell_bubble(generate_gaps(len, strategy, custom_gaps)?)
        }
    })
}

/// Sorts `data` in place with `algo`, adding its work to `counters`.
///
/// `custom_gaps` is only read by the custom shell variants. Gap validation
/// happens before `data` is touched, so on error the input is unchanged.
pub fn sort<T: PartialOrd + Clone>(
    algo: SortAlgorithm,
    data: &mut [T],
    counters: &mut OperationCounters,
    custom_gaps: &[usize],
) -> Result<(), SortError> {
    let mut machine = machine_for(algo, data.len(), custom_gaps)?;
    machine.run_to_end(data, counters);
    Ok(())
}

/// Like [`sort`], but returns a stream that yields the sequence at every
/// checkpoint of `algo`. Nothing runs until the stream is pulled.
pub fn snapshots<'a, T: PartialOrd + Clone>(
    algo: SortAlgorithm,
    data: &'a mut [T],
    counters: &'a mut OperationCounters,
    custom_gaps: &[usize],
) -> Result<SnapshotStream<'a, T>, SortError> {
    let machine = machine_for(algo, data.len(), custom_gaps)?;
    Ok(SnapshotStream::new(data, counters, machine))
}
