use instrumented_sort::{GapSequence, OperationCounters, SortAlgorithm, algorithm_name, sort};
use log::{debug, info, warn};

use crate::AnalysisError;
use crate::dataset::Dataset;
use crate::report::GrowthReport;

/// Input sizes measured for a dataset of `max_n` elements.
///
/// Sizes step by `max(1, max_n / intervals)`; `max_n` is appended when the
/// last step falls short. Steps beyond `max_n` are clamped and duplicates
/// dropped, so the result is strictly increasing and never exceeds `max_n`.
pub fn input_sizes(max_n: usize, intervals: usize) -> Result<Vec<usize>, AnalysisError> {
    if intervals == 0 {
        return Err(AnalysisError::invalid_input("intervals must be at least 1"));
    }
    if max_n == 0 {
        return Err(AnalysisError::invalid_input("dataset is empty"));
    }

    let step = (max_n / intervals).max(1);
    let mut sizes: Vec<usize> = (1..=intervals)
        .map(|i| step.saturating_mul(i).min(max_n))
        .collect();
    if sizes.last().is_some_and(|&last| last < max_n) {
        sizes.push(max_n);
    }
    sizes.dedup();
    Ok(sizes)
}

/// A non-empty custom sequence without a final gap of 1 only partially sorts.
/// An empty one is a no-op and is not flagged.
fn leaves_custom_runs_unsorted(algorithms: &[SortAlgorithm], custom_gaps: &GapSequence) -> bool {
    algorithms.iter().any(|algo| algo.uses_custom_gaps())
        && custom_gaps.as_slice().last().is_some_and(|&last| last != 1)
}

/// Runs every selected algorithm once per input size on a fresh copy of the
/// dataset prefix, with fresh counters per run.
#[derive(Clone, Debug)]
pub struct AnalysisRunner {
    algorithms: Vec<SortAlgorithm>,
    custom_gaps: GapSequence,
}

impl AnalysisRunner {
    pub fn new(algorithms: Vec<SortAlgorithm>, custom_gaps: GapSequence) -> Self {
        if leaves_custom_runs_unsorted(&algorithms, &custom_gaps) {
            warn!(
                "custom gaps {:?} do not end in 1; custom shell sorts will not fully sort",
                custom_gaps.as_slice()
            );
        }
        Self {
            algorithms,
            custom_gaps,
        }
    }

    pub fn algorithms(&self) -> &[SortAlgorithm] {
        &self.algorithms
    }

    pub fn custom_gaps(&self) -> &GapSequence {
        &self.custom_gaps
    }

    /// Counts for one run of `algo` over a copy of `data`.
    pub fn measure<T: PartialOrd + Clone>(
        &self,
        algo: SortAlgorithm,
        data: &[T],
    ) -> Result<OperationCounters, AnalysisError> {
        let mut subset = data.to_vec();
        let mut counters = OperationCounters::default();
        sort(algo, &mut subset, &mut counters, self.custom_gaps.as_slice())?;
        debug!(
            "{} n={} comparisons={} swaps={}",
            algorithm_name(algo),
            data.len(),
            counters.comparisons,
            counters.swaps
        );
        Ok(counters)
    }

    pub fn run<T: PartialOrd + Clone>(
        &self,
        data: &[T],
        sizes: &[usize],
    ) -> Result<GrowthReport, AnalysisError> {
        if self.algorithms.is_empty() {
            return Err(AnalysisError::invalid_input("no algorithms selected"));
        }
        if let Some(&n) = sizes.iter().find(|&&n| n > data.len()) {
            return Err(AnalysisError::invalid_input(format!(
                "input size {n} exceeds dataset length {}",
                data.len()
            )));
        }

        info!(
            "measuring {} algorithms at sizes {:?}",
            self.algorithms.len(),
            sizes
        );
        let mut report = GrowthReport::new(sizes.to_vec());
        for &algo in &self.algorithms {
            let runs = sizes
                .iter()
                .map(|&n| self.measure(algo, &data[..n]))
                .collect::<Result<Vec<_>, _>>()?;
            report.push_row(algo, &runs);
        }
        Ok(report)
    }

    pub fn run_dataset(
        &self,
        dataset: &Dataset,
        sizes: &[usize],
    ) -> Result<GrowthReport, AnalysisError> {
        match dataset {
            Dataset::Numbers(values) => self.run(values, sizes),
            Dataset::Strings(values) => self.run(values, sizes),
        }
    }
}
