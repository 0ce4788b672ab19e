//! Growth-rate analysis over the instrumented sorts: builds a dataset, runs
//! each selected algorithm at increasing input sizes and tabulates the counts.

pub mod animation;
pub mod config;
pub mod dataset;
mod error;
pub mod report;
pub mod runner;

use std::io;

use instrumented_sort::{GapSequence, OperationCounters, SortAlgorithm};
use log::info;

pub use config::{AnalysisConfig, InputConfig};
pub use dataset::Dataset;
pub use error::AnalysisError;
pub use report::{GrowthPoint, GrowthReport, Metric};
pub use runner::{AnalysisRunner, input_sizes};

/// A fully validated analysis: dataset, algorithms, gaps and sizes are all
/// resolved before anything is sorted.
#[derive(Clone, Debug)]
pub struct Analysis {
    dataset: Dataset,
    runner: AnalysisRunner,
    sizes: Vec<usize>,
}

impl Analysis {
    pub fn from_config(config: &AnalysisConfig) -> Result<Self, AnalysisError> {
        let algorithms = config.resolve_algorithms()?;
        if algorithms.is_empty() {
            return Err(AnalysisError::invalid_input("no algorithms selected"));
        }

        let custom_gaps = if algorithms.iter().any(|algo| algo.uses_custom_gaps()) {
            dataset::parse_gaps(&config.custom_gaps)?
        } else {
            GapSequence::empty()
        };

        let dataset = match &config.input {
            InputConfig::Generator(generator) => Dataset::Numbers(dataset::generate(generator)?),
            InputConfig::Custom { raw, kind } => dataset::parse_input(raw, *kind)?,
        };
        let sizes = input_sizes(dataset.len(), config.intervals)?;

        info!(
            "prepared {} {:?} values, {} algorithms, sizes {:?}",
            dataset.len(),
            dataset.kind(),
            algorithms.len(),
            sizes
        );
        Ok(Self {
            dataset,
            runner: AnalysisRunner::new(algorithms, custom_gaps),
            sizes,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn algorithms(&self) -> &[SortAlgorithm] {
        self.runner.algorithms()
    }

    pub fn run(&self) -> Result<GrowthReport, AnalysisError> {
        self.runner.run_dataset(&self.dataset, &self.sizes)
    }

    /// Animates every selected algorithm over the whole dataset, one after
    /// the other.
    pub fn animate<W: io::Write>(
        &self,
        config: &AnalysisConfig,
        out: &mut W,
    ) -> Result<Vec<(SortAlgorithm, OperationCounters)>, AnalysisError> {
        let mut totals = Vec::with_capacity(self.algorithms().len());
        for &algo in self.algorithms() {
            let counters = animation::animate_dataset(
                algo,
                &self.dataset,
                self.runner.custom_gaps(),
                config.step_delay(),
                config.bar_width,
                out,
            )?;
            totals.push((algo, counters));
        }
        Ok(totals)
    }
}

#[cfg(test)]
mod tests {
    use instrumented_sort::GapStrategy;

    use super::*;

    fn config(json: &str) -> AnalysisConfig {
        AnalysisConfig::from_json(json).unwrap()
    }

    #[test]
    fn custom_numbers_end_to_end() {
        let analysis = Analysis::from_config(&config(
            r#"{
                "input": { "method": "custom", "raw": "5, 3, 1, 4, 2" },
                "algorithms": ["bubble_sort", "custom_shell_sort"],
                "custom_gaps": "2, 1",
                "intervals": 2
            }"#,
        ))
        .unwrap();
        assert_eq!(analysis.sizes(), &[2, 4, 5]);

        let report = analysis.run().unwrap();
        assert_eq!(
            report.to_csv(Metric::Comparisons),
            "Algorithm,N=2,N=4,N=5\nBubble Sort,1,6,10\nCustom Shell Sort,1,6,9\n"
        );
    }

    #[test]
    fn custom_gaps_are_ignored_unless_selected() {
        let analysis = Analysis::from_config(&config(
            r#"{ "algorithms": ["selection_sort"], "custom_gaps": "0, x" }"#,
        ))
        .unwrap();
        assert_eq!(analysis.algorithms(), &[SortAlgorithm::SelectionSort]);
        assert_eq!(analysis.dataset().len(), 100);
        assert_eq!(analysis.sizes(), &[20, 40, 60, 80, 100]);
    }

    #[test]
    fn invalid_configuration_is_reported_before_running() {
        let zero_gap = Analysis::from_config(&config(
            r#"{ "algorithms": ["custom_shell_bubble_sort"], "custom_gaps": "3, 0, 1" }"#,
        ));
        assert!(matches!(zero_gap, Err(AnalysisError::Sort(_))));

        let no_algorithms = Analysis::from_config(&config(r#"{ "algorithms": [] }"#));
        assert!(matches!(
            no_algorithms,
            Err(AnalysisError::InvalidInput { .. })
        ));

        let empty_input =
            Analysis::from_config(&config(r#"{ "input": { "method": "custom", "raw": " , " } }"#));
        assert!(matches!(empty_input, Err(AnalysisError::InvalidInput { .. })));
    }

    #[test]
    fn animation_covers_each_algorithm() {
        let mut cfg = config(
            r#"{
                "input": { "method": "custom", "raw": "3 1 2" },
                "algorithms": ["insertion_sort", "shell_bubble_sort_hibbard"],
                "step_delay_ms": 0
            }"#,
        );
        cfg.bar_width = 3;
        let analysis = Analysis::from_config(&cfg).unwrap();
        let mut out = Vec::new();
        let totals = analysis.animate(&cfg, &mut out).unwrap();
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[1].0, SortAlgorithm::ShellBubble(GapStrategy::Hibbard));

        let report = analysis.run().unwrap();
        for (algo, counters) in totals {
            let row = report.row(algo).unwrap();
            assert_eq!(row.comparisons.last(), Some(&counters.comparisons));
            assert_eq!(row.swaps.last(), Some(&counters.swaps));
        }
    }
}
