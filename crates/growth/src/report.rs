//! Counts per (algorithm, N), in wide form for CSV and long form for charts.

use std::fmt::Write as _;
use std::io;

use instrumented_sort::{OperationCounters, SortAlgorithm, algorithm_name};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Comparisons,
    Swaps,
}

impl Metric {
    pub fn label(self) -> &'static str {
        match self {
            Self::Comparisons => "comparisons",
            Self::Swaps => "swaps",
        }
    }

    fn pick(self, counters: &OperationCounters) -> u64 {
        match self {
            Self::Comparisons => counters.comparisons,
            Self::Swaps => counters.swaps,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmRow {
    pub name: String,
    pub label: String,
    pub comparisons: Vec<u64>,
    pub swaps: Vec<u64>,
}

impl AlgorithmRow {
    pub fn counts(&self, metric: Metric) -> &[u64] {
        match metric {
            Metric::Comparisons => &self.comparisons,
            Metric::Swaps => &self.swaps,
        }
    }
}

/// One melted cell: the count for `algorithm` at input size `n`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub algorithm: String,
    pub n: usize,
    pub count: u64,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct GrowthReport {
    pub sizes: Vec<usize>,
    pub rows: Vec<AlgorithmRow>,
}

impl GrowthReport {
    pub fn new(sizes: Vec<usize>) -> Self {
        Self {
            sizes,
            rows: Vec::new(),
        }
    }

    /// Appends a row; `runs[k]` must hold the counters measured at `sizes[k]`.
    pub fn push_row(&mut self, algo: SortAlgorithm, runs: &[OperationCounters]) {
        debug_assert_eq!(runs.len(), self.sizes.len());
        self.rows.push(AlgorithmRow {
            name: algorithm_name(algo).to_string(),
            label: algo.label().to_string(),
            comparisons: runs.iter().map(|c| Metric::Comparisons.pick(c)).collect(),
            swaps: runs.iter().map(|c| Metric::Swaps.pick(c)).collect(),
        });
    }

    pub fn row(&self, algo: SortAlgorithm) -> Option<&AlgorithmRow> {
        let name = algorithm_name(algo);
        self.rows.iter().find(|row| row.name == name)
    }

    /// Wide table: header `Algorithm,N=<n>,...`, then one row per algorithm.
    pub fn to_csv(&self, metric: Metric) -> String {
        let mut out = String::from("Algorithm");
        for n in &self.sizes {
            let _ = write!(out, ",N={n}");
        }
        out.push('\n');
        for row in &self.rows {
            out.push_str(&csv_field(&row.label));
            for count in row.counts(metric) {
                let _ = write!(out, ",{count}");
            }
            out.push('\n');
        }
        out
    }

    pub fn write_csv<W: io::Write>(&self, metric: Metric, mut writer: W) -> io::Result<()> {
        writer.write_all(self.to_csv(metric).as_bytes())
    }

    /// Long form, one point per (algorithm, N), ordered by row then size.
    pub fn melt(&self, metric: Metric) -> Vec<GrowthPoint> {
        self.rows
            .iter()
            .flat_map(|row| {
                self.sizes
                    .iter()
                    .zip(row.counts(metric))
                    .map(|(&n, &count)| GrowthPoint {
                        algorithm: row.label.clone(),
                        n,
                        count,
                    })
            })
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
