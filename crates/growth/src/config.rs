//! JSON configuration for an analysis run.
//!
//! Every field is optional; a missing field takes the default below.
//!
//! ```json
//! {
//!   "input": { "method": "generator", "max_n": 200, "nature": "reversed" },
//!   "algorithms": ["bubble_sort", "shell_sort_knuth", "custom_shell_sort"],
//!   "custom_gaps": "7, 3, 1",
//!   "intervals": 4
//! }
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use instrumented_sort::{SortAlgorithm, algorithm_name, all_algorithms};
use serde::{Deserialize, Serialize};

use crate::AnalysisError;
use crate::dataset::{ElementKind, GeneratorConfig};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum InputConfig {
    Generator(GeneratorConfig),
    Custom {
        raw: String,
        #[serde(default)]
        kind: ElementKind,
    },
}

impl Default for InputConfig {
    fn default() -> Self {
        Self::Generator(GeneratorConfig::default())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub input: InputConfig,
    /// Algorithm ids or display labels.
    pub algorithms: Vec<String>,
    /// Comma-separated gaps for the custom shell sorts, largest first.
    pub custom_gaps: String,
    pub intervals: usize,
    pub visualize: bool,
    pub step_delay_ms: u64,
    pub bar_width: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            input: InputConfig::default(),
            algorithms: all_algorithms()
                .iter()
                .map(|&algo| algorithm_name(algo).to_string())
                .collect(),
            custom_gaps: "5, 2, 1".to_string(),
            intervals: 5,
            visualize: false,
            step_delay_ms: 20,
            bar_width: 40,
        }
    }
}

impl AnalysisConfig {
    pub fn from_json(text: &str) -> Result<Self, AnalysisError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AnalysisError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parses the selected algorithms, keeping the first occurrence of each.
    pub fn resolve_algorithms(&self) -> Result<Vec<SortAlgorithm>, AnalysisError> {
        let mut resolved: Vec<SortAlgorithm> = Vec::with_capacity(self.algorithms.len());
        for name in &self.algorithms {
            let algo = name.parse::<SortAlgorithm>()?;
            if !resolved.contains(&algo) {
                resolved.push(algo);
            }
        }
        Ok(resolved)
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}
