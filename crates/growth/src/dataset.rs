//! Input data: generated numeric sequences or parsed user text.

use instrumented_sort::GapSequence;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand_distr::{Distribution as _, Normal};
use serde::{Deserialize, Serialize};

use crate::AnalysisError;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distribution {
    /// Evenly spaced values from `low` towards `high`.
    #[default]
    Uniform,
    /// Normal samples centred between `low` and `high`, with `high - low`
    /// spanning six standard deviations.
    Normal,
}

/// Ordering applied to uniform data. Normal samples keep their drawn order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nature {
    #[default]
    Random,
    /// Ascending, with the first and last elements exchanged.
    AlmostSorted,
    Reversed,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    #[default]
    Numbers,
    Strings,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub max_n: usize,
    pub low: f64,
    pub high: f64,
    pub distribution: Distribution,
    pub nature: Nature,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_n: 100,
            low: 1.0,
            high: 100.0,
            distribution: Distribution::Uniform,
            nature: Nature::Random,
            seed: 0x5EED_2026,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Dataset {
    Numbers(Vec<f64>),
    Strings(Vec<String>),
}

impl Dataset {
    pub fn len(&self) -> usize {
        match self {
            Self::Numbers(values) => values.len(),
            Self::Strings(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Numbers(_) => ElementKind::Numbers,
            Self::Strings(_) => ElementKind::Strings,
        }
    }
}

pub fn generate(config: &GeneratorConfig) -> Result<Vec<f64>, AnalysisError> {
    if !config.low.is_finite() || !config.high.is_finite() {
        return Err(AnalysisError::invalid_input(format!(
            "value range [{}, {}] must be finite",
            config.low, config.high
        )));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let data = match config.distribution {
        Distribution::Normal => {
            let mean = (config.high + config.low) / 2.0;
            let std_dev = (config.high - config.low) / 6.0;
            let normal = Normal::new(mean, std_dev).map_err(|err| {
                AnalysisError::invalid_input(format!(
                    "normal distribution with mean {mean} and std-dev {std_dev}: {err}"
                ))
            })?;
            normal.sample_iter(&mut rng).take(config.max_n).collect()
        }
        Distribution::Uniform => {
            let step = if config.max_n == 0 {
                0.0
            } else {
                (config.high - config.low) / config.max_n as f64
            };
            let mut data: Vec<f64> = (0..config.max_n)
                .map(|i| config.low + i as f64 * step)
                .collect();
            match config.nature {
                Nature::Random => data.shuffle(&mut rng),
                Nature::AlmostSorted => {
                    data.sort_by(f64::total_cmp);
                    if let Some(last) = data.len().checked_sub(1).filter(|&last| last > 0) {
                        data.swap(0, last);
                    }
                }
                Nature::Reversed => data.sort_by(|a, b| b.total_cmp(a)),
            }
            data
        }
    };

    debug!(
        "generated {} values ({:?}, {:?}, seed={:#x})",
        data.len(),
        config.distribution,
        config.nature,
        config.seed
    );
    Ok(data)
}

fn tokens(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
}

/// Splits `raw` on commas and whitespace and reads each token as `kind`.
pub fn parse_input(raw: &str, kind: ElementKind) -> Result<Dataset, AnalysisError> {
    match kind {
        ElementKind::Strings => Ok(Dataset::Strings(tokens(raw).map(str::to_string).collect())),
        ElementKind::Numbers => {
            let mut values = Vec::new();
            for token in tokens(raw) {
                let value = token
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| {
                        AnalysisError::invalid_input(format!("'{token}' is not a finite number"))
                    })?;
                values.push(value);
            }
            Ok(Dataset::Numbers(values))
        }
    }
}

/// Reads a comma-separated gap list such as `"5, 2, 1"`.
pub fn parse_gaps(raw: &str) -> Result<GapSequence, AnalysisError> {
    let mut gaps = Vec::new();
    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let gap = token.parse::<i64>().map_err(|_| {
            AnalysisError::invalid_input(format!("gap '{token}' is not an integer"))
        })?;
        gaps.push(gap);
    }
    Ok(GapSequence::from_signed(&gaps)?)
}
