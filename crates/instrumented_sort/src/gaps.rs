//! Gap sequences for the shell-family sorts.
//!
//! Every sequence is consumed front to back, so the largest gap comes first.

use std::fmt;
use std::str::FromStr;

use crate::SortError;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GapStrategy {
    /// `n/2, n/4, ..., 1`.
    Shell,
    /// `2^k - 1` below `n`.
    Hibbard,
    /// `(3^k - 1) / 2` up to `ceil(n / 3)`.
    Knuth,
    /// Caller-supplied, used verbatim.
    Custom,
}

pub const ALL_STRATEGIES: [GapStrategy; 4] = [
    GapStrategy::Shell,
    GapStrategy::Hibbard,
    GapStrategy::Knuth,
    GapStrategy::Custom,
];

impl GapStrategy {
    pub fn name(self) -> &'static str {
        match self {
            Self::Shell => "shell",
            Self::Hibbard => "hibbard",
            Self::Knuth => "knuth",
            Self::Custom => "custom",
        }
    }

    pub fn formula(self) -> &'static str {
        match self {
            Self::Shell => "N/2^k",
            Self::Hibbard => "2^k-1",
            Self::Knuth => "(3^k-1)/2",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for GapStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GapStrategy {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_STRATEGIES
            .iter()
            .copied()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SortError::InvalidStrategy {
                name: s.to_string(),
            })
    }
}

/// A list of strictly positive gaps.
///
/// Built-in strategies always yield a strictly decreasing list ending in 1.
/// Custom lists keep the caller's order and may not end in 1, in which case
/// the shell sorts leave the data only gap-ordered.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct GapSequence(Vec<usize>);

impl GapSequence {
    pub fn new(gaps: Vec<usize>) -> Result<Self, SortError> {
        if let Some(index) = gaps.iter().position(|&gap| gap == 0) {
            return Err(SortError::InvalidGapSequence { index, value: 0 });
        }
        Ok(Self(gaps))
    }

    /// Validates gaps that arrive as signed integers, e.g. parsed from user text.
    pub fn from_signed(gaps: &[i64]) -> Result<Self, SortError> {
        let mut out = Vec::with_capacity(gaps.len());
        for (index, &value) in gaps.iter().enumerate() {
            let gap = usize::try_from(value)
                .ok()
                .filter(|&gap| gap > 0)
                .ok_or(SortError::InvalidGapSequence { index, value })?;
            out.push(gap);
        }
        Ok(Self(out))
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<usize> {
        self.0.get(index).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }
}

impl AsRef<[usize]> for GapSequence {
    fn as_ref(&self) -> &[usize] {
        &self.0
    }
}

impl TryFrom<Vec<usize>> for GapSequence {
    type Error = SortError;

    fn try_from(gaps: Vec<usize>) -> Result<Self, Self::Error> {
        Self::new(gaps)
    }
}

/// Gap sequence for sorting `n` elements with `strategy`.
///
/// `custom` is only read for [`GapStrategy::Custom`]; it is returned as-is
/// once every value has been checked to be positive.
pub fn generate_gaps(
    n: usize,
    strategy: GapStrategy,
    custom: &[usize],
) -> Result<GapSequence, SortError> {
    match strategy {
        GapStrategy::Shell => Ok(GapSequence(shell_gaps(n))),
        GapStrategy::Hibbard => Ok(GapSequence(hibbard_gaps(n))),
        GapStrategy::Knuth => Ok(GapSequence(knuth_gaps(n))),
        GapStrategy::Custom => GapSequence::new(custom.to_vec()),
    }
}

/// Same as [`generate_gaps`], with the strategy given by name.
pub fn generate_gaps_by_name(
    n: usize,
    strategy: &str,
    custom: &[usize],
) -> Result<GapSequence, SortError> {
    generate_gaps(n, strategy.parse()?, custom)
}

fn shell_gaps(n: usize) -> Vec<usize> {
    let mut gaps = Vec::new();
    let mut gap = n / 2;
    while gap > 0 {
        gaps.push(gap);
        gap /= 2;
    }
    gaps
}

fn hibbard_gaps(n: usize) -> Vec<usize> {
    let mut gaps = Vec::new();
    let mut pow2 = 2_usize;
    while pow2 - 1 < n {
        gaps.push(pow2 - 1);
        match pow2.checked_mul(2) {
            Some(next) => pow2 = next,
            None => break,
        }
    }
    gaps.reverse();
    gaps
}

fn knuth_gaps(n: usize) -> Vec<usize> {
    let limit = n.div_ceil(3);
    let mut gaps = Vec::new();
    let mut pow3 = 3_usize;
    while (pow3 - 1) / 2 <= limit {
        gaps.push((pow3 - 1) / 2);
        match pow3.checked_mul(3) {
            Some(next) => pow3 = next,
            None => break,
        }
    }
    gaps.reverse();
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gaps(n: usize, strategy: GapStrategy) -> Vec<usize> {
        generate_gaps(n, strategy, &[]).unwrap().into_vec()
    }

    #[test]
    fn known_sequences_for_ten() {
        assert_eq!(gaps(10, GapStrategy::Shell), vec![5, 2, 1]);
        assert_eq!(gaps(10, GapStrategy::Hibbard), vec![7, 3, 1]);
        assert_eq!(gaps(10, GapStrategy::Knuth), vec![4, 1]);
    }

    #[test]
    fn small_lengths() {
        assert!(gaps(0, GapStrategy::Shell).is_empty());
        assert!(gaps(1, GapStrategy::Shell).is_empty());
        assert_eq!(gaps(2, GapStrategy::Shell), vec![1]);
        assert!(gaps(0, GapStrategy::Hibbard).is_empty());
        assert!(gaps(1, GapStrategy::Hibbard).is_empty());
        assert_eq!(gaps(2, GapStrategy::Hibbard), vec![1]);
        assert!(gaps(0, GapStrategy::Knuth).is_empty());
        assert_eq!(gaps(1, GapStrategy::Knuth), vec![1]);
    }

    #[test]
    fn boundaries_follow_the_formulas() {
        // 2^k - 1 must be strictly below n.
        assert_eq!(gaps(7, GapStrategy::Hibbard), vec![3, 1]);
        assert_eq!(gaps(8, GapStrategy::Hibbard), vec![7, 3, 1]);
        // (3^k - 1) / 2 may equal ceil(n / 3).
        assert_eq!(gaps(12, GapStrategy::Knuth), vec![4, 1]);
        assert_eq!(gaps(39, GapStrategy::Knuth), vec![13, 4, 1]);
        assert_eq!(gaps(100, GapStrategy::Knuth), vec![13, 4, 1]);
        assert_eq!(gaps(100, GapStrategy::Shell), vec![50, 25, 12, 6, 3, 1]);
    }

    #[test]
    fn builtin_sequences_are_strictly_decreasing_and_end_in_one() {
        for n in 2..512 {
            for strategy in [GapStrategy::Shell, GapStrategy::Hibbard, GapStrategy::Knuth] {
                let seq = gaps(n, strategy);
                assert_eq!(seq.last(), Some(&1), "n={n} strategy={strategy}");
                assert!(seq.windows(2).all(|w| w[0] > w[1]), "n={n} strategy={strategy}");
            }
        }
    }

    #[test]
    fn huge_lengths_do_not_overflow() {
        for strategy in [GapStrategy::Shell, GapStrategy::Hibbard, GapStrategy::Knuth] {
            let seq = gaps(usize::MAX, strategy);
            assert_eq!(seq.last(), Some(&1));
        }
    }

    #[test]
    fn custom_is_returned_verbatim() {
        assert_eq!(
            generate_gaps(5, GapStrategy::Custom, &[3, 1]).unwrap().as_slice(),
            &[3, 1]
        );
        assert_eq!(
            generate_gaps(5, GapStrategy::Custom, &[2, 7, 2]).unwrap().as_slice(),
            &[2, 7, 2]
        );
        assert!(generate_gaps(5, GapStrategy::Custom, &[]).unwrap().is_empty());
    }

    #[test]
    fn zero_and_negative_gaps_are_rejected() {
        assert_eq!(
            generate_gaps(5, GapStrategy::Custom, &[3, 0, 1]),
            Err(SortError::InvalidGapSequence { index: 1, value: 0 })
        );
        assert_eq!(
            GapSequence::from_signed(&[5, -2, 1]),
            Err(SortError::InvalidGapSequence {
                index: 1,
                value: -2
            })
        );
        assert_eq!(
            GapSequence::from_signed(&[5, 2, 1]).unwrap().as_slice(),
            &[5, 2, 1]
        );
    }

    #[test]
    fn strategy_names_round_trip() {
        for strategy in ALL_STRATEGIES {
            assert_eq!(strategy.name().parse::<GapStrategy>(), Ok(strategy));
        }
        assert_eq!(" Knuth ".parse::<GapStrategy>(), Ok(GapStrategy::Knuth));
        assert_eq!(
            generate_gaps_by_name(10, "sedgewick", &[]),
            Err(SortError::InvalidStrategy {
                name: "sedgewick".to_string()
            })
        );
    }
}
