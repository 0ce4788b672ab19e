/// Comparison and swap tallies for one sort invocation.
///
/// The core only ever adds to these fields. Reusing a value across runs
/// accumulates; call [`OperationCounters::reset`] or start from
/// `OperationCounters::default()` to measure a single run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct OperationCounters {
    pub comparisons: u64,
    pub swaps: u64,
}

impl OperationCounters {
    pub const fn new() -> Self {
        Self {
            comparisons: 0,
            swaps: 0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline(always)]
    pub(crate) fn record_comparison(&mut self) {
        self.comparisons += 1;
    }

    #[inline(always)]
    pub(crate) fn record_swap(&mut self) {
        self.swaps += 1;
    }
}
