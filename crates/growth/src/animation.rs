//! Text rendering of a sort in progress.
//!
//! Pacing lives here rather than in the sorts: [`Paced`] sleeps between pulls
//! of any iterator, so the counts never depend on the delay.

use std::fmt::Write as _;
use std::io;
use std::thread;
use std::time::Duration;

use instrumented_sort::{GapSequence, OperationCounters, SortAlgorithm, algorithm_name, snapshots};
use log::debug;

use crate::AnalysisError;
use crate::dataset::Dataset;

pub struct Paced<I> {
    inner: I,
    delay: Duration,
    started: bool,
}

impl<I: Iterator> Iterator for Paced<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        if self.started && !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        self.started = true;
        Some(item)
    }
}

/// Wraps `iter` so that every item after the first is delayed by `delay`.
/// The final `None` is returned without waiting.
pub fn paced<I: IntoIterator>(iter: I, delay: Duration) -> Paced<I::IntoIter> {
    Paced {
        inner: iter.into_iter(),
        delay,
        started: false,
    }
}

pub trait RenderFrame: Sized {
    fn render(frame: &[Self], width: usize) -> String;
}

impl RenderFrame for f64 {
    fn render(frame: &[Self], width: usize) -> String {
        render_bars(frame, width)
    }
}

impl RenderFrame for String {
    fn render(frame: &[Self], _width: usize) -> String {
        let mut line = frame.join(" ");
        line.push('\n');
        line
    }
}

/// One horizontal bar per value, scaled so the largest value spans `width`
/// cells and the smallest gets one.
pub fn render_bars(values: &[f64], width: usize) -> String {
    let width = width.max(1);
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let span = max - min;

    let mut out = String::new();
    for &value in values {
        let cells = if span > 0.0 {
            1 + (((value - min) / span) * (width - 1) as f64).round() as usize
        } else {
            width
        };
        let _ = writeln!(out, "{value:>10.2} |{}", "#".repeat(cells));
    }
    out
}

/// Plays `algo` over a copy of `data`, writing one rendered frame per
/// checkpoint, and returns the counts of the full run.
pub fn animate<T, W>(
    algo: SortAlgorithm,
    data: &[T],
    custom_gaps: &GapSequence,
    delay: Duration,
    width: usize,
    out: &mut W,
) -> Result<OperationCounters, AnalysisError>
where
    T: PartialOrd + Clone + RenderFrame,
    W: io::Write,
{
    let mut working = data.to_vec();
    let mut counters = OperationCounters::default();
    let stream = snapshots(algo, &mut working, &mut counters, custom_gaps.as_slice())?;

    let mut frames = 0_usize;
    for frame in paced(stream, delay) {
        frames += 1;
        writeln!(out, "{} (step {frames})", algo.label())?;
        out.write_all(T::render(&frame, width).as_bytes())?;
    }
    out.flush()?;

    debug!("{} animated {frames} frames", algorithm_name(algo));
    Ok(counters)
}

pub fn animate_dataset<W: io::Write>(
    algo: SortAlgorithm,
    dataset: &Dataset,
    custom_gaps: &GapSequence,
    delay: Duration,
    width: usize,
    out: &mut W,
) -> Result<OperationCounters, AnalysisError> {
    match dataset {
        Dataset::Numbers(values) => animate(algo, values, custom_gaps, delay, width, out),
        Dataset::Strings(values) => animate(algo, values, custom_gaps, delay, width, out),
    }
}
