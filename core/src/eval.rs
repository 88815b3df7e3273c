//! 11-point interpolated precision/recall.
//!
//! For each query the system ranking is walked top-down, a point is kept every
//! time recall changes, and the points are interpolated onto recall levels
//! 0.0, 0.1, ..., 1.0 by taking the best precision at any recall >= the level.

use crate::error::{Result, VsmError};
use serde::Serialize;
use std::collections::HashSet;

pub const NUM_RECALL_LEVELS: usize = 11;

/// Recall level `i` is exactly `i / 10`.
pub fn recall_level(i: usize) -> f64 {
    i as f64 / 10.0
}

pub fn recall_levels() -> [f64; NUM_RECALL_LEVELS] {
    std::array::from_fn(recall_level)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrecisionRecallPoint {
    pub rank: usize,
    pub recall: f64,
    pub precision: f64,
}

/// Interpolated precision at each of the 11 recall levels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InterpolatedCurve {
    pub precision: [f64; NUM_RECALL_LEVELS],
}

impl InterpolatedCurve {
    pub fn at(&self, level: usize) -> f64 { self.precision[level] }

    /// (recall level, precision) pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.precision.iter().enumerate().map(|(i, &p)| (recall_level(i), p))
    }
}

/// One query's ground truth and the identifiers the system returned, in rank order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryJudgment {
    pub ideal: Vec<String>,
    pub system: Vec<String>,
}

/// Observed precision/recall staircase for one ranking.
///
/// Every occurrence in `retrieved` is judged on its own, duplicates included.
/// With an empty `ideal` set recall stays at 0 for every rank.
pub fn precision_recall_points<S: AsRef<str>>(ideal: &[S], retrieved: &[S]) -> Vec<PrecisionRecallPoint> {
    let relevant: HashSet<&str> = ideal.iter().map(AsRef::as_ref).collect();
    let total = relevant.len();
    let mut points: Vec<PrecisionRecallPoint> = Vec::new();
    let mut hits = 0usize;
    for (i, doc) in retrieved.iter().enumerate() {
        if relevant.contains(doc.as_ref()) {
            hits += 1;
        }
        let rank = i + 1;
        let precision = hits as f64 / rank as f64;
        let recall = if total == 0 { 0.0 } else { hits as f64 / total as f64 };
        if points.last().map_or(true, |p| p.recall != recall) {
            points.push(PrecisionRecallPoint { rank, recall, precision });
        }
    }
    points
}

/// Max-over-suffix interpolation; levels with no point at or above them get 0.
pub fn interpolate(points: &[PrecisionRecallPoint]) -> InterpolatedCurve {
    let mut precision = [0.0; NUM_RECALL_LEVELS];
    for (i, slot) in precision.iter_mut().enumerate() {
        let level = recall_level(i);
        *slot = points
            .iter()
            .filter(|p| p.recall >= level)
            .map(|p| p.precision)
            .fold(0.0, f64::max);
    }
    InterpolatedCurve { precision }
}

pub fn evaluate_query(judgment: &QueryJudgment) -> InterpolatedCurve {
    interpolate(&precision_recall_points(&judgment.ideal, &judgment.system))
}

/// Arithmetic mean per recall level.
pub fn average(curves: &[InterpolatedCurve]) -> Result<InterpolatedCurve> {
    if curves.is_empty() {
        return Err(VsmError::NoQueries);
    }
    let n = curves.len() as f64;
    let mut precision = [0.0; NUM_RECALL_LEVELS];
    for (i, slot) in precision.iter_mut().enumerate() {
        *slot = curves.iter().map(|c| c.precision[i]).sum::<f64>() / n;
    }
    Ok(InterpolatedCurve { precision })
}

/// Parse `N`, then N ideal lines, then N system lines, each a whitespace
/// separated list of identifiers. An empty line is an empty list.
pub fn parse_judgments(input: &str) -> Result<Vec<QueryJudgment>> {
    let mut lines = input.lines().skip_while(|l| l.trim().is_empty());
    let header = lines.next().ok_or_else(|| VsmError::malformed("missing query count"))?;
    let n: usize = header
        .trim()
        .parse()
        .map_err(|_| VsmError::malformed(format!("invalid query count {:?}", header.trim())))?;
    if n == 0 {
        return Err(VsmError::NoQueries);
    }

    let mut read_block = |what: &str| -> Result<Vec<Vec<String>>> {
        (0..n)
            .map(|i| {
                lines
                    .next()
                    .map(|l| l.split_whitespace().map(str::to_string).collect())
                    .ok_or_else(|| VsmError::malformed(format!("expected {n} {what} lines, found {i}")))
            })
            .collect()
    };
    let ideal = read_block("ideal")?;
    let system = read_block("system")?;

    Ok(ideal
        .into_iter()
        .zip(system)
        .map(|(ideal, system)| QueryJudgment { ideal, system })
        .collect())
}
