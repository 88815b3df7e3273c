use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use vsm_core::corpus::read_text;
use vsm_core::eval::{
    average, interpolate, parse_judgments, precision_recall_points, InterpolatedCurve,
    PrecisionRecallPoint,
};
use vsm_core::persist::{render_mean_precision, write_artifacts, OutputPaths};

#[derive(Debug, Clone)]
pub struct EvalOptions {
    pub output_dir: PathBuf,
    /// Optional JSON dump of every query's points and curve.
    pub curves: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct QueryReport {
    pub query: usize,
    pub relevant: usize,
    pub retrieved: usize,
    pub points: Vec<PrecisionRecallPoint>,
    pub interpolated: InterpolatedCurve,
}

#[derive(Debug, Serialize)]
pub struct EvaluationReport {
    pub recall_levels: Vec<f64>,
    pub queries: Vec<QueryReport>,
    pub mean: InterpolatedCurve,
}

/// Evaluate every query of a judgment file's contents.
pub fn evaluate(input: &str) -> Result<EvaluationReport> {
    let judgments = parse_judgments(input)?;
    let mut queries = Vec::with_capacity(judgments.len());
    for (i, judgment) in judgments.iter().enumerate() {
        if judgment.ideal.is_empty() {
            tracing::warn!(query = i, "query has no relevant documents; recall fixed at 0");
        }
        let points = precision_recall_points(&judgment.ideal, &judgment.system);
        let interpolated = interpolate(&points);
        queries.push(QueryReport {
            query: i,
            relevant: judgment.ideal.len(),
            retrieved: judgment.system.len(),
            points,
            interpolated,
        });
    }
    let curves: Vec<InterpolatedCurve> = queries.iter().map(|q| q.interpolated).collect();
    let mean = average(&curves)?;
    tracing::info!(num_queries = queries.len(), "evaluation complete");
    Ok(EvaluationReport {
        recall_levels: vsm_core::eval::recall_levels().to_vec(),
        queries,
        mean,
    })
}

/// Read `input`, evaluate it, then write media.txt (and the curves JSON if requested).
pub fn run(input: &Path, opts: &EvalOptions) -> Result<EvaluationReport> {
    let text = read_text(input).with_context(|| format!("reading judgments {}", input.display()))?;
    let report = evaluate(&text).with_context(|| format!("evaluating {}", input.display()))?;

    let mut artifacts = vec![(
        OutputPaths::new(&opts.output_dir).mean_precision(),
        render_mean_precision(&report.mean),
    )];
    if let Some(path) = &opts.curves {
        artifacts.push((path.clone(), serde_json::to_string_pretty(&report)?));
    }
    write_artifacts(&artifacts)
        .with_context(|| format!("writing artifacts to {}", opts.output_dir.display()))?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vsm_core::VsmError;

    #[test]
    fn reports_every_query() {
        let report = evaluate("2\nA B C\nA\nB X A C\nA\n").unwrap();
        assert_eq!(report.queries.len(), 2);
        assert_eq!(report.queries[0].points.len(), 3);
        assert_eq!(report.queries[1].interpolated.precision, [1.0; 11]);
        assert!((report.mean.at(10) - 0.875).abs() < 1e-12);
    }

    #[test]
    fn empty_ideal_contributes_zeros() {
        let report = evaluate("2\n\nA\nX Y\nA\n").unwrap();
        assert_eq!(report.queries[0].interpolated.precision, [0.0; 11]);
        assert!((report.mean.at(0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn zero_queries_is_an_error() {
        let err = evaluate("0\n").unwrap_err();
        assert!(matches!(err.downcast_ref::<VsmError>(), Some(VsmError::NoQueries)));
    }
}
