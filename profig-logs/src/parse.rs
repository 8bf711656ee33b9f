use std::path::Path;

use crate::error::LogError;
use crate::layout::{FieldSpec, LogLayout};
use crate::record::{Metric, Phase, RunRecord};

/// Parses one log according to `layout`. `path` is only used for
/// diagnostics.
pub fn parse_log(
    label: &str,
    text: &str,
    layout: &LogLayout,
    path: &Path,
) -> Result<RunRecord, LogError> {
    let lines: Vec<&str> = text.lines().collect();

    let mut phases = [0.0f64; 6];
    for (phase, spec) in Phase::ALL.into_iter().zip(layout.phases) {
        phases[phase.index()] = field(&lines, spec, Metric::from(phase), path)?;
    }

    let total = match layout.total {
        Some(spec) => Some(field(&lines, spec, Metric::Total, path)?),
        None => None,
    };
    let throughput = field(&lines, layout.throughput, Metric::Throughput, path)?;

    Ok(RunRecord {
        label: label.to_string(),
        phases,
        total,
        throughput,
    })
}

fn field(lines: &[&str], spec: FieldSpec, metric: Metric, path: &Path) -> Result<f64, LogError> {
    let malformed = |reason: String| LogError::MalformedLog {
        path: path.to_path_buf(),
        field: metric,
        line: spec.line + 1,
        col_start: spec.col_start,
        col_end: spec.col_end,
        reason,
    };

    let line = lines
        .get(spec.line)
        .ok_or_else(|| malformed(format!("log has only {} lines", lines.len())))?;

    // Producers pad numbers to a fixed width but drop trailing spaces, so a
    // line may end inside the column range.
    let end = spec.col_end.min(line.len());
    if spec.col_start >= end {
        return Err(malformed(format!("line has only {} columns", line.len())));
    }

    let raw = line
        .get(spec.col_start..end)
        .ok_or_else(|| malformed("column range splits a non-ASCII character".to_string()))?;

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(malformed("field is blank".to_string()));
    }

    trimmed
        .parse::<f64>()
        .map_err(|_| malformed(format!("'{trimmed}' is not a number")))
}
