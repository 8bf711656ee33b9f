use profig_logs::{Metric, RunRecord};

use crate::error::StatsError;
use crate::running::RunningStats;

#[derive(Debug, Clone, Copy, Default)]
pub struct MetricStats {
    pub mean: f64,
    pub std: f64,
}

/// Mean and sample standard deviation for every metric of one label's
/// repeated runs.
#[derive(Debug, Clone)]
pub struct ScalingRow {
    pub label: String,
    pub runs: u64,
    stats: [MetricStats; 8],
}

impl ScalingRow {
    #[must_use]
    pub fn metric(&self, metric: Metric) -> MetricStats {
        self.stats[metric.index()]
    }
}

/// Reduces repeated runs per label. `groups` supplies labels in output
/// order; each row corresponds 1:1 to one input group.
pub fn reduce_runs(groups: &[(String, Vec<RunRecord>)]) -> Result<Vec<ScalingRow>, StatsError> {
    groups
        .iter()
        .map(|(label, records)| {
            if records.is_empty() {
                return Err(StatsError::EmptyGroup {
                    label: label.clone(),
                });
            }

            let mut acc = [RunningStats::default(); 8];
            for rec in records {
                for metric in Metric::ALL {
                    let value = rec.metric(metric).ok_or_else(|| StatsError::MissingMetric {
                        label: label.clone(),
                        metric,
                    })?;
                    acc[metric.index()].push(value);
                }
            }

            Ok(ScalingRow {
                label: label.clone(),
                runs: records.len() as u64,
                stats: acc.map(|a| MetricStats {
                    mean: a.mean(),
                    std: a.stdev(),
                }),
            })
        })
        .collect()
}
