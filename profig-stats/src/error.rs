use profig_logs::Metric;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("all stacked phases are zero for '{label}'; nothing to normalize")]
    DegenerateInput { label: String },

    #[error("no usable runs for '{label}' (every result file was empty)")]
    EmptyGroup { label: String },

    #[error("run for '{label}' carries no {metric} value")]
    MissingMetric { label: String, metric: Metric },
}
