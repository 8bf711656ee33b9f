use profig_logs::{Phase, RunRecord};

use crate::error::StatsError;

/// The four phases shown in the per-version breakdown, in stacking order
/// (bottom to top). init and final are one-off costs and stay out of the
/// relative comparison.
pub const STACK_PHASES: [Phase; 4] = [Phase::Wrap, Phase::Step, Phase::Swap, Phase::Gif];

/// One version's relative time shares, summing to 1.0.
#[derive(Debug, Clone)]
pub struct ShareRow {
    pub label: String,
    /// Fraction of the four-phase sum, indexed like [`STACK_PHASES`].
    pub shares: [f64; 4],
}

/// Replaces absolute durations with each phase's fraction of the four-phase
/// sum, per record. Row order follows the input order.
pub fn normalize_shares(records: &[RunRecord]) -> Result<Vec<ShareRow>, StatsError> {
    records
        .iter()
        .map(|rec| {
            let values = STACK_PHASES.map(|p| rec.phase(p));
            let sum: f64 = values.iter().sum();

            if !sum.is_finite() || sum <= 0.0 {
                return Err(StatsError::DegenerateInput {
                    label: rec.label.clone(),
                });
            }

            Ok(ShareRow {
                label: rec.label.clone(),
                shares: values.map(|v| v / sum),
            })
        })
        .collect()
}
