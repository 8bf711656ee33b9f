/// One named duration recorded per run, in the order the log prints them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    Init,
    Wrap,
    Step,
    Swap,
    Gif,
    Final,
}

impl Phase {
    pub const ALL: [Phase; 6] = [
        Phase::Init,
        Phase::Wrap,
        Phase::Step,
        Phase::Swap,
        Phase::Gif,
        Phase::Final,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Everything a log reports: the six phases plus the run's total time and
/// throughput.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Metric {
    Init,
    Wrap,
    Step,
    Swap,
    Gif,
    Final,
    Total,
    Throughput,
}

impl Metric {
    pub const ALL: [Metric; 8] = [
        Metric::Init,
        Metric::Wrap,
        Metric::Step,
        Metric::Swap,
        Metric::Gif,
        Metric::Final,
        Metric::Total,
        Metric::Throughput,
    ];

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl From<Phase> for Metric {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Init => Metric::Init,
            Phase::Wrap => Metric::Wrap,
            Phase::Step => Metric::Step,
            Phase::Swap => Metric::Swap,
            Phase::Gif => Metric::Gif,
            Phase::Final => Metric::Final,
        }
    }
}

/// One parsed profiling log.
///
/// `total` is `None` for the comparison layout, which carries no total
/// field.
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    pub label: String,
    pub phases: [f64; 6],
    pub total: Option<f64>,
    pub throughput: f64,
}

impl RunRecord {
    #[must_use]
    pub fn phase(&self, phase: Phase) -> f64 {
        self.phases[phase.index()]
    }

    #[must_use]
    pub fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Init => Some(self.phase(Phase::Init)),
            Metric::Wrap => Some(self.phase(Phase::Wrap)),
            Metric::Step => Some(self.phase(Phase::Step)),
            Metric::Swap => Some(self.phase(Phase::Swap)),
            Metric::Gif => Some(self.phase(Phase::Gif)),
            Metric::Final => Some(self.phase(Phase::Final)),
            Metric::Total => self.total,
            Metric::Throughput => Some(self.throughput),
        }
    }
}
