use profig_logs::LogError;
use profig_stats::StatsError;

use crate::exit_codes::ExitCode;

#[derive(Debug)]
pub enum RunError {
    MissingInput(anyhow::Error),
    InvalidInput(anyhow::Error),
    RuntimeError(anyhow::Error),
}

impl RunError {
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::MissingInput(_) => ExitCode::MissingInput,
            Self::InvalidInput(_) => ExitCode::InvalidInput,
            Self::RuntimeError(_) => ExitCode::RuntimeError,
        }
    }

    #[must_use]
    pub fn anyhow(&self) -> &anyhow::Error {
        match self {
            Self::MissingInput(e) | Self::InvalidInput(e) | Self::RuntimeError(e) => e,
        }
    }
}

impl From<LogError> for RunError {
    fn from(err: LogError) -> Self {
        match err {
            LogError::MissingDirectory(_) | LogError::MissingLabel { .. } => {
                Self::MissingInput(err.into())
            }
            LogError::InvalidVersion(_) => Self::InvalidInput(err.into()),
            LogError::MalformedLog { .. } | LogError::Io { .. } => Self::RuntimeError(err.into()),
        }
    }
}

impl From<StatsError> for RunError {
    fn from(err: StatsError) -> Self {
        Self::RuntimeError(err.into())
    }
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingInput(e) | Self::InvalidInput(e) | Self::RuntimeError(e) => {
                write!(f, "{e:#}")
            }
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.anyhow().as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn log_errors_map_to_their_exit_codes() {
        let missing = RunError::from(LogError::MissingDirectory(PathBuf::from("results/x")));
        assert_eq!(missing.exit_code(), ExitCode::MissingInput);

        let missing_label = RunError::from(LogError::MissingLabel {
            label: "8".to_string(),
            dir: PathBuf::from("results/x"),
        });
        assert_eq!(missing_label.exit_code(), ExitCode::MissingInput);

        let bad_version = RunError::from(LogError::InvalidVersion("mmap".to_string()));
        assert_eq!(bad_version.exit_code(), ExitCode::InvalidInput);
    }

    #[test]
    fn stats_errors_are_runtime_failures() {
        let degenerate = RunError::from(StatsError::DegenerateInput {
            label: "5.1".to_string(),
        });
        assert_eq!(degenerate.exit_code(), ExitCode::RuntimeError);
    }
}
