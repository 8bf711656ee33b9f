use crate::error::LogError;

/// Position of one numeric field: 0-based line index plus a half-open byte
/// column range on that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub line: usize,
    pub col_start: usize,
    pub col_end: usize,
}

impl FieldSpec {
    #[must_use]
    pub const fn new(line: usize, col_start: usize, col_end: usize) -> Self {
        Self {
            line,
            col_start,
            col_end,
        }
    }
}

/// Where every field of one log flavour lives. The two pipelines read two
/// independently specified fixed layouts; nothing in the log itself declares
/// which one applies.
#[derive(Debug, Clone, Copy)]
pub struct LogLayout {
    /// init, wrap, step, swap, gif, final — in [`crate::Phase::ALL`] order.
    pub phases: [FieldSpec; 6],
    /// The comparison logs carry no total field.
    pub total: Option<FieldSpec>,
    pub throughput: FieldSpec,
}

/// Which summary-line placement the producing app uses.
///
/// From 6.0 on, the apps print an extra latency line between the phase table
/// and the summary, shifting total and throughput down by one line. 7.0 has
/// no pthreads but hides latency the same way and follows the shifted
/// placement too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutVersion {
    PreV6,
    V6Plus,
}

impl LayoutVersion {
    /// Reads the leading major number of a version string such as `5.1`.
    pub fn from_version_str(version: &str) -> Result<Self, LogError> {
        let digits: &str = {
            let end = version
                .char_indices()
                .find(|(_, ch)| !ch.is_ascii_digit())
                .map_or(version.len(), |(idx, _)| idx);
            &version[..end]
        };

        let major: u32 = digits
            .parse()
            .map_err(|_| LogError::InvalidVersion(version.to_string()))?;

        if major >= 6 {
            Ok(Self::V6Plus)
        } else {
            Ok(Self::PreV6)
        }
    }

    /// Reads the version component embedded in a results-folder name, by
    /// convention `<app>_<version>_<variant>` (e.g. `scaling_5.1_mmap`).
    pub fn from_folder_name(folder: &str) -> Result<Self, LogError> {
        let start = folder
            .char_indices()
            .find(|(_, ch)| ch.is_ascii_digit())
            .map(|(idx, _)| idx)
            .ok_or_else(|| LogError::InvalidVersion(folder.to_string()))?;

        Self::from_version_str(&folder[start..])
    }
}

/// Layout read by the per-version comparison pipeline.
#[must_use]
pub fn comparison_layout() -> LogLayout {
    LogLayout {
        phases: [
            FieldSpec::new(1, 11, 16),
            FieldSpec::new(2, 11, 16),
            FieldSpec::new(3, 11, 16),
            FieldSpec::new(4, 11, 16),
            FieldSpec::new(5, 11, 16),
            FieldSpec::new(6, 11, 16),
        ],
        total: None,
        throughput: FieldSpec::new(10, 12, 18),
    }
}

/// Layout read by the thread-scaling pipeline. The phase columns sit one
/// character further right than the comparison layout's, and the summary
/// lines move with the app version.
#[must_use]
pub fn scaling_layout(version: LayoutVersion) -> LogLayout {
    let (total_line, throughput_line) = match version {
        LayoutVersion::PreV6 => (8, 10),
        LayoutVersion::V6Plus => (9, 11),
    };

    LogLayout {
        phases: [
            FieldSpec::new(1, 12, 17),
            FieldSpec::new(2, 12, 17),
            FieldSpec::new(3, 12, 17),
            FieldSpec::new(4, 12, 17),
            FieldSpec::new(5, 12, 17),
            FieldSpec::new(6, 12, 17),
        ],
        total: Some(FieldSpec::new(total_line, 11, 16)),
        throughput: FieldSpec::new(throughput_line, 12, 18),
    }
}
