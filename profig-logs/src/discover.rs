use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LogError;
use crate::layout::LogLayout;
use crate::parse::parse_log;
use crate::record::RunRecord;

/// A validated `<results_root>/<folder>` directory.
#[derive(Debug, Clone)]
pub struct ResultsDir {
    dir: PathBuf,
}

impl ResultsDir {
    pub fn open(root: &Path, folder: &str) -> Result<Self, LogError> {
        let dir = root.join(folder);
        if !dir.is_dir() {
            return Err(LogError::MissingDirectory(dir));
        }
        Ok(Self { dir })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.dir
    }

    /// All files named `<label>_<suffix>`, sorted by file name so "first
    /// match" is deterministic across platforms.
    pub fn files_for_label(&self, label: &str) -> Result<Vec<PathBuf>, LogError> {
        let prefix = format!("{label}_");
        let entries = fs::read_dir(&self.dir).map_err(|source| LogError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| LogError::Io {
                path: self.dir.clone(),
                source,
            })?;

            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if name.starts_with(&prefix) && entry.path().is_file() {
                files.push(entry.path());
            }
        }

        files.sort();
        if files.is_empty() {
            return Err(LogError::MissingLabel {
                label: label.to_string(),
                dir: self.dir.clone(),
            });
        }
        Ok(files)
    }

    /// Preflight: every label must have at least one result file before
    /// anything is read or aggregated.
    pub fn ensure_labels<'a, I>(&self, labels: I) -> Result<(), LogError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        for label in labels {
            self.files_for_label(label)?;
        }
        Ok(())
    }

    /// Comparison pipeline: exactly one log per label, the first sorted
    /// match.
    pub fn load_first(&self, label: &str, layout: &LogLayout) -> Result<RunRecord, LogError> {
        let mut files = self.files_for_label(label)?;
        let path = files.remove(0);
        let text = read(&path)?;
        parse_log(label, &text, layout, &path)
    }

    /// Scaling pipeline: every matching log for the label. Zero-line files
    /// are skipped; aborted runs leave them behind.
    pub fn load_runs(&self, label: &str, layout: &LogLayout) -> Result<Vec<RunRecord>, LogError> {
        let mut records = Vec::new();
        for path in self.files_for_label(label)? {
            let text = read(&path)?;
            if text.lines().next().is_none() {
                continue;
            }
            records.push(parse_log(label, &text, layout, &path)?);
        }
        Ok(records)
    }
}

fn read(path: &Path) -> Result<String, LogError> {
    fs::read_to_string(path).map_err(|source| LogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LayoutVersion, scaling_layout};

    const SCALING_LOG: &str = "\
Total time spent in each part:
  init  :   0.040 seconds (  1.48%)
  wrap  :   0.010 seconds (  0.37%)
  step  :   2.000 seconds ( 74.07%)
  swap  :   0.020 seconds (  0.74%)
  gif   :   0.500 seconds ( 18.52%)
  final :   0.130 seconds (  4.81%)
  -----------------------------------
  total:   2.700 seconds (100.00%)

Throughput: 388361 pixels/second
";

    fn fixture_root(files: &[(&str, &str)]) -> tempfile::TempDir {
        let root = match tempfile::tempdir() {
            Ok(dir) => dir,
            Err(err) => panic!("create tempdir: {err}"),
        };
        let folder = root.path().join("bench");
        if let Err(err) = fs::create_dir(&folder) {
            panic!("create results folder: {err}");
        }
        for (name, content) in files {
            if let Err(err) = fs::write(folder.join(name), content) {
                panic!("write fixture '{name}': {err}");
            }
        }
        root
    }

    #[test]
    fn missing_results_folder_is_reported_before_any_read() {
        let root = fixture_root(&[]);
        match ResultsDir::open(root.path(), "nope") {
            Err(LogError::MissingDirectory(dir)) => {
                assert!(dir.ends_with("nope"));
            }
            other => panic!("expected MissingDirectory, got {other:?}"),
        }
    }

    #[test]
    fn label_matches_are_sorted_and_prefix_scoped() {
        let root = fixture_root(&[
            ("4_run2", SCALING_LOG),
            ("4_run1", SCALING_LOG),
            ("16_run1", SCALING_LOG),
        ]);
        let dir = match ResultsDir::open(root.path(), "bench") {
            Ok(dir) => dir,
            Err(err) => panic!("open failed: {err}"),
        };

        let files = match dir.files_for_label("4") {
            Ok(files) => files,
            Err(err) => panic!("files_for_label failed: {err}"),
        };

        // "16_run1" must not leak into label "4"; order is by file name.
        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, vec!["4_run1", "4_run2"]);
    }

    #[test]
    fn missing_label_names_the_label_even_when_others_exist() {
        let root = fixture_root(&[("4_run1", SCALING_LOG)]);
        let dir = match ResultsDir::open(root.path(), "bench") {
            Ok(dir) => dir,
            Err(err) => panic!("open failed: {err}"),
        };

        match dir.ensure_labels(["4", "8"]) {
            Err(LogError::MissingLabel { label, .. }) => assert_eq!(label, "8"),
            other => panic!("expected MissingLabel, got {other:?}"),
        }
    }

    #[test]
    fn load_runs_skips_zero_line_files() {
        let root = fixture_root(&[("4_run1", SCALING_LOG), ("4_run2", "")]);
        let dir = match ResultsDir::open(root.path(), "bench") {
            Ok(dir) => dir,
            Err(err) => panic!("open failed: {err}"),
        };

        let layout = scaling_layout(LayoutVersion::PreV6);
        let records = match dir.load_runs("4", &layout) {
            Ok(records) => records,
            Err(err) => panic!("load_runs failed: {err}"),
        };
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].label, "4");
    }

    #[test]
    fn load_first_takes_the_first_sorted_match() {
        let broken = SCALING_LOG.replace("  2.000", "  x.xxx");
        let root = fixture_root(&[("4_b", broken.as_str()), ("4_a", SCALING_LOG)]);
        let dir = match ResultsDir::open(root.path(), "bench") {
            Ok(dir) => dir,
            Err(err) => panic!("open failed: {err}"),
        };

        // "4_a" sorts first and is valid; "4_b" would fail to parse.
        let layout = scaling_layout(LayoutVersion::PreV6);
        if let Err(err) = dir.load_first("4", &layout) {
            panic!("load_first failed: {err}");
        }
    }
}
