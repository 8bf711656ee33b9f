use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context as _, Result};

/// `<figures_dir>/<results_folder>_<labels joined with '-'>.png`, creating
/// the figures directory if needed.
pub fn figure_path(figures_dir: &Path, results_folder: &str, labels: &[String]) -> Result<PathBuf> {
    std::fs::create_dir_all(figures_dir)
        .with_context(|| format!("create figures dir '{}'", figures_dir.display()))?;

    let name = format!("{results_folder}_{}.png", labels.join("-"));
    Ok(figures_dir.join(name))
}

/// Best-effort: spawn the platform image viewer, detached. The figure is
/// already on disk, so a missing viewer never fails the run.
pub fn open_viewer(path: &Path) {
    let mut cmd = viewer_command(path);
    if let Err(err) = cmd.spawn() {
        eprintln!("could not open image viewer: {err}");
    }
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(path);
    cmd
}

#[cfg(all(unix, not(target_os = "macos")))]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}
