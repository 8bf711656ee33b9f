#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

use anyhow::Context as _;

pub struct Fixture {
    root: tempfile::TempDir,
}

impl Fixture {
    pub fn new() -> anyhow::Result<Self> {
        let root = tempfile::tempdir().context("create tempdir")?;
        Ok(Self { root })
    }

    pub fn results_root(&self) -> PathBuf {
        self.root.path().join("results")
    }

    pub fn figures_dir(&self) -> PathBuf {
        self.root.path().join("figures")
    }

    pub fn write_log(&self, folder: &str, name: &str, content: &str) -> anyhow::Result<()> {
        let dir = self.results_root().join(folder);
        std::fs::create_dir_all(&dir).context("create results folder")?;
        std::fs::write(dir.join(name), content).with_context(|| format!("write log '{name}'"))
    }

    /// Runs the binary with `--results-root`/`--figures-dir` pointed at this
    /// fixture.
    pub fn run(&self, args: &[&str]) -> anyhow::Result<Output> {
        let results_root = self.results_root();
        let figures_dir = self.figures_dir();

        Command::new(env!("CARGO_BIN_EXE_profig"))
            .args(args)
            .arg("--results-root")
            .arg(&results_root)
            .arg("--figures-dir")
            .arg(&figures_dir)
            .output()
            .context("run profig binary")
    }
}

pub fn status_code(status: std::process::ExitStatus) -> i32 {
    status.code().unwrap_or(-1)
}

pub fn stderr_of(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).to_string()
}

/// A comparison-pipeline log: phase values in cols 11..16 of lines 2-7,
/// throughput in cols 12..18 of line 11. Values must stay below 10.0 to fit
/// the fixed-width field.
pub fn comparison_log(phases: [f64; 6], throughput: u64) -> String {
    let [init, wrap, step, swap, gif, fin] = phases;
    format!(
        "Total time spent in each part:\n\
         \x20 init : {init:7.3} seconds (  0.00%)\n\
         \x20 wrap : {wrap:7.3} seconds (  0.00%)\n\
         \x20 step : {step:7.3} seconds (  0.00%)\n\
         \x20 swap : {swap:7.3} seconds (  0.00%)\n\
         \x20 gif  : {gif:7.3} seconds (  0.00%)\n\
         \x20 final: {fin:7.3} seconds (  0.00%)\n\
         \x20 -----------------------------------\n\
         \x20 total: {total:7.3} seconds (100.00%)\n\
         \n\
         Throughput: {throughput} pixels/second\n",
        total = phases.iter().sum::<f64>(),
    )
}

/// A scaling-pipeline log: phase values in cols 12..17 of lines 2-7; total
/// and throughput shift one line down from app version 6 on.
pub fn scaling_log(phases: [f64; 6], throughput: u64, v6_plus: bool) -> String {
    let [init, wrap, step, swap, gif, fin] = phases;
    let total: f64 = phases.iter().sum();

    let mut log = format!(
        "Total time spent in each part:\n\
         \x20 init  : {init:7.3} seconds (  0.00%)\n\
         \x20 wrap  : {wrap:7.3} seconds (  0.00%)\n\
         \x20 step  : {step:7.3} seconds (  0.00%)\n\
         \x20 swap  : {swap:7.3} seconds (  0.00%)\n\
         \x20 gif   : {gif:7.3} seconds (  0.00%)\n\
         \x20 final : {fin:7.3} seconds (  0.00%)\n\
         \x20 -----------------------------------\n",
    );

    if v6_plus {
        log.push_str("  hide  :   0.100 seconds (  0.00%)\n");
    }
    log.push_str(&format!(
        "  total: {total:7.3} seconds (100.00%)\n\nThroughput: {throughput} pixels/second\n"
    ));

    log
}
