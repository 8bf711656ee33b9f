use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "profig",
    author,
    version,
    about = "Render stacked bar charts from simulator profiling logs",
    long_about = "profig reads the fixed-format timing logs the simulator builds write per run\n(one file per run, named `<label>_<suffix>` under `results/<folder>/`) and\nrenders a stacked bar chart to `figures/`.\n\n`barplot` compares versions by normalized per-phase time share; `scaling`\nplots mean phase times per thread count with error bars over repeated runs.",
    after_help = "Examples:\n  profig barplot gifs_1000steps 3.1 4.0 5.1\n  profig scaling scaling_5.1_mmap 1 2 4 8 16\n  profig scaling scaling_mmap 1 2 4 8 --app-version 6.2 --open"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare versions: one stacked bar of normalized phase shares per version
    Barplot(BarplotArgs),

    /// Thread scaling: one stacked bar of mean phase times per thread count
    Scaling(ScalingArgs),
}

#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Root directory holding result folders
    #[arg(long, env = "PROFIG_RESULTS_ROOT", default_value = "results")]
    pub results_root: PathBuf,

    /// Directory the figure is written to (created if missing)
    #[arg(long, env = "PROFIG_FIGURES_DIR", default_value = "figures")]
    pub figures_dir: PathBuf,

    /// Open the rendered figure in the platform image viewer
    #[arg(long)]
    pub open: bool,
}

#[derive(Debug, Args)]
pub struct BarplotArgs {
    /// Result folder under the results root
    pub results_folder: String,

    /// Version labels; result files are named `<version>_<suffix>`
    #[arg(required = true)]
    pub versions: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ScalingArgs {
    /// Result folder under the results root, by convention
    /// `<app>_<version>_<variant>`
    pub results_folder: String,

    /// Thread-count labels; result files are named `<threads>_<suffix>`
    #[arg(required = true)]
    pub threads: Vec<String>,

    /// Version of the app that produced the logs (defaults to the version
    /// component embedded in the results folder name)
    #[arg(long, env = "PROFIG_APP_VERSION")]
    pub app_version: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}
