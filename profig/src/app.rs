use anyhow::anyhow;
use profig_logs::{LayoutVersion, ResultsDir, comparison_layout, scaling_layout};
use profig_stats::{normalize_shares, reduce_runs};

use crate::chart;
use crate::cli::{BarplotArgs, Cli, Command, ScalingArgs};
use crate::figure;
use crate::report;
use crate::run_error::RunError;

pub fn run(cli: Cli) -> Result<(), RunError> {
    match cli.command {
        Command::Barplot(args) => barplot(args),
        Command::Scaling(args) => scaling(args),
    }
}

fn barplot(args: BarplotArgs) -> Result<(), RunError> {
    let dir = ResultsDir::open(&args.common.results_root, &args.results_folder)?;
    dir.ensure_labels(args.versions.iter().map(String::as_str))?;

    let layout = comparison_layout();
    let mut records = Vec::with_capacity(args.versions.len());
    for version in &args.versions {
        records.push(dir.load_first(version, &layout)?);
    }

    let rows = normalize_shares(&records)?;
    report::print_share_table(&rows);

    let out = figure::figure_path(&args.common.figures_dir, &args.results_folder, &args.versions)
        .map_err(RunError::RuntimeError)?;
    chart::comparison::render(&rows, &out).map_err(RunError::RuntimeError)?;
    println!("wrote {}", out.display());

    if args.common.open {
        figure::open_viewer(&out);
    }
    Ok(())
}

fn scaling(args: ScalingArgs) -> Result<(), RunError> {
    for label in &args.threads {
        if !label.parse::<u64>().is_ok_and(|n| n >= 1) {
            return Err(RunError::InvalidInput(anyhow!(
                "invalid thread count '{label}' (expected a positive integer)"
            )));
        }
    }

    let dir = ResultsDir::open(&args.common.results_root, &args.results_folder)?;
    dir.ensure_labels(args.threads.iter().map(String::as_str))?;

    let version = match &args.app_version {
        Some(v) => LayoutVersion::from_version_str(v)?,
        None => LayoutVersion::from_folder_name(&args.results_folder)?,
    };

    let layout = scaling_layout(version);
    let mut groups = Vec::with_capacity(args.threads.len());
    for label in &args.threads {
        groups.push((label.clone(), dir.load_runs(label, &layout)?));
    }

    let rows = reduce_runs(&groups)?;
    report::print_scaling_table(&rows);

    let out = figure::figure_path(&args.common.figures_dir, &args.results_folder, &args.threads)
        .map_err(RunError::RuntimeError)?;
    chart::scaling::render(&rows, &out).map_err(RunError::RuntimeError)?;
    println!("wrote {}", out.display());

    if args.common.open {
        figure::open_viewer(&out);
    }
    Ok(())
}
