use std::path::Path;

use anyhow::{Context as _, Result};
use plotters::prelude::*;
use profig_stats::{STACK_PHASES, ShareRow};

use crate::chart::style::{self, SERIES};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;
const LEGEND_WIDTH: u32 = 100;

/// One stacked bar per version; segment heights are the normalized phase
/// shares, so every bar tops out at 1.0.
pub fn render(rows: &[ShareRow], out: &Path) -> Result<()> {
    let root = BitMapBackend::new(out, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;
    let (plot, legend) = root.split_horizontally(WIDTH - LEGEND_WIDTH);

    let mut chart = ChartBuilder::on(&plot)
        .caption("Relative time spent per version", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(36)
        .y_label_area_size(48)
        .build_cartesian_2d((0usize..rows.len()).into_segmented(), 0.0..1.05f64)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(rows.len())
        .x_label_formatter(&|coord| match coord {
            SegmentValue::CenterOf(i) => rows.get(*i).map(|r| r.label.clone()).unwrap_or_default(),
            _ => String::new(),
        })
        .x_desc("Version")
        .y_desc("Relative time spent")
        .draw()?;

    for (i, row) in rows.iter().enumerate() {
        let mut bottom = 0.0;
        for (slot, share) in row.shares.iter().enumerate() {
            let top = bottom + share;
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(i), bottom),
                    (SegmentValue::Exact(i + 1), top),
                ],
                SERIES[slot].filled(),
            );
            bar.set_margin(0, 0, 12, 12);
            chart.draw_series(std::iter::once(bar))?;
            bottom = top;
        }
    }

    let entries: Vec<(String, RGBColor)> = STACK_PHASES
        .iter()
        .enumerate()
        .map(|(slot, phase)| (phase.to_string(), SERIES[slot]))
        .collect();
    style::draw_legend(&legend, &entries)?;

    root.present()
        .with_context(|| format!("write figure '{}'", out.display()))?;
    Ok(())
}
