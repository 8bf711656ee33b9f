use std::path::Path;

use anyhow::{Context as _, Result};
use plotters::prelude::*;
use profig_logs::Metric;
use profig_stats::ScalingRow;

use crate::chart::style::{self, SERIES};

/// Segments of the scaling stack, bottom to top. `init` is aggregated but
/// kept out of the stack: it is one-time setup cost, while the chart reads
/// as a per-step time breakdown.
const STACK: [Metric; 5] = [
    Metric::Final,
    Metric::Gif,
    Metric::Swap,
    Metric::Step,
    Metric::Wrap,
];

/// Metrics that get a mean ± std error bar, drawn at the cumulative height
/// of their segment.
const ERROR_BARS: [Metric; 3] = [Metric::Step, Metric::Gif, Metric::Final];

const WIDTH: u32 = 900;
const HEIGHT: u32 = 600;
const LEGEND_WIDTH: u32 = 110;

/// One stacked bar of mean phase times per thread count, with error bars
/// over the repeated runs.
pub fn render(rows: &[ScalingRow], out: &Path) -> Result<()> {
    let root = BitMapBackend::new(out, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;
    let (plot, legend) = root.split_horizontally(WIDTH - LEGEND_WIDTH);

    let y_max = rows.iter().map(bar_ceiling).fold(f64::MIN, f64::max);
    let y_max = if y_max.is_finite() && y_max > 0.0 {
        y_max * 1.05
    } else {
        1.0
    };

    let mut chart = ChartBuilder::on(&plot)
        .caption("Time spent per number of threads", ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(56)
        .build_cartesian_2d((0usize..rows.len()).into_segmented(), 0.0..y_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(rows.len())
        .x_label_formatter(&|coord| match coord {
            SegmentValue::CenterOf(i) => rows.get(*i).map(|r| r.label.clone()).unwrap_or_default(),
            _ => String::new(),
        })
        .x_desc("Number of threads")
        .y_desc("Time spent (s)")
        .draw()?;

    for (i, row) in rows.iter().enumerate() {
        let mut bottom = 0.0;
        for (slot, metric) in STACK.into_iter().enumerate() {
            let top = bottom + row.metric(metric).mean;
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(i), bottom),
                    (SegmentValue::Exact(i + 1), top),
                ],
                SERIES[slot].filled(),
            );
            bar.set_margin(0, 0, 10, 10);
            chart.draw_series(std::iter::once(bar))?;
            bottom = top;
        }

        for (metric, top) in segment_tops(row) {
            if !ERROR_BARS.contains(&metric) {
                continue;
            }
            let std = row.metric(metric).std;
            chart.draw_series(std::iter::once(ErrorBar::new_vertical(
                SegmentValue::CenterOf(i),
                top - std,
                top,
                top + std,
                BLACK.stroke_width(1),
                6,
            )))?;
        }
    }

    let entries: Vec<(String, RGBColor)> = STACK
        .iter()
        .enumerate()
        .map(|(slot, metric)| (metric.to_string(), SERIES[slot]))
        .collect();
    style::draw_legend(&legend, &entries)?;

    root.present()
        .with_context(|| format!("write figure '{}'", out.display()))?;
    Ok(())
}

/// Cumulative stack height after each segment, bottom to top.
fn segment_tops(row: &ScalingRow) -> Vec<(Metric, f64)> {
    let mut tops = Vec::with_capacity(STACK.len());
    let mut acc = 0.0;
    for metric in STACK {
        acc += row.metric(metric).mean;
        tops.push((metric, acc));
    }
    tops
}

/// Highest point a row can reach, error bars included.
fn bar_ceiling(row: &ScalingRow) -> f64 {
    segment_tops(row)
        .into_iter()
        .map(|(metric, top)| {
            if ERROR_BARS.contains(&metric) {
                top + row.metric(metric).std
            } else {
                top
            }
        })
        .fold(f64::MIN, f64::max)
}
