use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

/// Segment colors, assigned in stacking order.
pub(crate) const SERIES: [RGBColor; 6] = [
    RGBColor(0x1f, 0x77, 0xb4),
    RGBColor(0xff, 0x7f, 0x0e),
    RGBColor(0x2c, 0xa0, 0x2c),
    RGBColor(0xd6, 0x27, 0x28),
    RGBColor(0x94, 0x67, 0xbd),
    RGBColor(0x8c, 0x56, 0x4b),
];

const SWATCH: i32 = 14;
const ROW_HEIGHT: i32 = 22;

/// Draws a legend in its own panel, vertically centered. Keeping the legend
/// out of the plot area means it never overlaps a tall bar.
pub(crate) fn draw_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    entries: &[(String, RGBColor)],
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    let (_, height) = area.dim_in_pixel();
    let x0 = 6i32;
    let mut y = (height as i32 - entries.len() as i32 * ROW_HEIGHT) / 2;

    for (name, color) in entries {
        area.draw(&Rectangle::new(
            [(x0, y), (x0 + SWATCH, y + SWATCH)],
            color.filled(),
        ))?;
        area.draw(&Text::new(
            name.clone(),
            (x0 + SWATCH + 6, y + 1),
            ("sans-serif", 15).into_font(),
        ))?;
        y += ROW_HEIGHT;
    }

    Ok(())
}
