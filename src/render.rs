use std::path::Path;

use anyhow::Result;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

const DIAGRAM_SIZE: (u32, u32) = (600, 600);

/// Writes a grayscale heat map of `data` as an SVG, one cell per element,
/// with the value (rounded for display) drawn centered in each cell. Rows
/// render top to bottom; no axes or mesh.
pub fn save_grid<R: AsRef<[f64]>>(data: &[R], title: &str, path: &Path) -> Result<()> {
    let rows = data.len();
    let cols = data.first().map_or(0, |row| row.as_ref().len());

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for row in data {
        for &value in row.as_ref() {
            min = min.min(value);
            max = max.max(value);
        }
    }
    let root = SVGBackend::new(path, DIAGRAM_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(30)
        .caption(title, ("sans-serif", 30))
        .build_cartesian_2d(0.0..cols as f64, 0.0..rows as f64)?;

    let mut cells = Vec::with_capacity(rows * cols);
    let mut labels = Vec::with_capacity(rows * cols);
    let label_style = ("sans-serif", 20)
        .into_font()
        .color(&RED)
        .pos(Pos::new(HPos::Center, VPos::Center));

    for (i, row) in data.iter().enumerate() {
        for (j, &value) in row.as_ref().iter().enumerate() {
            // Constant matrices render as a uniform mid shade.
            let shade = if max > min {
                (value - min) / (max - min)
            } else {
                0.5
            };
            // GREYS runs light to dark; flip it so the minimum renders black.
            let color = colorous::GREYS.eval_continuous(1.0 - shade);

            let (left, top) = (j as f64, (rows - i) as f64);
            cells.push(Rectangle::new(
                [(left, top), (left + 1.0, top - 1.0)],
                RGBColor(color.r, color.g, color.b).filled(),
            ));
            labels.push(Text::new(
                format!("{:.0}", value),
                (left + 0.5, top - 0.5),
                label_style.clone(),
            ));
        }
    }

    chart.draw_series(cells)?;
    chart.draw_series(labels)?;
    root.present()?;

    Ok(())
}
