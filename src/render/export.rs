//! Chart export: draw a [`TimelineFigure`] with plotters and serialize it.
//!
//! PNG draws straight into the bitmap backend at `scale`× resolution. SVG is
//! rendered into a string; PDF converts that string, and HTML wraps it into a
//! standalone page (scale is ignored for HTML, matching the export contract).

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::ValueEnum;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::ChartError;

use super::figure::TimelineFigure;
use super::html;
use super::theme::BRANDING_TEXT;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    Png,
    Svg,
    Pdf,
    #[default]
    Html,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Svg => "svg",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Html => "html",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Render `figure` and write `<dir>/<base>.<ext>`.
///
/// The directory is created if needed; an existing file is overwritten.
pub fn write(
    figure: &TimelineFigure,
    dir: &Path,
    base: &str,
    format: ExportFormat,
    scale: u32,
) -> Result<PathBuf, ChartError> {
    std::fs::create_dir_all(dir).map_err(|e| {
        ChartError::Export(format!("cannot create output directory {}: {e}", dir.display()))
    })?;
    let path = dir.join(format!("{base}.{}", format.extension()));
    let scale = scale.max(1);

    match format {
        ExportFormat::Png => write_png(figure, &path, scale)?,
        ExportFormat::Svg => {
            let svg = render_svg(figure, scale)?;
            write_file(&path, svg.as_bytes())?;
        }
        ExportFormat::Pdf => {
            let svg = render_svg(figure, scale)?;
            write_pdf(&svg, &path)?;
        }
        ExportFormat::Html => {
            let svg = render_svg(figure, 1)?;
            let page = html::page(figure, &svg);
            write_file(&path, page.as_bytes())?;
        }
    }

    Ok(path)
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), ChartError> {
    std::fs::write(path, bytes)
        .map_err(|e| ChartError::Export(format!("cannot write {}: {e}", path.display())))
}

fn write_png(figure: &TimelineFigure, path: &Path, scale: u32) -> Result<(), ChartError> {
    super::fonts::ensure_registered();
    let size = (figure.config.width * scale, figure.config.height * scale);
    let root = BitMapBackend::new(path, size).into_drawing_area();
    draw(&root, figure, scale as f64)?;
    root.present()
        .map_err(|e| ChartError::Export(format!("cannot write {}: {e}", path.display())))
}

fn render_svg(figure: &TimelineFigure, scale: u32) -> Result<String, ChartError> {
    super::fonts::ensure_registered();
    let mut buffer = String::new();
    {
        let size = (figure.config.width * scale, figure.config.height * scale);
        let root = SVGBackend::with_string(&mut buffer, size).into_drawing_area();
        draw(&root, figure, scale as f64)?;
        root.present()
            .map_err(|e| ChartError::Render(e.to_string()))?;
    }
    Ok(buffer)
}

/// Draw the timeline onto any backend: interval bars grouped into lanes on
/// the vertical axis (top-to-bottom in document order), a date axis below,
/// and a legend keyed by the color field.
fn draw<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    figure: &TimelineFigure,
    scale: f64,
) -> Result<(), ChartError> {
    let err = |e: DrawingAreaErrorKind<DB::ErrorType>| ChartError::Render(e.to_string());

    root.fill(&WHITE).map_err(err)?;

    let lane_count = figure.lanes.len();
    let mut chart = ChartBuilder::on(root)
        .caption(&figure.title, ("sans-serif", 22.0 * scale).into_font())
        .margin((12.0 * scale) as u32)
        .x_label_area_size((32.0 * scale) as u32)
        .y_label_area_size((8.0 * scale) as u32)
        .build_cartesian_2d(figure.x_min..figure.x_max, 0f64..lane_count as f64)
        .map_err(err)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(0)
        .x_labels(8)
        .x_label_formatter(&|d: &NaiveDate| d.format("%b %d, %Y").to_string())
        .label_style(("sans-serif", 12.0 * scale).into_font())
        .light_line_style(&RGBColor(232, 234, 240))
        .draw()
        .map_err(err)?;

    // One series per legend key so the legend picks up the right swatches.
    for (key, color) in &figure.legend {
        let style = color.filled();
        let series = chart
            .draw_series(
                figure
                    .bars
                    .iter()
                    .filter(|bar| &bar.legend == key)
                    .map(|bar| {
                        let (top, bottom) = lane_span(lane_count, bar.lane);
                        Rectangle::new([(bar.start, bottom), (bar.finish, top)], style)
                    }),
            )
            .map_err(err)?;

        let swatch = *color;
        series.label(key.as_str()).legend(move |(x, y)| {
            Rectangle::new([(x, y - 5), (x + 14, y + 5)], swatch.filled())
        });
    }

    // Task labels sit at the left edge of their bar.
    let label_style = ("sans-serif", 11.0 * scale)
        .into_font()
        .color(&RGBColor(40, 44, 52))
        .pos(Pos::new(HPos::Left, VPos::Center));
    chart
        .draw_series(figure.bars.iter().map(|bar| {
            let (top, bottom) = lane_span(lane_count, bar.lane);
            Text::new(bar.label.clone(), (bar.start, (top + bottom) / 2.0), label_style.clone())
        }))
        .map_err(err)?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.85))
        .border_style(&RGBColor(200, 204, 212))
        .label_font(("sans-serif", 12.0 * scale).into_font())
        .draw()
        .map_err(err)?;

    // TODO: draw dependency arrows between linked bars; the references are
    // already on the rows, only the arrow layout is missing.

    if figure.branding {
        let (width, height) = root.dim_in_pixel();
        let style = ("sans-serif", 11.0 * scale)
            .into_font()
            .color(&RGBColor(150, 153, 160))
            .pos(Pos::new(HPos::Right, VPos::Bottom));
        root.draw(&Text::new(
            BRANDING_TEXT,
            (
                width as i32 - (10.0 * scale) as i32,
                height as i32 - (6.0 * scale) as i32,
            ),
            style,
        ))
        .map_err(err)?;
    }

    Ok(())
}

/// Vertical extent of a lane, with an inset so bars don't touch. Lane 0 sits
/// at the top of the chart.
fn lane_span(lane_count: usize, lane: usize) -> (f64, f64) {
    let top = (lane_count - lane) as f64 - 0.18;
    let bottom = (lane_count - lane - 1) as f64 + 0.18;
    (top, bottom)
}

#[cfg(feature = "pdf")]
fn write_pdf(svg: &str, path: &Path) -> Result<(), ChartError> {
    let mut options = svg2pdf::usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = svg2pdf::usvg::Tree::from_str(svg, &options)
        .map_err(|e| ChartError::Export(format!("pdf conversion failed: {e}")))?;
    let pdf = svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|e| ChartError::Export(format!("pdf conversion failed: {e}")))?;
    write_file(path, &pdf)
}

#[cfg(not(feature = "pdf"))]
fn write_pdf(_svg: &str, _path: &Path) -> Result<(), ChartError> {
    Err(ChartError::Export(
        "this build does not include PDF support (enable the `pdf` feature)".into(),
    ))
}
