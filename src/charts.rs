//! Launch-window charts rendered to PNG with plotters.

use std::fs;
use std::io;
use std::ops::Range;
use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontResult;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use solar_transfer::{LaunchWindow, date_label};
use thiserror::Error;
use tracing::{info, warn};

/// 8 × 4 inches at 150 dpi.
pub const CHART_SIZE: (u32, u32) = (1200, 600);

pub const DISTANCE_CHART_FILE: &str = "launch_windows.png";
pub const TRAVEL_TIME_CHART_FILE: &str = "travel_times.png";

const LINE_COLOR: RGBColor = RGBColor(31, 119, 180);
const GRID_COLOR: RGBColor = RGBColor(225, 225, 225);

/// Errors raised while rendering charts or animation frames.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create output directory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("drawing failed: {0}")]
    Drawing(String),
    #[error("no launch windows to plot")]
    NoData,
}

impl<E> From<DrawingAreaErrorKind<E>> for RenderError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        RenderError::Drawing(err.to_string())
    }
}

pub(crate) fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::SansSerif
    }
}

fn load_font(family: FontFamily<'static>) -> FontResult<()> {
    FontDesc::new(family, 12.0, FontStyle::Normal)
        .box_size("2025")
        .map(drop)
}

/// Whether a system font can be loaded for chart titles and labels.
pub fn fonts_available() -> bool {
    load_font(select_font_family()).is_ok()
}

/// The text font, or `None` when no system font can be loaded.
///
/// Without a font the charts are still drawn, just without captions and labels.
pub(crate) fn text_font() -> Option<FontFamily<'static>> {
    let family = select_font_family();
    match load_font(family) {
        Ok(()) => Some(family),
        Err(err) => {
            warn!(%err, "no usable font found; text will be omitted");
            None
        }
    }
}

/// Create the parent directory of `path` if it has one.
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), RenderError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| RenderError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}

struct LabelledPoint {
    year: i32,
    value: f64,
    label: String,
}

struct LineChart<'a> {
    caption: &'a str,
    y_desc: &'a str,
    points: Vec<LabelledPoint>,
}

/// Annual closest distances, each point labelled with its date (`"Mar 15"`).
pub fn render_distance_chart(path: &Path, windows: &[LaunchWindow]) -> Result<(), RenderError> {
    let chart = LineChart {
        caption: "Annual Closest Earth→Mars Distances",
        y_desc: "Distance (AU)",
        points: windows
            .iter()
            .map(|window| LabelledPoint {
                year: window.approach.year,
                value: window.approach.distance_au,
                label: date_label(window.approach.date),
            })
            .collect(),
    };
    render_line_chart(path, &chart)?;
    info!(path = %path.display(), "saved distance chart");
    Ok(())
}

/// Estimated Hohmann transfer times, each point labelled `"{months}m{days}d"`.
pub fn render_travel_time_chart(path: &Path, windows: &[LaunchWindow]) -> Result<(), RenderError> {
    let chart = LineChart {
        caption: "Estimated Hohmann Transfer Time to Mars",
        y_desc: "Transfer Time (days)",
        points: windows
            .iter()
            .map(|window| LabelledPoint {
                year: window.approach.year,
                value: window.transfer.duration_days,
                label: window.transfer.label(),
            })
            .collect(),
    };
    render_line_chart(path, &chart)?;
    info!(path = %path.display(), "saved transfer time chart");
    Ok(())
}

/// Pad a value range so flat series and single points still get a visible band.
fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let span = hi - lo;
    let pad = if span > 0.0 {
        span * 0.15
    } else {
        hi.abs().max(1.0) * 0.1
    };
    // Extra headroom on top for the point labels.
    (lo - pad)..(hi + pad * 1.5)
}

fn render_line_chart(path: &Path, plot: &LineChart<'_>) -> Result<(), RenderError> {
    let (first, last) = match (plot.points.first(), plot.points.last()) {
        (Some(first), Some(last)) => (first.year, last.year),
        _ => return Err(RenderError::NoData),
    };
    ensure_parent_dir(path)?;

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;
    draw_line_chart(&root, plot, first, last, text_font())?;
    root.present()?;
    Ok(())
}

fn draw_line_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    plot: &LineChart<'_>,
    first_year: i32,
    last_year: i32,
    font: Option<FontFamily<'static>>,
) -> Result<(), RenderError> {
    let x_range = (first_year - 1)..(last_year + 1);
    let y_range = padded_range(plot.points.iter().map(|p| p.value));
    let label_offset = (y_range.end - y_range.start) * 0.02;

    let mut builder = ChartBuilder::on(root);
    builder
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(80);
    if let Some(family) = font {
        builder.caption(plot.caption, FontDesc::new(family, 26.0, FontStyle::Bold));
    }
    let mut chart = builder.build_cartesian_2d(x_range, y_range)?;

    let year_formatter = |year: &i32| year.to_string();
    let value_formatter = |value: &f64| format!("{value:.2}");
    let year_count = usize::try_from(last_year - first_year + 3).unwrap_or(1).min(25);
    let mut mesh = chart.configure_mesh();
    mesh.light_line_style(ShapeStyle::from(&GRID_COLOR))
        .bold_line_style(ShapeStyle::from(&GRID_COLOR).stroke_width(1))
        .x_label_formatter(&year_formatter)
        .y_label_formatter(&value_formatter);
    match font {
        Some(family) => {
            let label_font = FontDesc::new(family, 16.0, FontStyle::Normal);
            mesh.x_labels(year_count)
                .y_labels(6)
                .x_desc("Year")
                .y_desc(plot.y_desc)
                .label_style(label_font.clone())
                .axis_desc_style(label_font);
        }
        None => {
            mesh.x_labels(0).y_labels(0);
        }
    }
    mesh.draw()?;

    let line: Vec<(i32, f64)> = plot.points.iter().map(|p| (p.year, p.value)).collect();
    chart.draw_series(std::iter::once(PathElement::new(
        line,
        ShapeStyle::from(&LINE_COLOR).stroke_width(2),
    )))?;
    chart.draw_series(
        plot.points
            .iter()
            .map(|p| Circle::new((p.year, p.value), 5, LINE_COLOR.filled())),
    )?;

    if let Some(family) = font {
        let style = TextStyle::from(FontDesc::new(family, 14.0, FontStyle::Normal))
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart.draw_series(plot.points.iter().map(|p| {
            Text::new(
                p.label.clone(),
                (p.year, p.value + label_offset),
                style.clone(),
            )
        }))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_font_follows_font_availability() {
        assert_eq!(text_font().is_some(), fonts_available());
    }

    #[test]
    fn flat_series_gets_a_non_empty_range() {
        let range = padded_range([0.5, 0.5].into_iter());
        assert!(range.start < 0.5 && range.end > 0.5);
    }

    #[test]
    fn padded_range_covers_all_values() {
        let range = padded_range([258.0, 262.0, 280.0].into_iter());
        assert!(range.start < 258.0 && range.end > 280.0);
    }
}
