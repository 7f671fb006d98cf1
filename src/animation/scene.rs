//! Draws one animation frame onto any plotters backend.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use solar_config::Rgb;

use super::state::Frame;
use super::stars::StarField;
use crate::charts::RenderError;

pub const TITLE: &str = "Solar System Orbits (Simulated)";
/// Height of the caption strip above the square plot.
pub const TITLE_HEIGHT: u32 = 40;
/// Square plot plus the caption strip.
pub const SCENE_SIZE: (u32, u32) = (800, 800 + TITLE_HEIGHT);

const MARGIN: u32 = 15;
const LABEL_AREA: u32 = 45;
const LEGEND_BACKGROUND: RGBColor = RGBColor(128, 128, 128);

fn rgb(color: Rgb) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

/// Render `frame` with the star field behind it.
///
/// `font` is `None` when no system font could be loaded; text is skipped then.
pub fn draw_scene<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    frame: &Frame,
    stars: &StarField,
    axis_limit: f64,
    font: Option<FontFamily<'static>>,
) -> Result<(), RenderError> {
    root.fill(&BLACK)?;
    let (width, _) = root.dim_in_pixel();
    let (title_area, plot_area) = root.split_vertically(TITLE_HEIGHT);

    if let Some(family) = font {
        let style = FontDesc::new(family, 22.0, FontStyle::Bold)
            .color(&WHITE)
            .pos(Pos::new(HPos::Center, VPos::Center));
        title_area.draw_text(TITLE, &style, ((width / 2) as i32, (TITLE_HEIGHT / 2) as i32))?;
    }

    // Equal label areas on the left and bottom keep the plotting square.
    let limit = axis_limit;
    let mut chart = ChartBuilder::on(&plot_area)
        .margin(MARGIN)
        .x_label_area_size(LABEL_AREA)
        .y_label_area_size(LABEL_AREA)
        .build_cartesian_2d(-limit..limit, -limit..limit)?;

    let axis_color = WHITE.mix(0.6);
    let mut mesh = chart.configure_mesh();
    mesh.disable_mesh()
        .axis_style(ShapeStyle::from(&axis_color));
    match font {
        Some(family) => {
            let label_style = FontDesc::new(family, 14.0, FontStyle::Normal).color(&axis_color);
            mesh.x_desc("AU")
                .y_desc("AU")
                .x_labels(9)
                .y_labels(9)
                .label_style(label_style.clone())
                .axis_desc_style(label_style);
        }
        None => {
            mesh.x_labels(0).y_labels(0);
        }
    }
    mesh.draw()?;

    chart.draw_series(
        stars
            .points()
            .iter()
            .map(|&point| Circle::new(point, 1, WHITE.mix(0.3).filled())),
    )?;

    chart
        .draw_series(std::iter::once(Circle::new((0.0, 0.0), 9, YELLOW.filled())))?
        .label("Sun")
        .legend(|(x, y)| Circle::new((x, y), 5, YELLOW.filled()));

    for body in &frame.bodies {
        let color = rgb(body.color);
        if body.trail.len() > 1 {
            chart.draw_series(std::iter::once(PathElement::new(
                body.trail.iter().map(|p| (p.x, p.y)).collect::<Vec<_>>(),
                ShapeStyle::from(&color.mix(0.7)).stroke_width(2),
            )))?;
        }
        chart
            .draw_series(std::iter::once(Circle::new(
                (body.display.x, body.display.y),
                5,
                color.filled(),
            )))?
            .label(body.label.as_str())
            .legend(move |(x, y)| Circle::new((x, y), 4, color.filled()));
    }

    if let Some(family) = font {
        let text_style = FontDesc::new(family, 16.0, FontStyle::Normal)
            .color(&WHITE)
            .pos(Pos::new(HPos::Left, VPos::Top));
        chart.draw_series(std::iter::once(Text::new(
            frame.date_text(),
            (-limit * 0.96, limit * 0.96),
            text_style,
        )))?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(&LEGEND_BACKGROUND.mix(0.3))
            .border_style(&WHITE.mix(0.3))
            .label_font(FontDesc::new(family, 13.0, FontStyle::Normal).color(&WHITE))
            .draw()?;
    }
    Ok(())
}
