//! Headless animation output as an animated GIF.

use std::path::Path;

use plotters::prelude::*;
use solar_ephem::EphemerisProvider;
use tracing::info;

use super::scene::{SCENE_SIZE, draw_scene};
use super::stars::StarField;
use super::state::AnimatorState;
use super::AnimationError;
use crate::charts::{RenderError, ensure_parent_dir, text_font};

/// Step the animator `frames` times and write every frame to `path`.
pub fn render_gif<P>(
    path: &Path,
    provider: &P,
    state: &mut AnimatorState,
    stars: &StarField,
    frames: usize,
    interval_ms: u32,
) -> Result<(), AnimationError>
where
    P: EphemerisProvider + ?Sized,
{
    ensure_parent_dir(path)?;
    let backend = BitMapBackend::gif(path, SCENE_SIZE, interval_ms)
        .map_err(|err| RenderError::Drawing(err.to_string()))?;
    let root = backend.into_drawing_area();
    let font = text_font();

    for _ in 0..frames {
        let frame = state.step(provider)?;
        draw_scene(&root, &frame, stars, state.axis_limit_au(), font)?;
        root.present().map_err(RenderError::from)?;
    }
    info!(path = %path.display(), frames, "saved animation");
    Ok(())
}
