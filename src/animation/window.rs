//! Native window loop backed by `minifb`.

use minifb::{Key, Window, WindowOptions};
use plotters::prelude::*;
use solar_ephem::EphemerisProvider;
use tracing::info;

use super::scene::{SCENE_SIZE, TITLE, draw_scene};
use super::stars::StarField;
use super::state::AnimatorState;
use super::AnimationError;
use crate::charts::{RenderError, text_font};

/// Animate in a window until it is closed or Escape is pressed.
pub fn run_window<P>(
    provider: &P,
    state: &mut AnimatorState,
    stars: &StarField,
    interval_ms: u64,
) -> Result<(), AnimationError>
where
    P: EphemerisProvider + ?Sized,
{
    let (width, height) = SCENE_SIZE;
    let (w, h) = (width as usize, height as usize);
    let mut window = Window::new(TITLE, w, h, WindowOptions::default())
        .map_err(|err| AnimationError::Window(err.to_string()))?;
    window.set_target_fps((1000 / interval_ms.max(1)).max(1) as usize);

    let font = text_font();
    let mut rgb = vec![0u8; w * h * 3];
    let mut pixels = vec![0u32; w * h];
    let mut frames = 0u64;

    while window.is_open() && !window.is_key_down(Key::Escape) {
        let frame = state.step(provider)?;
        {
            let root = BitMapBackend::with_buffer(&mut rgb, SCENE_SIZE).into_drawing_area();
            draw_scene(&root, &frame, stars, state.axis_limit_au(), font)?;
            root.present().map_err(RenderError::from)?;
        }
        for (pixel, chunk) in pixels.iter_mut().zip(rgb.chunks_exact(3)) {
            *pixel = (u32::from(chunk[0]) << 16) | (u32::from(chunk[1]) << 8) | u32::from(chunk[2]);
        }
        window
            .update_with_buffer(&pixels, w, h)
            .map_err(|err| AnimationError::Window(err.to_string()))?;
        frames += 1;
    }
    info!(frames, "animation window closed");
    Ok(())
}
