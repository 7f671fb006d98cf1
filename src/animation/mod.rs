//! Live orbit animation: explicit state, log-scaled projection and plotters rendering.
//!
//! [`AnimatorState::step`] does all the ephemeris work; the GIF writer and the
//! window loop only draw the frames it returns.

pub mod gif;
pub mod projection;
pub mod scene;
pub mod stars;
pub mod state;
#[cfg(feature = "window")]
pub mod window;

use solar_ephem::{EphemerisError, Epoch};
use thiserror::Error;

use crate::charts::RenderError;

pub use gif::render_gif;
pub use projection::{exaggerate, radial_exaggerate};
pub use scene::draw_scene;
pub use stars::StarField;
pub use state::{AnimatorState, BodyFrame, Frame};
#[cfg(feature = "window")]
pub use window::run_window;

/// Errors raised while stepping or displaying the animation.
#[derive(Debug, Error)]
pub enum AnimationError {
    #[error("cannot resolve `{body}` at {epoch}: {source}")]
    Ephemeris {
        body: String,
        epoch: Epoch,
        #[source]
        source: EphemerisError,
    },
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("window error: {0}")]
    Window(String),
}
