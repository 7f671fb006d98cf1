//! Log-compressed radial scale for the animation viewport.
//!
//! Display only: positions passed through here must never feed back into
//! distance or transfer calculations.

use solar_core::planar::PlanarPosition;

/// Map (x, y) to a radius of `ln(1 + r) / ln(1 + r_max) · r_max`, keeping the angle.
///
/// The origin maps to `(0, 0)` exactly. Radii up to `r_max` stay within `r_max`.
pub fn radial_exaggerate(x: f64, y: f64, r_max: f64) -> (f64, f64) {
    let r = x.hypot(y);
    if r == 0.0 {
        return (0.0, 0.0);
    }
    let r_new = r.ln_1p() / r_max.ln_1p() * r_max;
    let theta = y.atan2(x);
    (r_new * theta.cos(), r_new * theta.sin())
}

/// [`radial_exaggerate`] for a [`PlanarPosition`].
pub fn exaggerate(position: PlanarPosition, r_max: f64) -> PlanarPosition {
    radial_exaggerate(position.x, position.y, r_max).into()
}
