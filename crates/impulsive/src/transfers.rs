//! Hohmann transfer estimator between two heliocentric circular orbits.
//!
//! Radii are in AU and the Sun's gravitational parameter in AU³/day², so the time of
//! flight comes out directly in days. Real planetary orbits are eccentric and inclined;
//! the result is an approximation of the true mission duration.

use std::f64::consts::PI;

use solar_core::constants::GM_SUN_AU3_DAY2;
use solar_core::units::au_per_day_to_km_s;

use crate::TransferError;

/// Hohmann transfer between circular, coplanar orbits of radii `r1` and `r2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HohmannTransfer {
    pub r1_au: f64,
    pub r2_au: f64,
    /// Semi-major axis of the transfer ellipse.
    pub semi_major_axis_au: f64,
    pub tof_days: f64,
    pub dv1_km_s: f64, // signed: negative for inward (retro) burn
    pub dv2_km_s: f64, // signed: negative for retro capture when arriving inward
}

impl HohmannTransfer {
    /// |dv1| + |dv2|
    pub fn dv_total_km_s(&self) -> f64 {
        self.dv1_km_s.abs() + self.dv2_km_s.abs()
    }
}

fn check_radius(which: &'static str, value: f64) -> Result<f64, TransferError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TransferError::InvalidRadius { which, value })
    }
}

/// Compute the classical Hohmann transfer around the Sun.
///
/// Inputs:
/// - `r1_au`: departure orbit radius (AU)
/// - `r2_au`: arrival orbit radius (AU)
pub fn hohmann_transfer(r1_au: f64, r2_au: f64) -> Result<HohmannTransfer, TransferError> {
    let r1 = check_radius("departure", r1_au)?;
    let r2 = check_radius("arrival", r2_au)?;
    let mu = GM_SUN_AU3_DAY2;

    let a_t = 0.5 * (r1 + r2);
    let tof = PI * (a_t.powi(3) / mu).sqrt();

    let v1 = (mu / r1).sqrt();
    let v2 = (mu / r2).sqrt();
    // Transfer periapsis speed (at r1) and apoapsis speed (at r2)
    let v_t1 = (mu * (2.0 / r1 - 1.0 / a_t)).sqrt();
    let v_t2 = (mu * (2.0 / r2 - 1.0 / a_t)).sqrt();

    Ok(HohmannTransfer {
        r1_au: r1,
        r2_au: r2,
        semi_major_axis_au: a_t,
        tof_days: tof,
        dv1_km_s: au_per_day_to_km_s(v_t1 - v1),
        dv2_km_s: au_per_day_to_km_s(v2 - v_t2),
    })
}

/// One-way Hohmann transfer duration in days: π·√(a³/μ) with a = (r1 + r2)/2.
pub fn transfer_days(r1_au: f64, r2_au: f64) -> Result<f64, TransferError> {
    hohmann_transfer(r1_au, r2_au).map(|transfer| transfer.tof_days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earth_to_earth_is_half_a_year_without_burns() {
        let transfer = hohmann_transfer(1.0, 1.0).unwrap();
        assert!((transfer.tof_days - 182.6).abs() < 0.2, "{}", transfer.tof_days);
        assert!(transfer.dv_total_km_s() < 1e-9);
    }

    #[test]
    fn inward_transfer_has_retro_burns() {
        let transfer = hohmann_transfer(1.524, 1.0).unwrap();
        assert!(transfer.dv1_km_s < 0.0);
        assert!(transfer.dv2_km_s < 0.0);
    }

    #[test]
    fn zero_and_nan_radii_are_rejected() {
        assert_eq!(
            transfer_days(0.0, 1.5),
            Err(TransferError::InvalidRadius {
                which: "departure",
                value: 0.0
            })
        );
        assert!(transfer_days(1.0, f64::NAN).is_err());
        assert!(transfer_days(1.0, f64::INFINITY).is_err());
    }
}
