//! Core units, constants, and shared primitives for the solar system orbits workspace.

/// Physical constants. Distances are in AU and times in days unless stated otherwise.
pub mod constants {
    /// Gaussian gravitational constant (AU^(3/2) / day).
    pub const GAUSS_K: f64 = 0.017_202_098_95;
    /// Gravitational parameter of the Sun in AU³/day² (Gauss's constant squared).
    pub const GM_SUN_AU3_DAY2: f64 = 0.0002959122082855911;
    /// Kilometres per astronomical unit.
    pub const AU_KM: f64 = 149_597_870.7;
    /// Seconds per Julian day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    /// Days per Julian century.
    pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;
    /// Julian date of the J2000.0 epoch (2000-01-01 12:00:00 TT).
    pub const J2000_JD: f64 = 2_451_545.0;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::{AU_KM, SECONDS_PER_DAY};

    /// Convert kilometres to astronomical units.
    #[inline]
    pub fn km_to_au(v: f64) -> f64 {
        v / AU_KM
    }

    /// Convert a speed in AU/day to km/s.
    #[inline]
    pub fn au_per_day_to_km_s(v: f64) -> f64 {
        v * AU_KM / SECONDS_PER_DAY
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::{DAYS_PER_JULIAN_CENTURY, J2000_JD};

    /// Julian centuries elapsed since J2000 for a Julian date.
    #[inline]
    pub fn julian_centuries(jd: f64) -> f64 {
        (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
    }
}

/// Planar geometry on the ecliptic plane.
pub mod planar {
    use serde::{Deserialize, Serialize};

    /// Heliocentric position projected on the ecliptic plane, in AU.
    #[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
    pub struct PlanarPosition {
        pub x: f64,
        pub y: f64,
    }

    impl PlanarPosition {
        pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

        #[inline]
        pub fn new(x: f64, y: f64) -> Self {
            Self { x, y }
        }

        /// Distance from the origin (the Sun).
        #[inline]
        pub fn radius(&self) -> f64 {
            self.x.hypot(self.y)
        }

        /// Euclidean distance to another point.
        #[inline]
        pub fn distance_to(&self, other: &Self) -> f64 {
            (other.x - self.x).hypot(other.y - self.y)
        }
    }

    impl From<(f64, f64)> for PlanarPosition {
        fn from((x, y): (f64, f64)) -> Self {
            Self { x, y }
        }
    }
}
