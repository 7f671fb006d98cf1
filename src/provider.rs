//! Runtime selection of the ephemeris backend.

use std::fmt;

use clap::ValueEnum;
use solar_ephem::{EphemerisError, EphemerisProvider, KeplerianEphemeris};

/// Ephemeris backends selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EphemerisKind {
    /// Closed-form mean orbital elements (always available).
    #[default]
    Analytic,
    /// CSPICE with the kernels in `data/spice/` (requires the `spice` feature).
    Spice,
}

impl fmt::Display for EphemerisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Analytic => "analytic",
            Self::Spice => "spice",
        })
    }
}

/// Open the requested backend.
pub fn open(kind: EphemerisKind) -> Result<Box<dyn EphemerisProvider>, EphemerisError> {
    match kind {
        EphemerisKind::Analytic => Ok(Box::new(KeplerianEphemeris::new())),
        EphemerisKind::Spice => open_spice(),
    }
}

#[cfg(feature = "spice")]
fn open_spice() -> Result<Box<dyn EphemerisProvider>, EphemerisError> {
    Ok(Box::new(solar_ephem::SpiceEphemeris::load()?))
}

#[cfg(not(feature = "spice"))]
fn open_spice() -> Result<Box<dyn EphemerisProvider>, EphemerisError> {
    Err(EphemerisError::Spice {
        message: "this build does not include SPICE support; rebuild with `--features spice`"
            .to_string(),
    })
}
