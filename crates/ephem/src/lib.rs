//! Epochs, ephemeris providers, and SPICE kernel metadata.
//!
//! Positions are heliocentric and projected on the ecliptic plane (J2000), in AU.
//! Consumers depend on [`EphemerisProvider`] so that the launch-window scan and
//! the animator can run against the analytic model, a SPICE kernel, or a test stub.

use std::path::PathBuf;

use solar_core::planar::PlanarPosition;
use thiserror::Error;

pub mod bodies;
pub mod kernels;
pub mod keplerian;
#[cfg(feature = "spice")]
pub mod spice;
pub mod time;

pub use bodies::{normalize_body_name, normalize_heliocentric_target_name};
pub use keplerian::KeplerianEphemeris;
#[cfg(feature = "spice")]
pub use spice::SpiceEphemeris;
pub use time::Epoch;

/// Errors surfaced while resolving epochs or querying an ephemeris.
#[derive(Debug, Error)]
pub enum EphemerisError {
    #[error("body `{body}` is not available in the {provider} ephemeris")]
    UnknownBody { body: String, provider: &'static str },
    #[error(
        "epoch JD {jd:.3} TDB is outside the {provider} ephemeris coverage (JD {start_jd:.1}..{end_jd:.1})"
    )]
    OutOfRange {
        jd: f64,
        start_jd: f64,
        end_jd: f64,
        provider: &'static str,
    },
    #[error("invalid epoch `{epoch}`")]
    InvalidEpoch { epoch: String },
    #[error("kernel `{name}` is missing at {path}")]
    MissingKernel { name: &'static str, path: PathBuf },
    #[error("kernel `{name}` path contains invalid UTF-8: {path}")]
    InvalidKernelPath { name: &'static str, path: PathBuf },
    #[error("failed to read metadata for kernel `{name}`: {source}")]
    Io {
        name: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("SPICE kernel call failed: {message}")]
    Spice { message: String },
}

/// Source of heliocentric planar positions.
pub trait EphemerisProvider {
    /// Short label used in diagnostics and error messages.
    fn name(&self) -> &'static str;

    /// Heliocentric (x, y) position of `body` on the ecliptic plane, in AU.
    fn position(&self, body: &str, epoch: &Epoch) -> Result<PlanarPosition, EphemerisError>;

    /// Heliocentric distance of `body`, in AU.
    fn heliocentric_distance(&self, body: &str, epoch: &Epoch) -> Result<f64, EphemerisError> {
        Ok(self.position(body, epoch)?.radius())
    }
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for &P {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn position(&self, body: &str, epoch: &Epoch) -> Result<PlanarPosition, EphemerisError> {
        (**self).position(body, epoch)
    }

    fn heliocentric_distance(&self, body: &str, epoch: &Epoch) -> Result<f64, EphemerisError> {
        (**self).heliocentric_distance(body, epoch)
    }
}

impl<P: EphemerisProvider + ?Sized> EphemerisProvider for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn position(&self, body: &str, epoch: &Epoch) -> Result<PlanarPosition, EphemerisError> {
        (**self).position(body, epoch)
    }

    fn heliocentric_distance(&self, body: &str, epoch: &Epoch) -> Result<f64, EphemerisError> {
        (**self).heliocentric_distance(body, epoch)
    }
}

/// Planar distance between two bodies at `epoch`, in AU.
pub fn separation<P>(provider: &P, a: &str, b: &str, epoch: &Epoch) -> Result<f64, EphemerisError>
where
    P: EphemerisProvider + ?Sized,
{
    let pa = provider.position(a, epoch)?;
    let pb = provider.position(b, epoch)?;
    Ok(pa.distance_to(&pb))
}
