//! The SPICE kernel set used by the `spice` backend and the `fetch_spice` tool.

use std::fs;
use std::path::{Path, PathBuf};

use crate::EphemerisError;

/// Directory, relative to the working directory, holding downloaded kernels.
pub const LOCAL_SPICE_DIR: &str = "data/spice";

macro_rules! naif_generic {
    ($path:literal) => {
        concat!("https://naif.jpl.nasa.gov/pub/naif/generic_kernels/", $path)
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelKind {
    /// Planetary ephemeris.
    Spk,
    /// Leap seconds.
    Lsk,
}

impl KernelKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Spk => "ephemeris (SPK)",
            Self::Lsk => "leap seconds (LSK)",
        }
    }
}

/// A kernel file: where it comes from and what it holds.
#[derive(Debug, Clone, Copy)]
pub struct KernelDescriptor {
    pub filename: &'static str,
    pub url: &'static str,
    pub kind: KernelKind,
    pub description: &'static str,
}

impl KernelDescriptor {
    pub fn local_path(&self) -> PathBuf {
        Path::new(LOCAL_SPICE_DIR).join(self.filename)
    }

    /// Ok when the kernel is on disk under a path CSPICE can accept.
    pub fn check(&self) -> Result<PathBuf, EphemerisError> {
        let path = self.local_path();
        if !path.is_file() {
            return Err(EphemerisError::MissingKernel {
                name: self.filename,
                path,
            });
        }
        if path.to_str().is_none() {
            return Err(EphemerisError::InvalidKernelPath {
                name: self.filename,
                path,
            });
        }
        Ok(path)
    }
}

pub const KERNEL_CATALOG: &[KernelDescriptor] = &[
    KernelDescriptor {
        filename: "de440s.bsp",
        url: naif_generic!("spk/planets/de440s.bsp"),
        kind: KernelKind::Spk,
        description: "DE440 short: Sun and planetary barycentres, 1550 to 2650",
    },
    KernelDescriptor {
        filename: "naif0012.tls",
        url: naif_generic!("lsk/naif0012.tls"),
        kind: KernelKind::Lsk,
        description: "UTC to TDB leap second table",
    },
];

/// Size on disk of one catalog kernel.
#[derive(Debug)]
pub struct KernelSummary {
    pub descriptor: &'static KernelDescriptor,
    pub path: PathBuf,
    pub file_size_bytes: u64,
}

/// Check every catalog kernel, stopping at the first missing one.
pub fn validate_kernel_paths() -> Result<(), EphemerisError> {
    KERNEL_CATALOG.iter().try_for_each(|descriptor| descriptor.check().map(drop))
}

pub fn kernel_summaries() -> Result<Vec<KernelSummary>, EphemerisError> {
    let mut summaries = Vec::with_capacity(KERNEL_CATALOG.len());
    for descriptor in KERNEL_CATALOG {
        let path = descriptor.check()?;
        let file_size_bytes = fs::metadata(&path)
            .map_err(|source| EphemerisError::Io {
                name: descriptor.filename,
                source,
            })?
            .len();
        summaries.push(KernelSummary {
            descriptor,
            path,
            file_size_bytes,
        });
    }
    Ok(summaries)
}
