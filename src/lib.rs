//! Solar system orbit viewer and Earth–Mars launch-window charts.
//!
//! The heavy lifting lives in the member crates; this library wires them to the
//! chart renderer and the animator so the binaries and tests share one entry point.

pub mod animation;
pub mod charts;
pub mod logging;
pub mod provider;

pub use solar_config as config;
pub use solar_core as core;
pub use solar_ephem as ephemeris;
pub use solar_export as export;
pub use solar_impulsive as impulsive;
pub use solar_importer as importer;
pub use solar_transfer as transfer;
