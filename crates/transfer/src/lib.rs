//! Transfer façade crate consolidating launch-window planning and exposing supporting crates.

pub mod labels;
pub mod windows;

pub use facade::*;
pub use solar_impulsive as impulsive;

mod facade;
