//! Impulsive transfer estimates in the coplanar, circular limit.

use thiserror::Error;

pub mod transfers;

pub use transfers::{HohmannTransfer, hohmann_transfer, transfer_days};

/// Errors raised when transfer inputs are not physical.
#[derive(Debug, Error, PartialEq)]
pub enum TransferError {
    #[error("{which} radius must be a finite positive number of AU, got {value}")]
    InvalidRadius { which: &'static str, value: f64 },
}
