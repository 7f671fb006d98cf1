//! Re-exported APIs for consumers of the transfer crate.

pub use crate::labels::{date_label, format_months_days};
pub use crate::windows::estimate::{TransferEstimate, estimate_transfer};
pub use crate::windows::scan::{
    ApproachRecord, ClosestApproachScan, closest_approach_in_year, scan_closest_approaches,
};
pub use crate::windows::{
    LaunchWindow, LaunchWindows, WindowError, WindowRequest, launch_windows, plan_launch_windows,
};
