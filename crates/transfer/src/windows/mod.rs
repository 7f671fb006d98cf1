//! Annual launch windows: closest approach of two bodies per year plus a Hohmann estimate.

pub mod estimate;
pub mod scan;

use chrono::NaiveDate;
use solar_config::WindowSettings;
use solar_ephem::{EphemerisError, EphemerisProvider, Epoch, separation};
use solar_impulsive::TransferError;

use self::estimate::{TransferEstimate, estimate_transfer};
use self::scan::{ApproachRecord, ClosestApproachScan};

#[derive(Debug, thiserror::Error)]
pub enum WindowError {
    #[error("ephemeris error: {0}")]
    Ephemeris(#[from] EphemerisError),
    #[error("transfer error: {0}")]
    Transfer(#[from] TransferError),
    #[error("empty year range: start year {start_year} is after end year {end_year}")]
    EmptyYearRange { start_year: i32, end_year: i32 },
    #[error("year {year} cannot be represented as a calendar date")]
    InvalidYear { year: i32 },
    #[error("distance sample on {date} is not a finite non-negative number: {distance}")]
    InvalidDistance { date: NaiveDate, distance: f64 },
}

/// Which bodies and years to scan.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowRequest {
    pub origin: String,
    pub destination: String,
    pub start_year: i32,
    pub end_year: i32,
}

impl Default for WindowRequest {
    fn default() -> Self {
        Self::from(&WindowSettings::default())
    }
}

impl From<&WindowSettings> for WindowRequest {
    fn from(settings: &WindowSettings) -> Self {
        Self {
            origin: settings.origin.clone(),
            destination: settings.destination.clone(),
            start_year: settings.start_year,
            end_year: settings.end_year,
        }
    }
}

/// A year's closest approach with the transfer estimated at that date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchWindow {
    pub approach: ApproachRecord,
    pub transfer: TransferEstimate,
}

type SeparationFn<'a> = Box<dyn FnMut(&Epoch) -> Result<f64, EphemerisError> + 'a>;

/// Lazy launch-window planner; yields one window per year and stops after the first error.
pub struct LaunchWindows<'a, P: ?Sized> {
    provider: &'a P,
    origin: &'a str,
    destination: &'a str,
    scan: ClosestApproachScan<SeparationFn<'a>>,
    failed: bool,
}

impl<P> Iterator for LaunchWindows<'_, P>
where
    P: EphemerisProvider + ?Sized,
{
    type Item = Result<LaunchWindow, WindowError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let result = self.scan.next()?.and_then(|approach| {
            estimate_transfer(self.provider, self.origin, self.destination, approach.date)
                .map(|transfer| LaunchWindow { approach, transfer })
        });
        self.failed = result.is_err();
        Some(result)
    }
}

/// Start a lazy launch-window scan for `request` against `provider`.
pub fn launch_windows<'a, P>(
    provider: &'a P,
    request: &'a WindowRequest,
) -> Result<LaunchWindows<'a, P>, WindowError>
where
    P: EphemerisProvider + ?Sized,
{
    let origin = request.origin.as_str();
    let destination = request.destination.as_str();
    let distance: SeparationFn<'a> =
        Box::new(move |epoch: &Epoch| separation(provider, origin, destination, epoch));
    let scan = ClosestApproachScan::new(request.start_year, request.end_year, distance)?;
    Ok(LaunchWindows {
        provider,
        origin,
        destination,
        scan,
        failed: false,
    })
}

/// Collect every launch window in the request; any failing year aborts the whole plan.
pub fn plan_launch_windows<P>(
    provider: &P,
    request: &WindowRequest,
) -> Result<Vec<LaunchWindow>, WindowError>
where
    P: EphemerisProvider + ?Sized,
{
    launch_windows(provider, request)?.collect()
}
