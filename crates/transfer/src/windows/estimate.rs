//! Hohmann transfer estimate at a closest-approach date.

use chrono::NaiveDate;
use solar_ephem::{EphemerisProvider, Epoch};
use solar_impulsive::hohmann_transfer;

use super::WindowError;
use crate::labels::format_months_days;

/// Transfer duration and burns derived from both bodies' radii on `date`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransferEstimate {
    pub date: NaiveDate,
    pub duration_days: f64,
    pub radius_origin_au: f64,
    pub radius_destination_au: f64,
    pub semi_major_axis_au: f64,
    pub dv_depart_km_s: f64,
    pub dv_arrive_km_s: f64,
}

impl TransferEstimate {
    /// Duration rendered as `"{months}m{days}d"`.
    pub fn label(&self) -> String {
        format_months_days(self.duration_days)
    }
}

/// Resolve both heliocentric radii at midnight UTC on `date` and estimate the transfer.
pub fn estimate_transfer<P>(
    provider: &P,
    origin: &str,
    destination: &str,
    date: NaiveDate,
) -> Result<TransferEstimate, WindowError>
where
    P: EphemerisProvider + ?Sized,
{
    let epoch = Epoch::from_naive_date(date);
    let r_origin = provider.heliocentric_distance(origin, &epoch)?;
    let r_destination = provider.heliocentric_distance(destination, &epoch)?;
    let transfer = hohmann_transfer(r_origin, r_destination)?;

    Ok(TransferEstimate {
        date,
        duration_days: transfer.tof_days,
        radius_origin_au: transfer.r1_au,
        radius_destination_au: transfer.r2_au,
        semi_major_axis_au: transfer.semi_major_axis_au,
        dv_depart_km_s: transfer.dv1_km_s,
        dv_arrive_km_s: transfer.dv2_km_s,
    })
}
