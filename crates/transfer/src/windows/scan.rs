//! Brute-force closest-approach search over calendar years.
//!
//! Each year is sampled once per day at 00:00 UTC from Jan 1 through Dec 31. The
//! minimum is tracked with a strict `<`, so the earliest date wins ties. Resolution
//! is one day; no refinement between samples is attempted.

use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};
use solar_ephem::{EphemerisError, Epoch};
use tracing::debug;

use super::WindowError;

/// Minimum separation found within one calendar year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproachRecord {
    pub year: i32,
    pub date: NaiveDate,
    pub distance_au: f64,
}

/// Find the closest approach within `year` for the given distance function.
pub fn closest_approach_in_year<F>(year: i32, distance: &mut F) -> Result<ApproachRecord, WindowError>
where
    F: FnMut(&Epoch) -> Result<f64, EphemerisError>,
{
    let jan_first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(WindowError::InvalidYear { year })?;

    let mut best: Option<(NaiveDate, f64)> = None;
    for date in jan_first.iter_days().take_while(|date| date.year() == year) {
        let sample = distance(&Epoch::from_naive_date(date))?;
        if !(sample.is_finite() && sample >= 0.0) {
            return Err(WindowError::InvalidDistance {
                date,
                distance: sample,
            });
        }
        match best {
            Some((_, current)) if sample >= current => {}
            _ => best = Some((date, sample)),
        }
    }

    let (date, distance_au) = best.ok_or(WindowError::InvalidYear { year })?;
    debug!(year, %date, distance_au, "closest approach");
    Ok(ApproachRecord {
        year,
        date,
        distance_au,
    })
}

/// Lazy per-year scan. Yields one result per year and stops after the first error.
pub struct ClosestApproachScan<F> {
    years: RangeInclusive<i32>,
    distance: F,
    failed: bool,
}

impl<F> ClosestApproachScan<F>
where
    F: FnMut(&Epoch) -> Result<f64, EphemerisError>,
{
    pub fn new(start_year: i32, end_year: i32, distance: F) -> Result<Self, WindowError> {
        if start_year > end_year {
            return Err(WindowError::EmptyYearRange {
                start_year,
                end_year,
            });
        }
        Ok(Self {
            years: start_year..=end_year,
            distance,
            failed: false,
        })
    }
}

impl<F> Iterator for ClosestApproachScan<F>
where
    F: FnMut(&Epoch) -> Result<f64, EphemerisError>,
{
    type Item = Result<ApproachRecord, WindowError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let year = self.years.next()?;
        let result = closest_approach_in_year(year, &mut self.distance);
        self.failed = result.is_err();
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            (0, self.years.size_hint().1)
        }
    }
}

/// Scan every year in `[start_year, end_year]`, aborting on the first failure.
pub fn scan_closest_approaches<F>(
    start_year: i32,
    end_year: i32,
    distance: F,
) -> Result<Vec<ApproachRecord>, WindowError>
where
    F: FnMut(&Epoch) -> Result<f64, EphemerisError>,
{
    ClosestApproachScan::new(start_year, end_year, distance)?.collect()
}
