//! Ephemeris epochs on the TDB timescale.
//!
//! [`Epoch`] wraps a [`hifitime::Epoch`], which owns the leap-second table and
//! the UTC ↔ TAI ↔ TT ↔ TDB conversions. This module only adapts it to the
//! chrono dates used by the scanner, the charts and the CLI.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use hifitime::{TimeScale, Unit};
use solar_core::constants::SECONDS_PER_DAY;
use solar_core::time::julian_centuries;

use crate::EphemerisError;

/// A point in time for ephemeris lookups.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Epoch {
    inner: hifitime::Epoch,
}

impl Epoch {
    /// 2000-01-01 12:00:00 TDB.
    pub fn j2000() -> Self {
        Self {
            inner: hifitime::Epoch::from_tdb_seconds(0.0),
        }
    }

    /// The current wall-clock time.
    pub fn now() -> Result<Self, EphemerisError> {
        hifitime::Epoch::now()
            .map(|inner| Self { inner })
            .map_err(|err| EphemerisError::InvalidEpoch {
                epoch: format!("system clock: {err}"),
            })
    }

    pub fn from_utc(utc: DateTime<Utc>) -> Self {
        let seconds =
            utc.timestamp() as f64 + f64::from(utc.timestamp_subsec_nanos()) * 1e-9;
        Self {
            inner: hifitime::Epoch::from_unix_seconds(seconds),
        }
    }

    /// Midnight UTC at the start of `date`.
    pub fn from_naive_date(date: NaiveDate) -> Self {
        Self::from_utc(date.and_time(NaiveTime::MIN).and_utc())
    }

    /// Midnight UTC on the given calendar day.
    pub fn from_utc_date(year: i32, month: u32, day: u32) -> Result<Self, EphemerisError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::from_naive_date)
            .ok_or_else(|| EphemerisError::InvalidEpoch {
                epoch: format!("{year:04}-{month:02}-{day:02}"),
            })
    }

    pub fn from_julian_date_tdb(jd: f64) -> Self {
        Self {
            inner: hifitime::Epoch::from_jde_tdb(jd),
        }
    }

    /// Ephemeris time (SPICE ET) in seconds past J2000.
    pub fn et_seconds(&self) -> f64 {
        self.inner.to_et_seconds()
    }

    pub fn julian_date_tdb(&self) -> f64 {
        self.inner.to_jde_tdb_days()
    }

    pub fn julian_centuries_tdb(&self) -> f64 {
        julian_centuries(self.julian_date_tdb())
    }

    /// Shift by a (possibly fractional or negative) number of days.
    pub fn plus_days(self, days: f64) -> Self {
        Self {
            inner: self.inner + Unit::Day * days,
        }
    }

    /// Days elapsed from `earlier` to `self`.
    pub fn days_since(&self, earlier: &Epoch) -> f64 {
        (self.inner - earlier.inner).to_seconds() / SECONDS_PER_DAY
    }

    /// Convert back to UTC, rounded to the microsecond.
    ///
    /// Returns `None` when the epoch lies outside chrono's representable range.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let utc = self
            .inner
            .to_time_scale(TimeScale::UTC)
            .round(Unit::Microsecond * 1.0);
        let (year, month, day, hour, minute, second, nanos) = utc.to_gregorian_utc();
        // chrono encodes an inserted leap second as second 59 with an extra second of nanos.
        let (second, nanos) = if second == 60 {
            (59, nanos + 1_000_000_000)
        } else {
            (second, nanos)
        };
        NaiveDate::from_ymd_opt(year, month.into(), day.into())?
            .and_hms_nano_opt(hour.into(), minute.into(), second.into(), nanos)
            .map(|naive| naive.and_utc())
    }

    /// Calendar date (UTC) containing this epoch.
    pub fn utc_date(&self) -> Option<NaiveDate> {
        self.to_utc().map(|utc| utc.date_naive())
    }
}

impl fmt::Display for Epoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_utc() {
            Some(utc) => write!(f, "{}", utc.format("%Y-%m-%d %H:%M:%S UTC")),
            None => write!(f, "{}", self.inner),
        }
    }
}
