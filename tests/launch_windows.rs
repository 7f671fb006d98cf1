use std::f64::consts::TAU;

use chrono::{Datelike, NaiveDate};
use solar_system_orbits::core::planar::PlanarPosition;
use solar_system_orbits::ephemeris::{
    EphemerisError, EphemerisProvider, Epoch, KeplerianEphemeris, normalize_body_name,
};
use solar_system_orbits::transfer::{
    ClosestApproachScan, WindowError, WindowRequest, launch_windows, plan_launch_windows,
    scan_closest_approaches,
};

/// Coplanar circular orbits starting aligned at J2000.
struct CircularOrbits;

impl EphemerisProvider for CircularOrbits {
    fn name(&self) -> &'static str {
        "circular"
    }

    fn position(&self, body: &str, epoch: &Epoch) -> Result<PlanarPosition, EphemerisError> {
        let (radius, period) = match normalize_body_name(body).as_str() {
            "earth" => (1.0, 365.25),
            "mars" => (1.524, 686.98),
            "sun" => return Ok(PlanarPosition::ORIGIN),
            _ => {
                return Err(EphemerisError::UnknownBody {
                    body: body.to_string(),
                    provider: "circular",
                });
            }
        };
        let angle = TAU * epoch.days_since(&Epoch::j2000()) / period;
        Ok(PlanarPosition::new(radius * angle.cos(), radius * angle.sin()))
    }
}

/// Delegates to [`CircularOrbits`] until `cutoff`, then reports out-of-range.
struct Truncated {
    cutoff: NaiveDate,
}

impl EphemerisProvider for Truncated {
    fn name(&self) -> &'static str {
        "truncated"
    }

    fn position(&self, body: &str, epoch: &Epoch) -> Result<PlanarPosition, EphemerisError> {
        let cutoff = Epoch::from_naive_date(self.cutoff);
        if epoch.days_since(&cutoff) >= 0.0 {
            return Err(EphemerisError::OutOfRange {
                jd: epoch.julian_date_tdb(),
                start_jd: 0.0,
                end_jd: cutoff.julian_date_tdb(),
                provider: "truncated",
            });
        }
        CircularOrbits.position(body, epoch)
    }
}

/// Positions resolve everywhere, but heliocentric distances are unavailable during 2025.
struct NoRadiiIn2025;

impl EphemerisProvider for NoRadiiIn2025 {
    fn name(&self) -> &'static str {
        "no-radii-2025"
    }

    fn position(&self, body: &str, epoch: &Epoch) -> Result<PlanarPosition, EphemerisError> {
        CircularOrbits.position(body, epoch)
    }

    fn heliocentric_distance(&self, body: &str, epoch: &Epoch) -> Result<f64, EphemerisError> {
        if epoch.utc_date().map(|date| date.year()) == Some(2025) {
            return Err(EphemerisError::OutOfRange {
                jd: epoch.julian_date_tdb(),
                start_jd: 0.0,
                end_jd: 0.0,
                provider: "no-radii-2025",
            });
        }
        Ok(self.position(body, epoch)?.radius())
    }
}

fn distance_through<P: EphemerisProvider>(provider: P, epoch: &Epoch) -> Result<f64, EphemerisError> {
    provider.heliocentric_distance("mars", epoch)
}

fn request(start_year: i32, end_year: i32) -> WindowRequest {
    WindowRequest {
        start_year,
        end_year,
        ..WindowRequest::default()
    }
}

#[test]
fn one_window_per_year_dated_inside_its_year() {
    let windows = plan_launch_windows(&CircularOrbits, &request(2025, 2030)).expect("scan");
    assert_eq!(windows.len(), 6);
    for (window, year) in windows.iter().zip(2025..) {
        assert_eq!(window.approach.year, year);
        assert_eq!(window.approach.date.year(), year);
        // Never closer than the difference of the orbit radii.
        assert!(
            window.approach.distance_au >= 0.524 - 1e-9,
            "{year}: {}",
            window.approach.distance_au
        );
        assert!((window.transfer.duration_days - 258.9).abs() < 0.5);
        assert_eq!(window.transfer.date, window.approach.date);
    }
}

#[test]
fn ties_resolve_to_the_earliest_date() {
    let early = NaiveDate::from_ymd_opt(2027, 3, 10).unwrap();
    let late = NaiveDate::from_ymd_opt(2027, 9, 2).unwrap();
    let records = scan_closest_approaches(2027, 2027, |epoch: &Epoch| {
        let date = epoch.utc_date().expect("representable date");
        Ok(if date == early || date == late { 0.3 } else { 1.0 })
    })
    .expect("scan");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].date, early);
    assert_eq!(records[0].distance_au, 0.3);
}

#[test]
fn samples_are_taken_at_midnight_each_day() {
    let mut dates = Vec::new();
    scan_closest_approaches(2028, 2028, |epoch: &Epoch| {
        dates.push(epoch.utc_date().expect("representable date"));
        Ok(2.0)
    })
    .expect("scan");

    assert_eq!(dates.len(), 366, "2028 is a leap year");
    assert_eq!(dates.first(), NaiveDate::from_ymd_opt(2028, 1, 1).as_ref());
    assert_eq!(dates.last(), NaiveDate::from_ymd_opt(2028, 12, 31).as_ref());
}

#[test]
fn start_after_end_is_rejected() {
    let result = plan_launch_windows(&CircularOrbits, &request(2030, 2029));
    assert!(matches!(
        result,
        Err(WindowError::EmptyYearRange {
            start_year: 2030,
            end_year: 2029
        })
    ));
}

#[test]
fn ephemeris_failure_stops_the_scan() {
    let provider = Truncated {
        cutoff: NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
    };
    let distance = |epoch: &Epoch| -> Result<f64, EphemerisError> {
        let earth = provider.position("earth", epoch)?;
        let mars = provider.position("mars", epoch)?;
        Ok(earth.distance_to(&mars))
    };
    let results: Vec<_> = ClosestApproachScan::new(2025, 2027, distance)
        .expect("non-empty range")
        .collect();

    assert_eq!(results.len(), 2, "nothing is yielded after a failure");
    assert!(results[0].is_ok());
    assert!(matches!(
        results[1],
        Err(WindowError::Ephemeris(EphemerisError::OutOfRange { .. }))
    ));

    let plan = plan_launch_windows(&provider, &request(2025, 2027));
    assert!(matches!(
        plan,
        Err(WindowError::Ephemeris(EphemerisError::OutOfRange { .. }))
    ));
}

#[test]
fn estimate_failure_ends_the_lazy_plan() {
    let request = request(2025, 2027);
    let items: Vec<_> = launch_windows(&NoRadiiIn2025, &request)
        .expect("non-empty range")
        .collect();

    assert_eq!(items.len(), 1, "later years must not be planned after a failure");
    assert!(matches!(
        items[0],
        Err(WindowError::Ephemeris(EphemerisError::OutOfRange { .. }))
    ));
}

#[test]
fn borrowed_and_boxed_providers_keep_distance_overrides() {
    let epoch = Epoch::from_utc_date(2025, 6, 1).unwrap();
    assert!(distance_through(&NoRadiiIn2025, &epoch).is_err());

    let boxed: Box<dyn EphemerisProvider> = Box::new(NoRadiiIn2025);
    assert!(distance_through(&boxed, &epoch).is_err());
    assert!(distance_through(boxed, &epoch).is_err());
}

#[test]
fn unknown_body_is_reported() {
    let request = WindowRequest {
        destination: "vulcan".to_string(),
        ..request(2025, 2025)
    };
    let result = plan_launch_windows(&CircularOrbits, &request);
    assert!(matches!(
        result,
        Err(WindowError::Ephemeris(EphemerisError::UnknownBody { .. }))
    ));
}

#[test]
fn analytic_2025_approach_is_in_january() {
    // Mars opposition 2025-01-16; closest approach 2025-01-12 at about 0.642 AU.
    let windows = plan_launch_windows(&KeplerianEphemeris::new(), &request(2025, 2025))
        .expect("2025 is covered by the analytic ephemeris");
    let approach = windows[0].approach;
    assert_eq!(approach.date.month(), 1, "closest on {}", approach.date);
    assert!(
        (0.6..0.7).contains(&approach.distance_au),
        "distance {}",
        approach.distance_au
    );
}
