use solar_system_orbits::ephemeris::{
    EphemerisError, EphemerisProvider, Epoch, KeplerianEphemeris, separation,
};

#[test]
fn j2000_is_noon_tdb_on_new_years_day() {
    let utc = Epoch::j2000().to_utc().expect("representable");
    // TT - UTC was 64.184 s in 2000.
    assert_eq!(
        utc.format("%Y-%m-%d %H:%M:%S").to_string(),
        "2000-01-01 11:58:55"
    );
    let millis = f64::from(utc.timestamp_subsec_micros()) / 1000.0;
    assert!((millis - 816.0).abs() < 0.1, "{millis} ms");
    assert!((Epoch::j2000().julian_date_tdb() - 2_451_545.0).abs() < 1e-6);
}

#[test]
fn analytic_radii_stay_in_their_bands() {
    let ephem = KeplerianEphemeris::new();
    let start = Epoch::from_utc_date(2025, 1, 1).unwrap();
    for step in 0..24 {
        let epoch = start.plus_days(f64::from(step) * 30.0);
        let earth = ephem.heliocentric_distance("earth", &epoch).unwrap();
        let mars = ephem.heliocentric_distance("mars", &epoch).unwrap();
        assert!((0.98..1.02).contains(&earth), "earth r={earth} at {epoch}");
        assert!((1.38..1.67).contains(&mars), "mars r={mars} at {epoch}");
    }
}

#[test]
fn sun_sits_at_the_origin() {
    let epoch = Epoch::from_utc_date(2030, 5, 5).unwrap();
    let sun = KeplerianEphemeris::new().position("Sun", &epoch).unwrap();
    assert_eq!((sun.x, sun.y), (0.0, 0.0));

    let earth_sun = separation(&KeplerianEphemeris::new(), "earth", "sun", &epoch).unwrap();
    assert!((earth_sun - 1.0).abs() < 0.02);
}

#[test]
fn barycenter_names_match_planet_positions() {
    let ephem = KeplerianEphemeris::new();
    let epoch = Epoch::from_utc_date(2027, 2, 20).unwrap();
    let plain = ephem.position("jupiter", &epoch).unwrap();
    let bary = ephem.position("JUPITER BARYCENTER", &epoch).unwrap();
    assert_eq!(plain, bary);
}

#[test]
fn epochs_outside_coverage_are_rejected() {
    let ephem = KeplerianEphemeris::new();
    let epoch = Epoch::from_utc_date(2100, 1, 1).unwrap();
    let err = ephem.position("mars", &epoch).unwrap_err();
    assert!(matches!(err, EphemerisError::OutOfRange { .. }), "{err}");

    let (from, until) = ephem.coverage();
    assert!(from < Epoch::from_utc_date(1801, 1, 1).unwrap());
    assert!(until > Epoch::from_utc_date(2049, 12, 31).unwrap());
}

#[test]
fn unknown_bodies_are_named_in_the_error() {
    let epoch = Epoch::from_utc_date(2025, 1, 1).unwrap();
    let err = KeplerianEphemeris::new()
        .position("pluto", &epoch)
        .unwrap_err();
    match err {
        EphemerisError::UnknownBody { body, .. } => assert_eq!(body, "pluto"),
        other => panic!("unexpected error: {other}"),
    }
}

#[cfg(feature = "spice")]
mod spice {
    use std::sync::{Mutex, OnceLock};

    use solar_system_orbits::ephemeris::{
        EphemerisError, EphemerisProvider, Epoch, KeplerianEphemeris, SpiceEphemeris,
    };

    fn guard() -> std::sync::MutexGuard<'static, ()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn load_or_skip() -> Option<SpiceEphemeris> {
        match SpiceEphemeris::load() {
            Ok(ephem) => Some(ephem),
            Err(EphemerisError::MissingKernel { name, path }) => {
                eprintln!(
                    "Skipping SPICE test: kernel {} missing at {}",
                    name,
                    path.display()
                );
                None
            }
            Err(err) => panic!("unexpected error loading kernels: {err}"),
        }
    }

    #[test]
    fn spice_agrees_with_analytic_model() {
        let _lock = guard();
        let Some(spice) = load_or_skip() else {
            return;
        };
        let analytic = KeplerianEphemeris::new();
        let epoch = Epoch::from_utc_date(2025, 1, 12).unwrap();
        for body in ["earth", "mars", "jupiter barycenter"] {
            let a = analytic.position(body, &epoch).unwrap();
            let s = spice.position(body, &epoch).unwrap();
            assert!(
                a.distance_to(&s) < 0.01 * s.radius().max(1.0),
                "{body}: analytic {a:?} vs spice {s:?}"
            );
        }
    }
}
