use solar_system_orbits::impulsive::{TransferError, hohmann_transfer, transfer_days};

#[test]
fn earth_mars_transfer_takes_about_259_days() {
    let transfer = hohmann_transfer(1.0, 1.524).expect("valid radii");
    assert!(
        (transfer.semi_major_axis_au - 1.262).abs() < 1e-9,
        "a = {}",
        transfer.semi_major_axis_au
    );
    assert!(
        (transfer.tof_days - 259.0).abs() <= 1.0,
        "tof_days = {}",
        transfer.tof_days
    );
}

#[test]
fn hohmann_symmetry_and_time_match() {
    let out = hohmann_transfer(1.0, 1.524).unwrap();
    let back = hohmann_transfer(1.524, 1.0).unwrap();

    // Total dv symmetric under exchange of r1 and r2
    assert!((out.dv_total_km_s() - back.dv_total_km_s()).abs() < 1e-9);
    assert!((out.tof_days - back.tof_days).abs() < 1e-9);

    assert!(out.dv1_km_s > 0.0);
    assert!(back.dv1_km_s < 0.0);
}

#[test]
fn earth_mars_burns_are_reasonable() {
    let transfer = hohmann_transfer(1.0, 1.523679).unwrap();
    // Classical textbook figure: ~5.6 km/s total.
    assert!(
        (transfer.dv_total_km_s() - 5.6).abs() < 0.7,
        "dv_total = {}",
        transfer.dv_total_km_s()
    );
}

#[test]
fn non_positive_radius_is_invalid_input() {
    assert_eq!(
        transfer_days(-1.0, 1.5),
        Err(TransferError::InvalidRadius {
            which: "departure",
            value: -1.0
        })
    );
    assert!(matches!(
        transfer_days(1.0, 0.0),
        Err(TransferError::InvalidRadius {
            which: "arrival",
            ..
        })
    ));
}
