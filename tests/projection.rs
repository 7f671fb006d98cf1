use solar_system_orbits::animation::radial_exaggerate;

const R_MAX: f64 = 40.0;

#[test]
fn origin_maps_to_origin_exactly() {
    assert_eq!(radial_exaggerate(0.0, 0.0, R_MAX), (0.0, 0.0));
}

#[test]
fn angle_is_preserved_and_radius_bounded() {
    let samples = [
        (0.387, 0.0),
        (-0.5, 0.6),
        (1.0, -1.0),
        (-3.9, -3.1),
        (5.2, 0.01),
        (0.0, -30.07),
        (28.0, 28.0),
        (-40.0, 0.0),
    ];
    for &(x, y) in &samples {
        let r = f64::hypot(x, y);
        assert!(r <= R_MAX);
        let (nx, ny) = radial_exaggerate(x, y, R_MAX);
        let r_new = f64::hypot(nx, ny);
        assert!(r_new <= R_MAX + 1e-9, "({x}, {y}) -> r_new = {r_new}");
        assert!(
            (y.atan2(x) - ny.atan2(nx)).abs() < 1e-9,
            "angle changed for ({x}, {y})"
        );
    }
}

#[test]
fn ordering_of_radii_is_kept() {
    let (inner, _) = radial_exaggerate(1.0, 0.0, R_MAX);
    let (outer, _) = radial_exaggerate(5.2, 0.0, R_MAX);
    assert!(inner < outer);
}
