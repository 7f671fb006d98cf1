use solar_system_orbits::ephemeris::{normalize_body_name, normalize_heliocentric_target_name};

#[test]
fn barycenter_normalization_for_planets() {
    let norm = normalize_heliocentric_target_name;
    assert_eq!(norm("earth"), "EARTH BARYCENTER");
    assert_eq!(norm("Mars"), "MARS BARYCENTER");
    assert_eq!(norm("jupiter barycenter"), "JUPITER BARYCENTER");
    assert_eq!(norm("MARS BARYCENTER"), "MARS BARYCENTER");
    // Non-planet should pass through unchanged
    assert_eq!(norm("CERES"), "CERES");
    assert_eq!(norm("moon"), "MOON");
}

#[test]
fn configured_names_are_lowercased() {
    assert_eq!(normalize_body_name("Saturn  Barycenter"), "saturn barycenter");
    assert_eq!(normalize_body_name("  EARTH"), "earth");
}
