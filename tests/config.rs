use std::fs;

use solar_system_orbits::config::{
    ConfigError, Rgb, Settings, TRAIL_LENGTH, default_bodies, load_settings,
};

#[test]
fn yaml_overrides_only_the_given_keys() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.yaml");
    fs::write(
        &path,
        "windows:\n  start_year: 2030\n  end_year: 2032\nbodies:\n  - name: mars\n    color: \"#ff8000\"\n",
    )
    .unwrap();

    let settings = load_settings(&path).expect("valid yaml");
    assert_eq!(settings.windows.start_year, 2030);
    assert_eq!(settings.windows.end_year, 2032);
    assert_eq!(settings.windows.destination, "mars");
    assert_eq!(settings.animation.trail_length, TRAIL_LENGTH);
    assert_eq!(settings.bodies.len(), 1);
    assert_eq!(settings.bodies[0].color, Rgb(255, 128, 0));
}

#[test]
fn toml_files_are_read_as_toml() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");
    fs::write(
        &path,
        "[animation]\ndays_per_frame = 2.5\nstar_seed = 9\n\n[windows]\norigin = \"venus\"\n",
    )
    .unwrap();

    let settings = load_settings(&path).expect("valid toml");
    assert_eq!(settings.animation.days_per_frame, 2.5);
    assert_eq!(settings.animation.star_seed, Some(9));
    assert_eq!(settings.windows.origin, "venus");
    assert_eq!(settings.bodies, default_bodies());
}

#[test]
fn inverted_year_range_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.yml");
    fs::write(&path, "windows:\n  start_year: 2040\n  end_year: 2030\n").unwrap();

    let err = load_settings(&path).unwrap_err();
    assert!(
        matches!(err, ConfigError::Invalid { field: "windows.start_year", .. }),
        "{err}"
    );
}

#[test]
fn unknown_colours_fail_to_load() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.yaml");
    fs::write(&path, "bodies:\n  - name: mars\n    color: ultraviolet\n").unwrap();

    let err = load_settings(&path).unwrap_err();
    assert!(err.to_string().contains("ultraviolet"), "{err}");
}

#[test]
fn defaults_match_the_documented_values() {
    let settings = Settings::default();
    assert_eq!(settings.animation.days_per_frame, 5.0);
    assert_eq!(settings.animation.interval_ms, 50);
    assert_eq!(settings.animation.star_count, 500);
    assert_eq!(settings.animation.axis_limit_au, 40.0);
    assert_eq!(
        (settings.windows.start_year, settings.windows.end_year),
        (2025, 2045)
    );
    let names: Vec<_> = settings.bodies.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names[3], "mars");
    assert_eq!(settings.bodies[3].color, Rgb(255, 0, 0));
    assert!(settings.validate().is_ok());
}
