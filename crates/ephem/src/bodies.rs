//! Body name handling shared by the ephemeris providers.

/// Lowercase a body name and collapse runs of whitespace.
///
/// `"  Jupiter   BARYCENTER "` becomes `"jupiter barycenter"`.
pub fn normalize_body_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize a SPICE target name for heliocentric queries.
///
/// For major planets, prefer barycenter targets when querying relative to the Sun
/// so that every body in a frame resolves consistently (e.g. EARTH vs MARS BARYCENTER).
/// Non-planetary targets (moons, asteroids) are passed through unchanged.
pub fn normalize_heliocentric_target_name(name: &str) -> String {
    let upper = name.trim().to_ascii_uppercase();
    if upper.contains("BARYCENTER") {
        return upper;
    }
    match upper.as_str() {
        "MERCURY" | "VENUS" | "EARTH" | "MARS" | "JUPITER" | "SATURN" | "URANUS" | "NEPTUNE"
        | "PLUTO" => format!("{upper} BARYCENTER"),
        _ => upper,
    }
}

/// Human-readable label for a configured body name, e.g. `"jupiter barycenter"` → `"Jupiter"`.
pub fn display_name(name: &str) -> String {
    let normalized = normalize_body_name(name);
    let base = normalized
        .strip_suffix(" barycenter")
        .unwrap_or(&normalized);
    let mut chars = base.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
