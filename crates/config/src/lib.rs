//! Settings models and loaders for the solar system orbits tools.
//!
//! Every field has a compiled-in default, so a settings file only needs the keys
//! it wants to override. Files ending in `.toml` are read as TOML; anything else
//! is treated as YAML.

use std::fmt;
use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulated days advanced per animation frame.
pub const DAYS_PER_FRAME: f64 = 5.0;
/// Wall-clock delay between animation frames.
pub const INTERVAL_MS: u64 = 50;
/// Number of past positions kept per body trail.
pub const TRAIL_LENGTH: usize = 50;
/// Background stars drawn behind the animation.
pub const STAR_COUNT: usize = 500;
/// Half-width of the square animation viewport (AU).
pub const AXIS_LIMIT_AU: f64 = 40.0;
/// First year scanned by the launch-window batch.
pub const START_YEAR: i32 = 2025;
/// Last year (inclusive) scanned by the launch-window batch.
pub const END_YEAR: i32 = 2045;

/// Default bodies and display colours, innermost first.
pub const TARGET_BODIES: &[(&str, Rgb)] = &[
    ("mercury", Rgb(128, 128, 128)),              // gray
    ("venus", Rgb(255, 165, 0)),                  // orange
    ("earth", Rgb(0, 0, 255)),                    // blue
    ("mars", Rgb(255, 0, 0)),                     // red
    ("jupiter barycenter", Rgb(139, 69, 19)),     // saddlebrown
    ("saturn barycenter", Rgb(255, 215, 0)),      // gold
    ("uranus barycenter", Rgb(173, 216, 230)),    // lightblue
    ("neptune barycenter", Rgb(128, 0, 128)),     // purple
];

/// Errors that can occur while loading or validating settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
    #[error("unknown colour `{0}` (expected a colour name or #rrggbb)")]
    UnknownColor(String),
}

/// An sRGB colour parsed from a name such as `"saddlebrown"` or a `#rrggbb` literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("black", Rgb(0, 0, 0)),
    ("white", Rgb(255, 255, 255)),
    ("gray", Rgb(128, 128, 128)),
    ("grey", Rgb(128, 128, 128)),
    ("orange", Rgb(255, 165, 0)),
    ("blue", Rgb(0, 0, 255)),
    ("red", Rgb(255, 0, 0)),
    ("green", Rgb(0, 128, 0)),
    ("saddlebrown", Rgb(139, 69, 19)),
    ("gold", Rgb(255, 215, 0)),
    ("yellow", Rgb(255, 255, 0)),
    ("lightblue", Rgb(173, 216, 230)),
    ("purple", Rgb(128, 0, 128)),
    ("cyan", Rgb(0, 255, 255)),
    ("magenta", Rgb(255, 0, 255)),
    ("brown", Rgb(165, 42, 42)),
    ("pink", Rgb(255, 192, 203)),
];

impl Rgb {
    /// Parse a colour name (case-insensitive) or a `#rrggbb` hex literal.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        let trimmed = value.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ConfigError::UnknownColor(value.to_string()));
        }
        let lower = trimmed.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, rgb)| *rgb)
            .ok_or_else(|| ConfigError::UnknownColor(value.to_string()))
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

impl TryFrom<String> for Rgb {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::parse(&value)
    }
}

impl From<Rgb> for String {
    fn from(rgb: Rgb) -> Self {
        rgb.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Animation timing and viewport parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub days_per_frame: f64,
    pub interval_ms: u64,
    pub trail_length: usize,
    pub star_count: usize,
    pub axis_limit_au: f64,
    /// Fixed seed for the star field; `None` draws a fresh sky each run.
    pub star_seed: Option<u64>,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            days_per_frame: DAYS_PER_FRAME,
            interval_ms: INTERVAL_MS,
            trail_length: TRAIL_LENGTH,
            star_count: STAR_COUNT,
            axis_limit_au: AXIS_LIMIT_AU,
            star_seed: None,
        }
    }
}

/// Launch-window scan parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub start_year: i32,
    pub end_year: i32,
    pub origin: String,
    pub destination: String,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            start_year: START_YEAR,
            end_year: END_YEAR,
            origin: "earth".to_string(),
            destination: "mars".to_string(),
        }
    }
}

/// A body drawn by the animator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyStyle {
    pub name: String,
    pub color: Rgb,
}

/// Top-level settings document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub animation: AnimationSettings,
    pub windows: WindowSettings,
    pub bodies: Vec<BodyStyle>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            animation: AnimationSettings::default(),
            windows: WindowSettings::default(),
            bodies: default_bodies(),
        }
    }
}

/// The compiled-in body list.
pub fn default_bodies() -> Vec<BodyStyle> {
    TARGET_BODIES
        .iter()
        .map(|&(name, color)| BodyStyle {
            name: name.to_string(),
            color,
        })
        .collect()
}

impl Settings {
    /// Reject settings the scanner or animator cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let anim = &self.animation;
        if !(anim.days_per_frame.is_finite() && anim.days_per_frame > 0.0) {
            return Err(invalid("animation.days_per_frame", "must be a positive number"));
        }
        if anim.interval_ms == 0 {
            return Err(invalid("animation.interval_ms", "must be at least 1"));
        }
        if anim.trail_length == 0 {
            return Err(invalid("animation.trail_length", "must be at least 1"));
        }
        if !(anim.axis_limit_au.is_finite() && anim.axis_limit_au > 0.0) {
            return Err(invalid("animation.axis_limit_au", "must be a positive number"));
        }
        if self.windows.start_year > self.windows.end_year {
            return Err(invalid(
                "windows.start_year",
                format!(
                    "{} is after end_year {}",
                    self.windows.start_year, self.windows.end_year
                ),
            ));
        }
        if self.windows.origin.trim().is_empty() || self.windows.destination.trim().is_empty() {
            return Err(invalid("windows.origin", "body names must not be empty"));
        }
        if self.bodies.is_empty() {
            return Err(invalid("bodies", "at least one body is required"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

/// Load settings from a TOML or YAML file and validate them.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings, ConfigError> {
    let path = path.as_ref();
    let settings: Settings = if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)?
    } else {
        let reader = File::open(path)?;
        serde_yaml::from_reader(reader)?
    };
    settings.validate()?;
    Ok(settings)
}
