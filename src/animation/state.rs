//! Animator state: simulated clock plus one bounded trail per body.

use std::collections::VecDeque;

use solar_config::{AnimationSettings, BodyStyle, Rgb};
use solar_core::planar::PlanarPosition;
use solar_ephem::bodies::display_name;
use solar_ephem::{EphemerisProvider, Epoch};
use tracing::debug;

use super::AnimationError;
use super::projection::exaggerate;

/// One body as drawn in a frame. Positions in `display` and `trail` are exaggerated.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyFrame {
    pub name: String,
    pub label: String,
    pub color: Rgb,
    /// Heliocentric position in AU.
    pub position: PlanarPosition,
    pub display: PlanarPosition,
    /// Oldest first, ending with `display`.
    pub trail: Vec<PlanarPosition>,
}

/// Snapshot returned by [`AnimatorState::step`].
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub epoch: Epoch,
    pub elapsed_days: f64,
    pub bodies: Vec<BodyFrame>,
}

impl Frame {
    /// `"Date: YYYY-MM-DD"` overlay text.
    pub fn date_text(&self) -> String {
        match self.epoch.utc_date() {
            Some(date) => format!("Date: {}", date.format("%Y-%m-%d")),
            None => format!("Date: {}", self.epoch),
        }
    }
}

#[derive(Debug, Clone)]
struct Track {
    style: BodyStyle,
    label: String,
    trail: VecDeque<PlanarPosition>,
}

/// Simulated clock and per-body trails driving the animation.
#[derive(Debug, Clone)]
pub struct AnimatorState {
    start: Epoch,
    elapsed_days: f64,
    days_per_frame: f64,
    trail_length: usize,
    axis_limit_au: f64,
    tracks: Vec<Track>,
}

impl AnimatorState {
    pub fn new(start: Epoch, bodies: &[BodyStyle], settings: &AnimationSettings) -> Self {
        let trail_length = settings.trail_length.max(1);
        Self {
            start,
            elapsed_days: 0.0,
            days_per_frame: settings.days_per_frame,
            trail_length,
            axis_limit_au: settings.axis_limit_au,
            tracks: bodies
                .iter()
                .map(|style| Track {
                    label: display_name(&style.name),
                    style: style.clone(),
                    trail: VecDeque::with_capacity(trail_length + 1),
                })
                .collect(),
        }
    }

    /// Epoch of the most recent frame (the start epoch before the first step).
    pub fn epoch(&self) -> Epoch {
        self.start.plus_days(self.elapsed_days)
    }

    pub fn elapsed_days(&self) -> f64 {
        self.elapsed_days
    }

    pub fn axis_limit_au(&self) -> f64 {
        self.axis_limit_au
    }

    /// Advance the clock by one frame, resolve every body and extend the trails.
    ///
    /// Nothing is modified when any body fails to resolve.
    pub fn step<P>(&mut self, provider: &P) -> Result<Frame, AnimationError>
    where
        P: EphemerisProvider + ?Sized,
    {
        let elapsed_days = self.elapsed_days + self.days_per_frame;
        let epoch = self.start.plus_days(elapsed_days);

        let positions = self
            .tracks
            .iter()
            .map(|track| {
                provider
                    .position(&track.style.name, &epoch)
                    .map_err(|source| AnimationError::Ephemeris {
                        body: track.style.name.clone(),
                        epoch,
                        source,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.elapsed_days = elapsed_days;
        let mut bodies = Vec::with_capacity(self.tracks.len());
        for (track, position) in self.tracks.iter_mut().zip(positions) {
            let display = exaggerate(position, self.axis_limit_au);
            track.trail.push_back(display);
            while track.trail.len() > self.trail_length {
                track.trail.pop_front();
            }
            bodies.push(BodyFrame {
                name: track.style.name.clone(),
                label: track.label.clone(),
                color: track.style.color,
                position,
                display,
                trail: track.trail.iter().copied().collect(),
            });
        }
        debug!(%epoch, elapsed_days, "animation step");

        Ok(Frame {
            epoch,
            elapsed_days,
            bodies,
        })
    }
}
