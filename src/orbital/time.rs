//! Simulation clock and session state

use bevy::prelude::*;
use chrono::{DateTime, Duration, Utc};

use crate::catalog::{BodyId, CelestialCatalog};
use crate::config::Settings;
use crate::core::CoreError;
use crate::core::scale::advance_simulated_time;
use crate::orbital::motion::{FrameTransforms, compute_frame};

/// Speed multipliers offered by the controls. Any finite value >= 0 is accepted.
pub const SPEED_PRESETS: [f64; 6] = [0.1, 0.5, 1.0, 10.0, 100.0, 1000.0];

/// Mutable per-session state. Only changed through the methods below.
#[derive(Resource, Debug, Clone)]
pub struct SimulationState {
    simulated_days: f64,
    speed: f64,
    /// Speed to restore when unpausing.
    resume_speed: f64,
    focused: BodyId,
    show_orbits: bool,
    show_labels: bool,
    epoch_utc: DateTime<Utc>,
}

impl SimulationState {
    /// Fresh session focused on the star at 1x.
    pub fn new(catalog: &CelestialCatalog) -> Self {
        Self {
            simulated_days: 0.0,
            speed: 1.0,
            resume_speed: 1.0,
            focused: catalog.sun().id,
            show_orbits: true,
            show_labels: true,
            epoch_utc: Utc::now(),
        }
    }

    /// Session seeded from user settings. Bad values fall back with a warning.
    pub fn from_settings(catalog: &CelestialCatalog, settings: &Settings) -> Self {
        let mut state = Self::new(catalog);
        if let Err(e) = state.set_speed(settings.initial_speed) {
            warn!("Settings: {}; starting at {}x", e, state.speed);
        }
        if let Err(e) = state.focus(catalog, &settings.initial_focus) {
            warn!("Settings: {}; focusing {}", e, state.focused);
        }
        state.show_orbits = settings.show_orbits;
        state.show_labels = settings.show_labels;
        if let Some(epoch) = settings.epoch_utc {
            state.epoch_utc = epoch;
        }
        state
    }

    pub fn simulated_days(&self) -> f64 {
        self.simulated_days
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn is_paused(&self) -> bool {
        self.speed == 0.0
    }

    pub fn focused(&self) -> BodyId {
        self.focused
    }

    pub fn show_orbits(&self) -> bool {
        self.show_orbits
    }

    pub fn show_labels(&self) -> bool {
        self.show_labels
    }

    /// Calendar date corresponding to the simulated clock.
    pub fn simulated_utc(&self) -> DateTime<Utc> {
        let millis = (self.simulated_days * 86_400_000.0).min(i64::MAX as f64) as i64;
        Duration::try_milliseconds(millis)
            .and_then(|offset| self.epoch_utc.checked_add_signed(offset))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Set the speed multiplier. 0 pauses.
    pub fn set_speed(&mut self, speed: f64) -> Result<(), CoreError> {
        if !speed.is_finite() || speed < 0.0 {
            return Err(CoreError::InvalidSpeed(speed));
        }
        self.speed = speed;
        if speed > 0.0 {
            self.resume_speed = speed;
        }
        Ok(())
    }

    /// Pause, or resume at the last non-zero speed.
    pub fn toggle_pause(&mut self) {
        if self.is_paused() {
            self.speed = self.resume_speed;
        } else {
            self.speed = 0.0;
        }
    }

    /// Change focus. An unknown identifier leaves the state untouched.
    pub fn focus(&mut self, catalog: &CelestialCatalog, id: &str) -> Result<BodyId, CoreError> {
        let body = catalog.resolve(id)?;
        self.focused = body.id();
        Ok(self.focused)
    }

    /// Returns true if the flag changed.
    pub fn set_orbits_visible(&mut self, visible: bool) -> bool {
        let changed = self.show_orbits != visible;
        self.show_orbits = visible;
        changed
    }

    /// Returns true if the flag changed.
    pub fn set_labels_visible(&mut self, visible: bool) -> bool {
        let changed = self.show_labels != visible;
        self.show_labels = visible;
        changed
    }

    /// Advance the clock by one frame of real time and compute every pose.
    pub fn tick(
        &mut self,
        catalog: &CelestialCatalog,
        elapsed_real_seconds: f64,
    ) -> FrameTransforms {
        self.simulated_days =
            advance_simulated_time(elapsed_real_seconds, self.speed, self.simulated_days);
        compute_frame(catalog, self.simulated_days)
    }
}
