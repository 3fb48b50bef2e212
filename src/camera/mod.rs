//! Camera module
//!
//! Framing policy for the focused body and the systems that drive the orbit
//! camera with it.

use bevy::prelude::*;

pub mod framing;
pub mod systems;

pub use framing::{CameraFraming, frame_body};
pub use systems::follow_focused_body;

use crate::orbital::SimulationTick;

/// Marker for the main orbit camera.
#[derive(Component)]
pub struct MainCamera;

/// Plugin that keeps the main camera on the focused body.
pub struct FocusCameraPlugin;

impl Plugin for FocusCameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, follow_focused_body.after(SimulationTick));
    }
}
