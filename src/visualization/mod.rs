//! Visualization module
//!
//! Builds the scene graph for the catalog (globes, rings, atmospheres, moons,
//! lighting, starfield) and renders orbit paths and labels.

use bevy::prelude::*;
use bevy::ui::UiSystems;
use bevy_panorbit_camera::PanOrbitCameraSystemSet;

pub mod bodies;
pub mod labels;
pub mod lighting;
pub mod orbits;
pub mod starfield;

pub use bodies::{BodyAnchor, BodyGlobe, spawn_bodies};
pub use labels::{BodyLabel, place_labels, spawn_labels, sync_label_visibility};
pub use lighting::SunLight;
pub use orbits::{OrbitPaths, draw_orbit_paths, sync_orbit_visibility};
pub use starfield::spawn_starfield;

use crate::orbital::SimulationTick;

/// Plugin for the rendered scene
pub struct VisualizationPlugin;

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitPaths>()
            .insert_resource(lighting::ambient_light())
            .add_systems(Startup, (spawn_bodies, spawn_labels, spawn_starfield))
            .add_systems(
                Update,
                (
                    sync_orbit_visibility,
                    draw_orbit_paths.after(sync_orbit_visibility),
                    sync_label_visibility,
                )
                    .after(SimulationTick),
            )
            .add_systems(
                PostUpdate,
                place_labels
                    .after(PanOrbitCameraSystemSet)
                    .before(UiSystems::Layout),
            );
    }
}
