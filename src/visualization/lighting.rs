//! Lighting configuration

use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;

use crate::core::scale::astronomical_to_scene_distance;

/// Marker component for the point light inside the star.
#[derive(Component)]
pub struct SunLight;

/// Luminous power of the star, tuned so Earth's orbit is well lit.
pub const SUN_LIGHT_LUMENS: f32 = 5.0e11;

/// Point light placed at the star's anchor. Reaches past the outermost orbit.
pub fn sun_light() -> impl Bundle {
    (
        PointLight {
            intensity: SUN_LIGHT_LUMENS,
            range: astronomical_to_scene_distance(40.0) as f32,
            radius: 0.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::default(),
        SunLight,
        Name::new("Sun Light"),
    )
}

/// Keeps the night sides and the outer planets from going fully black.
pub fn ambient_light() -> GlobalAmbientLight {
    GlobalAmbientLight {
        brightness: 150.0,
        ..default()
    }
}
