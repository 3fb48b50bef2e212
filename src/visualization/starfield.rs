//! Starfield backdrop
//!
//! A fixed, seeded scatter of tiny unlit spheres on a shell far outside the
//! outermost orbit.

use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Settings;

/// Shell radius in scene units.
pub const STARFIELD_RADIUS: f32 = 400_000.0;

const STAR_SIZE: f32 = 350.0;

#[derive(Component)]
pub struct BackgroundStar;

/// Uniformly distributed points on a sphere. Same seed, same field.
pub fn star_positions(count: usize, radius: f32, seed: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let theta = rng.gen_range(0.0..TAU);
            // Uniform in cos(phi) so the poles are not over-populated.
            let cos_phi: f32 = rng.gen_range(-1.0..=1.0);
            let sin_phi = (1.0 - cos_phi * cos_phi).max(0.0).sqrt();
            Vec3::new(
                radius * sin_phi * theta.cos(),
                radius * cos_phi,
                radius * sin_phi * theta.sin(),
            )
        })
        .collect()
}

pub fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<Settings>,
) {
    let mesh = meshes.add(Sphere::new(STAR_SIZE).mesh().uv(8, 4));
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        ..default()
    });

    let positions = star_positions(settings.star_count, STARFIELD_RADIUS, settings.star_seed);
    commands.spawn_batch(positions.into_iter().map(move |position| {
        (
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(position),
            BackgroundStar,
        )
    }));
    info!("Starfield: {} stars", settings.star_count);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_field() {
        assert_eq!(star_positions(50, 10.0, 7), star_positions(50, 10.0, 7));
        assert_ne!(star_positions(50, 10.0, 7), star_positions(50, 10.0, 8));
    }

    #[test]
    fn test_stars_lie_on_the_shell() {
        for p in star_positions(500, STARFIELD_RADIUS, 1) {
            assert!((p.length() - STARFIELD_RADIUS).abs() < STARFIELD_RADIUS * 1e-4);
        }
    }

    #[test]
    fn test_shell_encloses_every_orbit() {
        use crate::catalog::CelestialCatalog;
        use crate::core::scale::astronomical_to_scene_distance;
        let catalog = CelestialCatalog::builtin().unwrap();
        for planet in catalog.planets() {
            let orbit = astronomical_to_scene_distance(planet.distance_from_sun_au) as f32;
            assert!(orbit * 2.0 < STARFIELD_RADIUS, "{}", planet.id);
        }
    }

    #[test]
    fn test_both_hemispheres_populated() {
        let points = star_positions(1000, 1.0, 3);
        let north = points.iter().filter(|p| p.y > 0.0).count();
        assert!(north > 350 && north < 650);
    }

    #[test]
    fn test_zero_count() {
        assert!(star_positions(0, 1.0, 0).is_empty());
    }
}
