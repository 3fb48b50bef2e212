//! Orbit path rendering
//!
//! Paths are derived from the catalog through the same distance scale the
//! motion engine uses, so a planet always sits on its drawn circle.

use std::f64::consts::TAU;

use bevy::prelude::*;

use crate::catalog::{BodyId, CelestialCatalog, parse_color};
use crate::core::scale::astronomical_to_scene_distance;
use crate::core::space::{orbit_point, scene_to_render};
use crate::orbital::SimulationState;

/// Segments per orbit circle.
pub const ORBIT_SEGMENTS: usize = 128;

const ORBIT_ALPHA: f32 = 0.35;

/// One planet's orbit as a closed line strip.
#[derive(Clone, Debug, PartialEq)]
pub struct OrbitPath {
    pub id: BodyId,
    pub color: Color,
    /// `ORBIT_SEGMENTS + 1` points; the last repeats the first.
    pub points: Vec<Vec3>,
}

/// The set of orbit paths currently shown. Empty while orbits are hidden.
#[derive(Resource, Default, Debug)]
pub struct OrbitPaths {
    visible: bool,
    paths: Vec<OrbitPath>,
}

impl OrbitPaths {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn paths(&self) -> &[OrbitPath] {
        &self.paths
    }

    /// Show or hide every orbit path. Setting the current value is a no-op.
    /// Returns true if anything changed.
    pub fn set_visible(&mut self, catalog: &CelestialCatalog, visible: bool) -> bool {
        if self.visible == visible {
            return false;
        }
        self.visible = visible;
        self.paths = if visible {
            orbit_paths(catalog)
        } else {
            Vec::new()
        };
        true
    }
}

/// Orbit circle of every planet, centered on the star.
pub fn orbit_paths(catalog: &CelestialCatalog) -> Vec<OrbitPath> {
    catalog
        .planets()
        .iter()
        .map(|planet| {
            let radius = astronomical_to_scene_distance(planet.distance_from_sun_au);
            let points = (0..=ORBIT_SEGMENTS)
                .map(|i| {
                    let angle = TAU * i as f64 / ORBIT_SEGMENTS as f64;
                    scene_to_render(orbit_point(radius, angle))
                })
                .collect();
            OrbitPath {
                id: planet.id,
                color: parse_color(planet.color)
                    .unwrap_or(Color::WHITE)
                    .with_alpha(ORBIT_ALPHA),
                points,
            }
        })
        .collect()
}

/// Follow the session's orbit flag.
pub fn sync_orbit_visibility(
    catalog: Res<CelestialCatalog>,
    state: Res<SimulationState>,
    mut orbits: ResMut<OrbitPaths>,
) {
    if orbits.is_visible() == state.show_orbits() {
        return;
    }
    orbits.set_visible(&catalog, state.show_orbits());
    debug!("Orbit paths visible: {}", orbits.is_visible());
}

pub fn draw_orbit_paths(orbits: Res<OrbitPaths>, mut gizmos: Gizmos) {
    for path in orbits.paths() {
        gizmos.linestrip(path.points.iter().copied(), path.color);
    }
}
