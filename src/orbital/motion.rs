//! Circular orbital motion and axial spin.
//!
//! Every pose is a pure function of the catalog and the simulated time (days).
//! Periods come straight from the catalog rather than being derived from
//! distance.

use std::f64::consts::TAU;

use bevy::math::{DQuat, DVec3};
use bevy::prelude::*;

use crate::catalog::{BodyId, CelestialBody, CelestialCatalog};
use crate::core::scale::{
    MOON_ORBIT_RATE_BOOST, SPIN_RATE_BOOST, STAR_SPIN_RAD_PER_DAY, astronomical_to_scene_distance,
    moon_to_scene_distance,
};
use crate::core::space::orbit_point;

/// Computed placement of one body for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyPose {
    pub id: BodyId,
    /// Planet a moon orbits; `None` for the star and planets.
    pub parent: Option<BodyId>,
    /// Offset from the parent (or from the star for planets).
    pub local_offset: DVec3,
    pub world_position: DVec3,
    /// Axial tilt and spin. `None` when the body gets no spin update.
    pub orientation: Option<DQuat>,
}

/// Poses for every body, star first, each planet followed by its moons.
#[derive(Resource, Clone, Debug, Default, PartialEq)]
pub struct FrameTransforms {
    poses: Vec<BodyPose>,
}

impl FrameTransforms {
    pub fn iter(&self) -> impl Iterator<Item = &BodyPose> {
        self.poses.iter()
    }

    pub fn get(&self, id: &str) -> Option<&BodyPose> {
        self.poses.iter().find(|pose| pose.id.as_str() == id)
    }

    pub fn world_position(&self, id: &str) -> Option<DVec3> {
        self.get(id).map(|pose| pose.world_position)
    }

    pub fn len(&self) -> usize {
        self.poses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }
}

/// Orbital angle (radians) after `days`, or `None` for a body that does not
/// orbit (period 0).
///
/// The revolution count is reduced to [0, 1) in f64 before the trig call so
/// that very large accumulated times do not jitter.
pub fn orbital_angle(orbital_period_days: f64, days: f64) -> Option<f64> {
    if orbital_period_days <= 0.0 || !orbital_period_days.is_finite() {
        return None;
    }
    let revolutions = (days / orbital_period_days).rem_euclid(1.0);
    Some(revolutions * TAU)
}

/// Spin accumulated over `dt_days`; proportional to `dt / rotation_period`.
///
/// A zero rotation period means "no spin update" and yields `None`; a
/// negative period spins the other way.
pub fn spin_increment(rotation_period_days: f64, dt_days: f64) -> Option<f64> {
    if rotation_period_days == 0.0 || !rotation_period_days.is_finite() {
        return None;
    }
    Some(TAU * SPIN_RATE_BOOST * dt_days / rotation_period_days)
}

/// Spin angle (radians) around the body's own axis after `days`: the
/// increment since day 0, wrapped to one turn with the sign of the spin.
pub fn spin_angle(rotation_period_days: f64, days: f64) -> Option<f64> {
    let angle = spin_increment(rotation_period_days, days)?.rem_euclid(TAU);
    Some(if rotation_period_days < 0.0 {
        angle - TAU
    } else {
        angle
    })
}

/// The star turns slowly on its own, independent of any orbit.
pub fn star_spin_angle(days: f64) -> f64 {
    (days * STAR_SPIN_RAD_PER_DAY).rem_euclid(TAU)
}

/// Orientation of a globe: axial tilt about X, then spin about the tilted axis.
pub fn globe_orientation(axial_tilt_deg: f64, spin: f64) -> DQuat {
    DQuat::from_rotation_x(axial_tilt_deg.to_radians()) * DQuat::from_rotation_y(spin)
}

/// Position of a planet relative to the star.
pub fn planet_offset(body: &CelestialBody, days: f64) -> DVec3 {
    match orbital_angle(body.orbital_period_days, days) {
        Some(angle) => orbit_point(
            astronomical_to_scene_distance(body.distance_from_sun_au),
            angle,
        ),
        None => DVec3::ZERO,
    }
}

/// Position of a moon relative to its planet.
pub fn moon_offset(distance_from_planet_km: f64, orbital_period_days: f64, days: f64) -> DVec3 {
    // The boost multiplies the angular rate, i.e. divides the period.
    match orbital_angle(orbital_period_days / MOON_ORBIT_RATE_BOOST, days) {
        Some(angle) => orbit_point(moon_to_scene_distance(distance_from_planet_km), angle),
        None => DVec3::ZERO,
    }
}

/// Compute the pose of every catalog entry at `days`.
pub fn compute_frame(catalog: &CelestialCatalog, days: f64) -> FrameTransforms {
    let mut poses = Vec::with_capacity(catalog.len());

    let sun = catalog.sun();
    poses.push(BodyPose {
        id: sun.id,
        parent: None,
        local_offset: DVec3::ZERO,
        world_position: DVec3::ZERO,
        orientation: Some(globe_orientation(sun.axial_tilt_deg, star_spin_angle(days))),
    });

    for planet in catalog.planets() {
        let offset = planet_offset(planet, days);
        let planet_world = poses[0].world_position + offset;
        poses.push(BodyPose {
            id: planet.id,
            parent: None,
            local_offset: offset,
            world_position: planet_world,
            orientation: spin_angle(planet.rotation_period_days, days)
                .map(|spin| globe_orientation(planet.axial_tilt_deg, spin)),
        });

        for moon in &planet.moons {
            let local = moon_offset(moon.distance_from_planet_km, moon.orbital_period_days, days);
            poses.push(BodyPose {
                id: moon.id,
                parent: Some(planet.id),
                local_offset: local,
                world_position: planet_world + local,
                orientation: None,
            });
        }
    }

    FrameTransforms { poses }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMES: [f64; 7] = [0.0, 0.5, 17.0, 365.25, 1234.5, 99_999.0, 3.65e7];

    fn catalog() -> CelestialCatalog {
        CelestialCatalog::builtin().unwrap()
    }

    #[test]
    fn test_frame_is_deterministic() {
        let catalog = catalog();
        for t in TIMES {
            assert_eq!(compute_frame(&catalog, t), compute_frame(&catalog, t));
        }
    }

    #[test]
    fn test_frame_covers_every_body_in_order() {
        let catalog = catalog();
        let frame = compute_frame(&catalog, 10.0);
        let ids: Vec<&str> = frame.iter().map(|p| p.id.as_str()).collect();
        let expected: Vec<&str> = catalog.all().map(|b| b.id().as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_star_never_orbits() {
        let catalog = catalog();
        for t in TIMES {
            let frame = compute_frame(&catalog, t);
            assert_eq!(frame.world_position("sun"), Some(DVec3::ZERO));
        }
        assert_eq!(orbital_angle(0.0, 100.0), None);
    }

    #[test]
    fn test_planets_stay_on_their_orbit_circle() {
        let catalog = catalog();
        for t in TIMES {
            let frame = compute_frame(&catalog, t);
            for planet in catalog.planets() {
                let pos = frame.world_position(planet.id.as_str()).unwrap();
                let expected = astronomical_to_scene_distance(planet.distance_from_sun_au);
                assert!(
                    (DVec3::new(pos.x, 0.0, pos.z).length() - expected).abs() < 1e-6 * expected,
                    "{} off its orbit at t={}",
                    planet.id,
                    t
                );
                assert_eq!(pos.y, 0.0);
            }
        }
    }

    #[test]
    fn test_moon_world_is_parent_plus_offset() {
        let catalog = catalog();
        for t in TIMES {
            let frame = compute_frame(&catalog, t);
            for pose in frame.iter().filter(|p| p.parent.is_some()) {
                let parent = frame.get(pose.parent.unwrap().as_str()).unwrap();
                let diff = pose.world_position - (parent.world_position + pose.local_offset);
                assert!(diff.length() < 1e-9);
            }
        }
    }

    #[test]
    fn test_moons_orbit_planet_at_scaled_distance() {
        let catalog = catalog();
        let frame = compute_frame(&catalog, 3.3);
        let moon = frame.get("moon").unwrap();
        let expected = moon_to_scene_distance(384_400.0);
        assert!((moon.local_offset.length() - expected).abs() < 1e-9);
        assert_eq!(moon.parent.map(|p| p.as_str()), Some("earth"));
    }

    #[test]
    fn test_earth_completes_one_revolution() {
        let catalog = catalog();
        let start = compute_frame(&catalog, 0.0).world_position("earth").unwrap();
        let radius = astronomical_to_scene_distance(1.0);
        assert!((start - DVec3::new(radius, 0.0, 0.0)).length() < 1e-9);

        let end = compute_frame(&catalog, 365.25).world_position("earth").unwrap();
        assert!((end - start).length() < 1e-6);

        let half = compute_frame(&catalog, 365.25 / 2.0).world_position("earth").unwrap();
        assert!((half - DVec3::new(-radius, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_shorter_period_sweeps_faster() {
        let mercury = orbital_angle(87.97, 10.0).unwrap();
        let earth = orbital_angle(365.25, 10.0).unwrap();
        assert!(mercury > earth);
    }

    #[test]
    fn test_moon_rate_is_boosted() {
        // After a tenth of the Moon's period it has gone all the way around.
        let offset = moon_offset(384_400.0, 27.3, 2.73);
        let start = moon_offset(384_400.0, 27.3, 0.0);
        assert!((offset - start).length() < 1e-6);
    }

    #[test]
    fn test_zero_rotation_period_means_no_spin() {
        assert_eq!(spin_angle(0.0, 42.0), None);
        assert_eq!(spin_increment(0.0, 1.0), None);

        let mut sun = crate::catalog::bodies::sun();
        sun.rotation_period_days = 0.0;
        let mut locked = crate::catalog::bodies::planets();
        locked[0].rotation_period_days = 0.0;
        let catalog = CelestialCatalog::new(sun, locked).unwrap();
        let frame = compute_frame(&catalog, 5.0);
        assert!(frame.get("mercury").unwrap().orientation.is_none());
        // The star's spin does not depend on its rotation period.
        assert!(frame.get("sun").unwrap().orientation.is_some());
    }

    #[test]
    fn test_retrograde_spin_runs_backwards() {
        let dt = 0.01;
        let prograde = spin_increment(243.0, dt).unwrap();
        let retrograde = spin_increment(-243.0, dt).unwrap();
        assert!(prograde > 0.0);
        assert!((prograde + retrograde).abs() < 1e-12);
        assert!(spin_angle(-243.0, 1.0).unwrap() < 0.0);
        assert!(spin_angle(243.0, 1.0).unwrap() > 0.0);
    }

    #[test]
    fn test_spin_angle_matches_accumulated_increments() {
        let period = 1.03;
        let dt = 0.001;
        let mut accumulated = 0.0;
        for _ in 0..100 {
            accumulated += spin_increment(period, dt).unwrap();
        }
        let direct = spin_angle(period, 100.0 * dt).unwrap();
        assert!((accumulated.rem_euclid(TAU) - direct).abs() < 1e-9);
    }

    #[test]
    fn test_large_times_stay_finite_and_continuous() {
        let catalog = catalog();
        let t = 1.0e9;
        let a = compute_frame(&catalog, t).world_position("mercury").unwrap();
        let b = compute_frame(&catalog, t + 0.01).world_position("mercury").unwrap();
        assert!(a.is_finite() && b.is_finite());
        let radius = astronomical_to_scene_distance(0.387);
        // A hundredth of a day moves Mercury a small arc, not a jump.
        let max_step = radius * TAU * 0.01 / 87.97 * 1.01;
        assert!((a - b).length() <= max_step);
    }

    #[test]
    fn test_planet_without_moons_is_fine() {
        let catalog = catalog();
        let frame = compute_frame(&catalog, 1.0);
        assert!(frame.iter().all(|p| p.parent != Some(BodyId::new("mercury"))));
    }
}
