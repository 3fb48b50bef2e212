//! Scene-space boundary between f64 simulation math and f32 render transforms.
//!
//! Motion is computed in double precision so that angles stay smooth after long
//! sessions; only the final translation is narrowed for Bevy.

use bevy::math::{DQuat, DVec3, Quat, Vec3};

/// Narrow a scene position (f64) to a render translation (f32).
pub fn scene_to_render(scene: DVec3) -> Vec3 {
    scene.as_vec3()
}

/// Narrow a scene orientation to a render rotation.
pub fn scene_rotation_to_render(rotation: DQuat) -> Quat {
    rotation.as_quat()
}

/// Point on a circle of `radius` at `angle` radians. The scene is Y-up and
/// orbits lie in the XZ plane.
pub fn orbit_point(radius: f64, angle: f64) -> DVec3 {
    DVec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_orbit_point_stays_in_plane() {
        for i in 0..16 {
            let angle = i as f64 * PI / 8.0;
            let p = orbit_point(100.0, angle);
            assert_eq!(p.y, 0.0);
            assert!((p.length() - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_orbit_point_reference_direction() {
        let p0 = orbit_point(10.0, 0.0);
        assert!((p0 - DVec3::new(10.0, 0.0, 0.0)).length() < 1e-12);
        let p90 = orbit_point(10.0, FRAC_PI_2);
        assert!((p90 - DVec3::new(0.0, 0.0, 10.0)).length() < 1e-9);
    }

    #[test]
    fn test_scene_to_render_preserves_large_coordinates() {
        let scene = DVec3::new(180_414.0, 0.0, -42.5);
        let render = scene_to_render(scene);
        assert!((render.x as f64 - scene.x).abs() < 0.02);
        assert!((render.z as f64 - scene.z).abs() < 1e-4);
    }
}
