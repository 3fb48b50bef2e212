//! Where to put the camera to look at a body.
//!
//! The distance scales with the body's physical size so one formula works from
//! Deimos up to the Sun.

use bevy::math::DVec3;
use bevy::prelude::*;

use crate::core::CoreError;
use crate::core::scale::physical_to_scene_size;

/// Eye distance in multiples of the body's scene size.
pub const STAR_VIEW_MULTIPLIER: f64 = 20.0;
pub const BODY_VIEW_MULTIPLIER: f64 = 50.0;

/// Eye distance used when the size-relative distance would be smaller.
pub const MIN_VIEW_DISTANCE: f64 = 0.05;

/// Oblique viewing direction (before normalization): above and to the side.
const VIEW_DIRECTION: DVec3 = DVec3::new(1.0, 1.0 / 1.5, 1.0);

/// Look-at point and camera offset from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraFraming {
    pub target: DVec3,
    pub eye_offset: DVec3,
}

impl CameraFraming {
    pub fn distance(&self) -> f64 {
        self.eye_offset.length()
    }

    /// Yaw and pitch of the eye around the target, in the orbit camera's
    /// convention (yaw about +Y from +Z, pitch up from the XZ plane).
    pub fn yaw_pitch(&self) -> (f32, f32) {
        let dir = self.eye_offset.normalize_or(VIEW_DIRECTION.normalize());
        let pitch = dir.y.clamp(-1.0, 1.0).asin();
        let yaw = dir.x.atan2(dir.z);
        (yaw as f32, pitch as f32)
    }
}

/// Frame a body of `radius_km` sitting at `world_position`.
///
/// Degenerate inputs are clamped rather than propagated: a non-finite
/// position targets the origin and a bad radius gets the minimum distance.
pub fn frame_body(world_position: DVec3, radius_km: f64, is_star: bool) -> CameraFraming {
    let target = if world_position.is_finite() {
        world_position
    } else {
        warn!(
            "{}",
            CoreError::NumericDegeneracy(format!("camera target {world_position}"))
        );
        DVec3::ZERO
    };

    CameraFraming {
        target,
        eye_offset: VIEW_DIRECTION.normalize() * view_distance(radius_km, is_star),
    }
}

/// Size-relative eye distance, floored at `MIN_VIEW_DISTANCE`.
pub fn view_distance(radius_km: f64, is_star: bool) -> f64 {
    let multiplier = if is_star {
        STAR_VIEW_MULTIPLIER
    } else {
        BODY_VIEW_MULTIPLIER
    };
    let distance = physical_to_scene_size(radius_km) * multiplier;
    if distance.is_finite() && distance > MIN_VIEW_DISTANCE {
        distance
    } else {
        MIN_VIEW_DISTANCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CelestialCatalog;
    use crate::core::scale::{SizeClass, display_radius};
    use crate::orbital::compute_frame;

    #[test]
    fn test_extreme_sizes_get_usable_offsets() {
        for (radius, is_star) in [(696_340.0, true), (6.2, false)] {
            let framing = frame_body(DVec3::ZERO, radius, is_star);
            let d = framing.distance();
            assert!(d.is_finite() && d > 0.0, "radius {radius} gave {d}");
        }
    }

    #[test]
    fn test_degenerate_inputs_use_floor() {
        for radius in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let framing = frame_body(DVec3::ONE, radius, false);
            assert!((framing.distance() - MIN_VIEW_DISTANCE).abs() < 1e-12);
        }
        let framing = frame_body(DVec3::new(f64::NAN, 0.0, 0.0), 6371.0, false);
        assert_eq!(framing.target, DVec3::ZERO);
        assert!((framing.target + framing.eye_offset).is_finite());
    }

    #[test]
    fn test_offset_is_oblique() {
        let framing = frame_body(DVec3::ZERO, 6371.0, false);
        let dir = framing.eye_offset.normalize();
        assert!(dir.x.abs() > 0.1 && dir.y.abs() > 0.1 && dir.z.abs() > 0.1);
    }

    #[test]
    fn test_eye_clears_every_drawn_body() {
        let catalog = CelestialCatalog::builtin().unwrap();
        for body in catalog.all() {
            let framing = frame_body(DVec3::ZERO, body.radius_km(), body.is_star());
            let drawn = display_radius(body.size_class(), body.radius_km());
            let clearance = if body.size_class() == SizeClass::Star {
                // Corona shell.
                drawn * 1.2
            } else {
                drawn
            };
            assert!(framing.distance() > clearance, "{} inside its own mesh", body.id());
        }
    }

    #[test]
    fn test_star_then_earth_differ() {
        let catalog = CelestialCatalog::builtin().unwrap();
        let frame = compute_frame(&catalog, 100.0);
        let sun = catalog.resolve("sun").unwrap();
        let earth = catalog.resolve("earth").unwrap();

        let a = frame_body(frame.world_position("sun").unwrap(), sun.radius_km(), true);
        let b = frame_body(frame.world_position("earth").unwrap(), earth.radius_km(), false);
        assert_ne!(a.target, b.target);
        assert_ne!(a.eye_offset, b.eye_offset);
        assert!(a.distance() > b.distance());
    }

    #[test]
    fn test_yaw_pitch_matches_offset() {
        let framing = frame_body(DVec3::ZERO, 6371.0, false);
        let (yaw, pitch) = framing.yaw_pitch();
        let d = framing.distance() as f32;
        let rebuilt = Vec3::new(
            d * pitch.cos() * yaw.sin(),
            d * pitch.sin(),
            d * pitch.cos() * yaw.cos(),
        );
        assert!((rebuilt - framing.eye_offset.as_vec3()).length() < 1e-3);
    }
}
