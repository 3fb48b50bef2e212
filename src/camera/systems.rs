use bevy::prelude::*;
use bevy_panorbit_camera::PanOrbitCamera;

use super::MainCamera;
use super::framing::{CameraFraming, frame_body};
use crate::catalog::{BodyId, CelestialCatalog};
use crate::core::space::scene_to_render;
use crate::orbital::{FrameTransforms, SimulationState};

/// Snap the camera onto a newly focused body, then keep the look-at point on
/// it while it moves. Yaw, pitch and zoom stay under the user's control
/// between focus changes.
pub fn follow_focused_body(
    catalog: Res<CelestialCatalog>,
    state: Res<SimulationState>,
    frame: Res<FrameTransforms>,
    mut framed: Local<Option<BodyId>>,
    mut q_camera: Query<&mut PanOrbitCamera, With<MainCamera>>,
) {
    let focused = state.focused();
    let Some(position) = frame.world_position(focused.as_str()) else {
        return;
    };
    let Ok(mut poc) = q_camera.single_mut() else {
        return;
    };

    if *framed != Some(focused) {
        let Ok(body) = catalog.resolve(focused.as_str()) else {
            return;
        };
        let framing = frame_body(position, body.radius_km(), body.is_star());
        snap_to(&mut poc, &framing);
        info!(
            "Camera framing {} at {:.1} scene units",
            body.name(),
            framing.distance()
        );
        *framed = Some(focused);
    } else {
        let target = scene_to_render(position);
        poc.focus = target;
        poc.target_focus = target;
    }
}

/// Move the orbit camera to a framing immediately, without smoothing.
pub fn snap_to(poc: &mut PanOrbitCamera, framing: &CameraFraming) {
    let target = scene_to_render(framing.target);
    let radius = framing.distance() as f32;
    let (yaw, pitch) = framing.yaw_pitch();

    poc.focus = target;
    poc.target_focus = target;
    poc.radius = Some(radius);
    poc.target_radius = radius;
    poc.yaw = Some(yaw);
    poc.target_yaw = yaw;
    poc.pitch = Some(pitch);
    poc.target_pitch = pitch;
    poc.force_update = true;
}
