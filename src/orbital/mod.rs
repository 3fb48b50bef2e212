//! Orbital motion module
//!
//! Owns the simulation clock, computes per-frame poses and pushes them into
//! the scene through the body registry.

use bevy::prelude::*;

use crate::catalog::CelestialCatalog;

pub mod motion;
pub mod registry;
pub mod time;

pub use motion::{BodyPose, FrameTransforms, compute_frame};
pub use registry::{BodyHandle, BodyRegistry};
pub use time::{SPEED_PRESETS, SimulationState};

/// System set for the tick, so camera and labels can run after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimulationTick;

/// Plugin for the simulation clock and body motion.
///
/// Expects `CelestialCatalog` and `SimulationState` to be inserted by the app.
pub struct OrbitalPlugin;

impl Plugin for OrbitalPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BodyRegistry>()
            .init_resource::<FrameTransforms>()
            .add_systems(Update, run_simulation_tick.in_set(SimulationTick));
    }
}

/// Advance the clock by the frame's real elapsed time and move every body.
pub fn run_simulation_tick(
    time: Res<Time>,
    catalog: Res<CelestialCatalog>,
    mut state: ResMut<SimulationState>,
    registry: Res<BodyRegistry>,
    mut current: ResMut<FrameTransforms>,
    mut transforms: Query<&mut Transform>,
    mut warned: Local<bool>,
) {
    let frame = state.tick(&catalog, time.delta_secs_f64());
    let applied = registry.apply_frame(&catalog, &frame, &mut transforms);
    if applied < frame.len() && !*warned {
        warn!(
            "Only {} of {} bodies have scene nodes; the rest are not drawn",
            applied,
            frame.len()
        );
        *warned = true;
    }
    *current = frame;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let catalog = CelestialCatalog::builtin().unwrap();
        let state = SimulationState::new(&catalog);
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(catalog)
            .insert_resource(state)
            .add_plugins(OrbitalPlugin);
        app
    }

    fn register(app: &mut App, id: &str) -> BodyHandle {
        let anchor = app.world_mut().spawn(Transform::default()).id();
        let globe = app.world_mut().spawn(Transform::default()).id();
        let handle = BodyHandle { anchor, globe };
        let world = app.world_mut();
        world.resource_scope(|world, mut registry: Mut<BodyRegistry>| {
            let catalog = world.resource::<CelestialCatalog>();
            registry.register(catalog, id, handle).unwrap();
        });
        handle
    }

    #[test]
    fn test_tick_moves_registered_anchor() {
        let mut app = test_app();
        let earth = register(&mut app, "earth");
        app.update();

        let frame = app.world().resource::<FrameTransforms>();
        assert_eq!(frame.len(), app.world().resource::<CelestialCatalog>().len());
        let expected = frame.world_position("earth").unwrap().as_vec3();

        let anchor = app.world().get::<Transform>(earth.anchor).unwrap();
        assert!((anchor.translation - expected).length() < 1e-2);
        assert!(anchor.translation.length() > 5_999.0);
    }

    #[test]
    fn test_paused_app_keeps_clock() {
        let mut app = test_app();
        app.world_mut()
            .resource_mut::<SimulationState>()
            .set_speed(0.0)
            .unwrap();
        app.update();
        app.update();
        let state = app.world().resource::<SimulationState>();
        assert_eq!(state.simulated_days(), 0.0);
    }
}
