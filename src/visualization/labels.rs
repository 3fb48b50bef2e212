//! Screen-space planet labels
//!
//! Created once at startup. Afterwards only their placement and visibility
//! change.

use bevy::prelude::*;

use crate::camera::MainCamera;
use crate::catalog::{BodyId, CelestialCatalog};
use crate::core::scale::display_radius;
use crate::core::space::scene_to_render;
use crate::orbital::{FrameTransforms, SimulationState};

const LABEL_FONT_SIZE: f32 = 14.0;

/// Pixel gap between the projected body top and the label.
const LABEL_LIFT_PX: f32 = 18.0;

#[derive(Component, Debug, Clone, Copy)]
pub struct BodyLabel(pub BodyId);

/// One label per planet.
pub fn spawn_labels(
    mut commands: Commands,
    catalog: Res<CelestialCatalog>,
    state: Res<SimulationState>,
) {
    let visibility = label_visibility(state.show_labels());
    for planet in catalog.planets() {
        commands.spawn((
            Text::new(planet.name),
            TextFont {
                font_size: LABEL_FONT_SIZE,
                ..default()
            },
            TextColor(Color::srgba(0.85, 0.9, 1.0, 0.9)),
            Node {
                position_type: PositionType::Absolute,
                ..default()
            },
            visibility,
            BodyLabel(planet.id),
            Name::new(format!("{} label", planet.name)),
        ));
    }
}

fn label_visibility(visible: bool) -> Visibility {
    if visible {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    }
}

/// Show or hide every label. Only touches labels whose flag differs, so a
/// redundant call changes nothing.
pub fn set_labels_visible<'a>(
    labels: impl IntoIterator<Item = Mut<'a, Visibility>>,
    visible: bool,
) -> usize {
    let target = label_visibility(visible);
    labels
        .into_iter()
        .map(|mut visibility| visibility.set_if_neq(target))
        .filter(|changed| *changed)
        .count()
}

/// Follow the session's label flag.
pub fn sync_label_visibility(
    state: Res<SimulationState>,
    mut labels: Query<&mut Visibility, With<BodyLabel>>,
) {
    if !state.is_changed() {
        return;
    }
    let changed = set_labels_visible(labels.iter_mut(), state.show_labels());
    if changed > 0 {
        debug!("Labels visible: {}", state.show_labels());
    }
}

/// Pin each label just above its body on screen. Labels for bodies behind the
/// camera are taken out of the layout.
///
/// Runs before UI layout, which is ahead of transform propagation, so the
/// camera pose comes from its local `Transform` (it has no parent) and body
/// positions from this frame's poses.
pub fn place_labels(
    catalog: Res<CelestialCatalog>,
    frame: Res<FrameTransforms>,
    q_camera: Query<(&Camera, &Transform), With<MainCamera>>,
    mut labels: Query<(&BodyLabel, &mut Node)>,
) {
    if frame.is_empty() {
        return;
    }
    let Ok((camera, transform)) = q_camera.single() else {
        return;
    };
    let camera_transform = GlobalTransform::from(*transform);

    for (label, mut node) in &mut labels {
        let Some(position) = frame.world_position(label.0.as_str()) else {
            continue;
        };
        let lift = catalog
            .find(label.0.as_str())
            .map(|body| display_radius(body.size_class(), body.radius_km()) as f32)
            .unwrap_or_default();
        let world = scene_to_render(position) + Vec3::Y * lift;

        match camera.world_to_viewport(&camera_transform, world) {
            Ok(screen) => {
                node.display = Display::Flex;
                node.left = Val::Px(screen.x);
                node.top = Val::Px(screen.y - LABEL_LIFT_PX);
            }
            Err(_) => node.display = Display::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::camera::{ComputedCameraValues, RenderTargetInfo};
    use std::f32::consts::FRAC_PI_4;

    fn test_app() -> App {
        let catalog = CelestialCatalog::builtin().unwrap();
        let state = SimulationState::new(&catalog);
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(catalog)
            .insert_resource(state)
            .add_systems(Startup, spawn_labels)
            .add_systems(Update, sync_label_visibility);
        app
    }

    fn label_states(app: &mut App) -> Vec<Visibility> {
        let mut query = app
            .world_mut()
            .query_filtered::<&Visibility, With<BodyLabel>>();
        query.iter(app.world()).copied().collect()
    }

    #[test]
    fn test_one_label_per_planet() {
        let mut app = test_app();
        app.update();
        let states = label_states(&mut app);
        assert_eq!(states.len(), 8);
        assert!(states.iter().all(|v| *v == Visibility::Inherited));
    }

    #[test]
    fn test_toggle_hides_without_respawning() {
        let mut app = test_app();
        app.update();

        app.world_mut()
            .resource_mut::<SimulationState>()
            .set_labels_visible(false);
        app.update();
        assert!(label_states(&mut app).iter().all(|v| *v == Visibility::Hidden));

        // Redundant request: nothing changes.
        app.world_mut()
            .resource_mut::<SimulationState>()
            .set_labels_visible(false);
        app.update();
        let states = label_states(&mut app);
        assert_eq!(states.len(), 8);
        assert!(states.iter().all(|v| *v == Visibility::Hidden));
    }

    fn viewport_camera(width: u32, height: u32) -> Camera {
        Camera {
            computed: ComputedCameraValues {
                clip_from_view: Mat4::perspective_infinite_reverse_rh(
                    FRAC_PI_4,
                    width as f32 / height as f32,
                    0.1,
                ),
                target_info: Some(RenderTargetInfo {
                    physical_size: UVec2::new(width, height),
                    scale_factor: 1.0,
                }),
                ..default()
            },
            ..default()
        }
    }

    fn label_node(app: &mut App, id: &str) -> Node {
        let mut query = app.world_mut().query::<(&BodyLabel, &Node)>();
        query
            .iter(app.world())
            .find(|(label, _)| label.0.as_str() == id)
            .map(|(_, node)| node.clone())
            .unwrap()
    }

    #[test]
    fn test_labels_follow_camera_moved_this_frame() {
        let mut app = test_app();
        let frame = {
            let catalog = app.world().resource::<CelestialCatalog>();
            crate::orbital::compute_frame(catalog, 0.0)
        };
        let earth = scene_to_render(frame.world_position("earth").unwrap());
        app.insert_resource(frame)
            .add_systems(Update, place_labels.after(sync_label_visibility));

        // Only the local transform points at Earth; the global transform is
        // still the identity, as it would be before propagation.
        app.world_mut().spawn((
            viewport_camera(800, 600),
            Transform::from_translation(earth + Vec3::new(0.0, 0.0, 50.0))
                .looking_at(earth, Vec3::Y),
            GlobalTransform::IDENTITY,
            MainCamera,
        ));
        app.update();

        let node = label_node(&mut app, "earth");
        assert_eq!(node.display, Display::Flex);
        let Val::Px(left) = node.left else {
            panic!("label not placed: {:?}", node.left);
        };
        let Val::Px(top) = node.top else {
            panic!("label not placed: {:?}", node.top);
        };
        assert!((left - 400.0).abs() < 1.0, "left = {left}");
        assert!(top < 300.0, "top = {top}");
    }
}
