use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowPlugin};

use bevy_panorbit_camera::{PanOrbitCamera, PanOrbitCameraPlugin};

#[cfg(feature = "dev")]
use bevy::dev_tools::fps_overlay::FpsOverlayPlugin;

mod camera;
mod catalog;
mod config;
mod core;
mod orbital;
mod ui;
mod visualization;

use camera::{FocusCameraPlugin, MainCamera};
use catalog::CelestialCatalog;
use orbital::{OrbitalPlugin, SimulationState};
use ui::UiPlugin;
use visualization::VisualizationPlugin;

/// Initial eye distance before the first body is framed.
const INITIAL_CAMERA_DISTANCE: f32 = 20_000.0;

// Setup cameras
pub fn setup(mut commands: Commands) {
    let pan_orbit = PanOrbitCamera {
        focus: Vec3::ZERO,
        radius: Some(INITIAL_CAMERA_DISTANCE),
        yaw: Some(0.0),
        pitch: Some(0.3),
        force_update: true,
        ..default()
    };

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            // Default far plane clips the outer planets and the starfield.
            near: 0.01,
            far: 2_000_000.0,
            ..default()
        }),
        Camera {
            order: 0,
            clear_color: ClearColorConfig::Custom(Color::srgb_u8(0x05, 0x0A, 0x20)),
            ..default()
        },
        pan_orbit,
        MainCamera,
        Tonemapping::TonyMcMapface,
        Transform::from_xyz(0.0, 0.0, INITIAL_CAMERA_DISTANCE).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn main() -> anyhow::Result<()> {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Bevy Solar System".to_string(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }));

    #[cfg(feature = "dev")]
    app.add_plugins(FpsOverlayPlugin::default());

    let settings = config::load_settings();
    let catalog = CelestialCatalog::builtin()?;
    info!(
        "Catalog: {} planets, {} bodies in total",
        catalog.planets().len(),
        catalog.len()
    );
    let state = SimulationState::from_settings(&catalog, &settings);

    app.insert_resource(settings)
        .insert_resource(catalog)
        .insert_resource(state);

    app.add_plugins(PanOrbitCameraPlugin);

    // Add our custom plugins
    app.add_plugins(OrbitalPlugin);
    app.add_plugins(VisualizationPlugin);
    app.add_plugins(FocusCameraPlugin);
    app.add_plugins(UiPlugin);
    app.add_systems(Startup, setup);

    app.run();
    Ok(())
}
