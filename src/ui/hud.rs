//! Info panel and status line
//!
//! Text content is built by pure functions; the systems only copy it into
//! the UI nodes.

use bevy::prelude::*;

use crate::catalog::{BodyId, BodyRef, CelestialCatalog};
use crate::orbital::SimulationState;
use crate::ui::state::UiState;

pub const HELP_LINE: &str =
    "0-8 focus | Tab next | , . speed | S slow | Space pause | O orbits | L labels | H panels";

const PANEL_BG: Color = Color::srgba(0.02, 0.04, 0.10, 0.75);
const PANEL_TEXT: Color = Color::srgba(0.85, 0.9, 1.0, 1.0);

/// Root of the info panel describing the focused body.
#[derive(Component)]
pub struct InfoPanel;

#[derive(Component)]
pub struct InfoText;

/// Root of the status bar at the bottom of the window.
#[derive(Component)]
pub struct StatusBar;

#[derive(Component)]
pub struct StatusText;

/// Multi-line description of a catalog entry.
pub fn describe_body(body: BodyRef<'_>) -> String {
    let mut lines = Vec::new();
    match body {
        BodyRef::Star(b) | BodyRef::Planet(b) => {
            lines.push(b.name.to_string());
            lines.push(format!("{}\n", b.description));
            lines.push(format!("Radius: {:.0} km", b.radius_km));
            if !body.is_star() {
                lines.push(format!("Distance from Sun: {:.3} AU", b.distance_from_sun_au));
                lines.push(format!("Orbital period: {:.2} days", b.orbital_period_days));
            }
            lines.push(format!(
                "Rotation period: {:.2} days{}",
                b.rotation_period_days.abs(),
                if b.is_retrograde() { " (retrograde)" } else { "" }
            ));
            lines.push(format!("Axial tilt: {:.2}°", b.axial_tilt_deg));
            lines.push(format!("Size relative to Earth: {:.3}x", b.relative_size));
            if !body.is_star() {
                lines.push(format!("Moons: {}", b.moons.len()));
            }
            lines.push(format!("Rings: {}", if b.has_rings() { "yes" } else { "no" }));
        }
        BodyRef::Moon { moon, parent } => {
            lines.push(moon.name.to_string());
            lines.push(format!("Moon of {}\n", parent.name));
            lines.push(format!("Radius: {:.1} km", moon.radius_km));
            lines.push(format!(
                "Distance from {}: {:.0} km",
                parent.name, moon.distance_from_planet_km
            ));
            lines.push(format!("Orbital period: {:.2} days", moon.orbital_period_days));
        }
    }
    lines.join("\n")
}

/// Human-readable speed multiplier.
pub fn format_speed(state: &SimulationState) -> String {
    if state.is_paused() {
        "paused".to_string()
    } else {
        format!("{}x", state.speed())
    }
}

/// One-line summary of the session.
pub fn status_line(state: &SimulationState) -> String {
    format!(
        "Speed {} | Day {:.1} | {} | Orbits {} | Labels {}",
        format_speed(state),
        state.simulated_days(),
        state.simulated_utc().format("%Y-%m-%d"),
        on_off(state.show_orbits()),
        on_off(state.show_labels()),
    )
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

pub fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(12.0),
                left: Val::Px(12.0),
                max_width: Val::Px(360.0),
                padding: UiRect::all(Val::Px(10.0)),
                ..default()
            },
            BackgroundColor(PANEL_BG),
            InfoPanel,
            Name::new("Info Panel"),
        ))
        .with_child((
            Text::new(""),
            TextFont {
                font_size: 14.0,
                ..default()
            },
            TextColor(PANEL_TEXT),
            InfoText,
        ));

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(12.0),
                left: Val::Px(12.0),
                right: Val::Px(12.0),
                padding: UiRect::all(Val::Px(8.0)),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(PANEL_BG),
            StatusBar,
            Name::new("Status Bar"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(PANEL_TEXT),
                StatusText,
            ));
            parent.spawn((
                Text::new(HELP_LINE),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(PANEL_TEXT.with_alpha(0.6)),
            ));
        });
}

/// Rewrite the info panel when the focus changes.
pub fn update_info_panel(
    catalog: Res<CelestialCatalog>,
    state: Res<SimulationState>,
    mut shown: Local<Option<BodyId>>,
    mut q_text: Query<&mut Text, With<InfoText>>,
) {
    if *shown == Some(state.focused()) {
        return;
    }
    let Ok(body) = catalog.resolve(state.focused().as_str()) else {
        return;
    };
    for mut text in &mut q_text {
        text.0 = describe_body(body);
    }
    *shown = Some(state.focused());
}

pub fn update_status_bar(
    state: Res<SimulationState>,
    mut q_text: Query<&mut Text, With<StatusText>>,
) {
    let line = status_line(&state);
    for mut text in &mut q_text {
        if text.0 != line {
            text.0.clone_from(&line);
        }
    }
}

pub fn sync_panel_visibility(
    ui: Res<UiState>,
    mut panels: Query<&mut Visibility, Or<(With<InfoPanel>, With<StatusBar>)>>,
) {
    if !ui.is_changed() {
        return;
    }
    let target = if ui.show_panels {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    for mut visibility in &mut panels {
        visibility.set_if_neq(target);
    }
}
