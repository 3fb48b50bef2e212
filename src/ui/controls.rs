//! Keyboard controls
//!
//! Key lookup and action application are plain functions so they can be
//! tested without an app.

use bevy::prelude::*;

use crate::catalog::CelestialCatalog;
use crate::core::CoreError;
use crate::orbital::{SPEED_PRESETS, SimulationState};
use crate::ui::state::UiState;

/// Slow-motion multiplier.
pub const SLOW_MOTION_SPEED: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlAction {
    /// Focus the star or planet with this catalog order.
    FocusOrder(u32),
    FocusNext,
    SpeedUp,
    SpeedDown,
    SlowMotion,
    TogglePause,
    ToggleOrbits,
    ToggleLabels,
    TogglePanels,
}

pub fn action_for_key(key: KeyCode) -> Option<ControlAction> {
    use ControlAction::*;
    let action = match key {
        KeyCode::Digit0 | KeyCode::Numpad0 => FocusOrder(0),
        KeyCode::Digit1 | KeyCode::Numpad1 => FocusOrder(1),
        KeyCode::Digit2 | KeyCode::Numpad2 => FocusOrder(2),
        KeyCode::Digit3 | KeyCode::Numpad3 => FocusOrder(3),
        KeyCode::Digit4 | KeyCode::Numpad4 => FocusOrder(4),
        KeyCode::Digit5 | KeyCode::Numpad5 => FocusOrder(5),
        KeyCode::Digit6 | KeyCode::Numpad6 => FocusOrder(6),
        KeyCode::Digit7 | KeyCode::Numpad7 => FocusOrder(7),
        KeyCode::Digit8 | KeyCode::Numpad8 => FocusOrder(8),
        KeyCode::Tab => FocusNext,
        KeyCode::Period => SpeedUp,
        KeyCode::Comma => SpeedDown,
        KeyCode::KeyS => SlowMotion,
        KeyCode::Space => TogglePause,
        KeyCode::KeyO => ToggleOrbits,
        KeyCode::KeyL => ToggleLabels,
        KeyCode::KeyH => TogglePanels,
        _ => return None,
    };
    Some(action)
}

/// Neighbouring preset above or below `current`. Stays put at either end.
pub fn next_speed_preset(current: f64, up: bool) -> f64 {
    if up {
        SPEED_PRESETS
            .iter()
            .copied()
            .find(|preset| *preset > current)
            .unwrap_or(current)
    } else {
        SPEED_PRESETS
            .iter()
            .rev()
            .copied()
            .find(|preset| *preset < current)
            .unwrap_or(current)
    }
}

/// Apply one action. A failed lookup leaves every state untouched.
pub fn apply_action(
    state: &mut SimulationState,
    ui: &mut UiState,
    catalog: &CelestialCatalog,
    action: ControlAction,
) -> Result<(), CoreError> {
    match action {
        ControlAction::FocusOrder(order) => {
            let id = catalog
                .by_order(order)
                .map(|body| body.id)
                .ok_or_else(|| CoreError::UnknownBody(format!("#{order}")))?;
            state.focus(catalog, id.as_str())?;
        }
        ControlAction::FocusNext => {
            let next = catalog.next_after(state.focused());
            state.focus(catalog, next.as_str())?;
        }
        ControlAction::SpeedUp => state.set_speed(next_speed_preset(state.speed(), true))?,
        ControlAction::SpeedDown => state.set_speed(next_speed_preset(state.speed(), false))?,
        ControlAction::SlowMotion => state.set_speed(SLOW_MOTION_SPEED)?,
        ControlAction::TogglePause => state.toggle_pause(),
        ControlAction::ToggleOrbits => {
            let visible = !state.show_orbits();
            state.set_orbits_visible(visible);
        }
        ControlAction::ToggleLabels => {
            let visible = !state.show_labels();
            state.set_labels_visible(visible);
        }
        ControlAction::TogglePanels => ui.show_panels = !ui.show_panels,
    }
    Ok(())
}

/// Map pressed keys onto actions.
pub fn handle_keyboard(
    input: Res<ButtonInput<KeyCode>>,
    catalog: Res<CelestialCatalog>,
    mut state: ResMut<SimulationState>,
    mut ui: ResMut<UiState>,
) {
    for key in input.get_just_pressed() {
        let Some(action) = action_for_key(*key) else {
            continue;
        };
        match apply_action(&mut state, &mut ui, &catalog, action) {
            Ok(()) => info!(
                "{:?}: focus={} speed={}x orbits={} labels={}",
                action,
                state.focused(),
                state.speed(),
                state.show_orbits(),
                state.show_labels()
            ),
            Err(e) if e.is_lookup_failure() => debug!("Ignoring {:?}: {}", action, e),
            Err(e) => warn!("Ignoring {:?}: {}", action, e),
        }
    }
}
