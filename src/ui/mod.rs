//! User interface module
//!
//! Keyboard controls, the focused-body info panel and the status bar.

use bevy::prelude::*;

pub mod controls;
pub mod hud;
pub mod state;

pub use controls::{ControlAction, handle_keyboard};
pub use state::UiState;

use crate::orbital::SimulationTick;

/// Plugin for user interface management
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiState>()
            .add_systems(Startup, hud::spawn_hud)
            .add_systems(Update, handle_keyboard.before(SimulationTick))
            .add_systems(
                Update,
                (
                    hud::update_info_panel,
                    hud::update_status_bar,
                    hud::sync_panel_visibility,
                )
                    .after(SimulationTick),
            );
    }
}
