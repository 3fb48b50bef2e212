//! UI state management

use bevy::prelude::*;

/// Panel visibility, independent of the simulation state.
#[derive(Resource, Debug)]
pub struct UiState {
    pub show_panels: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { show_panels: true }
    }
}
