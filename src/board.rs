//! Windowed grid manager.
//!
//! Owns the currently rendered window of hex cells: hover resolution decides
//! the center, user input the radius, and the tracker decides whether the
//! boundary geometry can be repositioned or must be rebuilt. The grid
//! generator in [`crate::galaxy::window`] is treated as an external module;
//! its failures surface as a status message, never as a crash.

mod entities;
pub mod systems;
mod window;

pub use entities::{ActiveWindow, BoardStatus};
#[allow(unused_imports)]
pub use window::{Cell, GeometryAction, GridWindow, WindowError, WindowTracker};

use bevy::prelude::*;

use crate::GameState;

/// Configuration for the grid board.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct BoardConfig {
    /// Hex edge length in world units.
    pub hex_size: f32,
    /// Damping factor applied to the pan range so the window edge stays visible.
    pub pan_damping: f32,
    /// Thickness of outline edge cuboids.
    pub outline_thickness: f32,
    /// Height of outlines above the grid plane (avoids z-fighting).
    pub outline_height: f32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            hex_size: 4.0,
            pan_damping: 0.85,
            outline_thickness: 0.06,
            outline_height: 0.02,
        }
    }
}

/// Board plugin: window lifecycle, boundary geometry, status overlay.
pub struct BoardPlugin(pub BoardConfig);

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<BoardConfig>()
            .register_type::<entities::WindowOutlineRoot>()
            .register_type::<entities::OutlineEdge>()
            .register_type::<BoardStatus>()
            .insert_resource(self.0.clone())
            .init_resource::<ActiveWindow>()
            .init_resource::<entities::BoundaryGeometry>()
            .init_resource::<BoardStatus>()
            .add_systems(Startup, systems::setup_board_materials)
            .add_systems(
                Update,
                systems::sync_window
                    .after(crate::input::systems::resolve_hover)
                    .after(crate::input::systems::adjust_radius)
                    .run_if(in_state(GameState::Running)),
            )
            .add_systems(Update, systems::draw_status)
            .add_systems(
                Update,
                systems::draw_cell_labels.run_if(in_state(GameState::Debugging)),
            );
    }
}
