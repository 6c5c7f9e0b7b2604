//! Input controller: pointer hover resolution, panning, radius input.
//!
//! Translates pointer and keyboard events into world-space state for the
//! board and camera: the hovered cell, the requested window radius, and the
//! clamped camera-target offset. The repeating pan systems are gated on an
//! explicit [`PanLoop`] engagement flag so leaving the window cancels them.

mod entities;
pub mod systems;

pub use entities::{HoverState, PanLoop, PanState, RequestedRadius};

use bevy::prelude::*;

use crate::GameState;

/// Configuration for pointer/keyboard input.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct InputConfig {
    /// Window radius requested at startup.
    pub initial_radius: u32,
    /// Pan speed in world units per second.
    pub pan_speed: f32,
    /// Pixel distance from a window border that triggers edge-scrolling.
    pub edge_margin: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            initial_radius: 3,
            pan_speed: 24.0,
            edge_margin: 24.0,
        }
    }
}

/// Input plugin: hover resolution, radius keys, and the pan loop.
pub struct InputPlugin(pub InputConfig);

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<InputConfig>()
            .register_type::<HoverState>()
            .register_type::<RequestedRadius>()
            .register_type::<PanState>()
            .register_type::<PanLoop>()
            .insert_resource(self.0.clone())
            .insert_resource(RequestedRadius(self.0.initial_radius.max(1)))
            .init_resource::<HoverState>()
            .init_resource::<PanState>()
            .init_resource::<PanLoop>()
            .add_systems(
                Update,
                (systems::resolve_hover, systems::adjust_radius)
                    .run_if(in_state(GameState::Running)),
            )
            .add_systems(
                Update,
                (systems::keyboard_pan, systems::edge_pan)
                    .after(crate::board::systems::sync_window)
                    .run_if(systems::pan_loop_engaged)
                    .run_if(in_state(GameState::Running)),
            );
    }
}
