//! Star graph and grid generation.
//!
//! Hosts the seeded universe generator (star systems, names, travel links) and
//! the windowed grid generator consumed by the board. Everything here is
//! deterministic per seed; the board treats [`window::generate_window`] as an
//! external module and catches its failures at the call site.

mod entities;
pub mod naming;
mod systems;
pub mod universe;
pub mod window;

#[allow(unused_imports)]
pub use entities::ActiveUniverse;

use bevy::prelude::*;

use crate::GameState;

/// Configuration for universe generation and star-graph rendering.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct GalaxyConfig {
    /// Seed for all procedural generation.
    pub seed: u64,
    /// Number of star systems in the graph.
    pub systems: usize,
    /// Random travel links added beyond the connectivity chain.
    pub extra_edges: usize,
    /// Height of the star graph above the grid plane.
    pub graph_height: f32,
    /// World-space radius of star spheres.
    pub star_radius: f32,
    /// Color of travel-link lines.
    pub link_color: Color,
    /// Background clear color.
    pub clear_color: Color,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            seed: 2097,
            systems: 4,
            extra_edges: 2,
            graph_height: 16.0,
            star_radius: 1.2,
            link_color: Color::srgb(0.3, 0.5, 0.9),
            clear_color: Color::srgb(0.01, 0.01, 0.02),
        }
    }
}

/// Galaxy plugin: universe generation at startup, link/label drawing at runtime.
pub struct GalaxyPlugin(pub GalaxyConfig);

impl Plugin for GalaxyPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<GalaxyConfig>()
            .register_type::<entities::StarGlyph>()
            .insert_resource(self.0.clone())
            .insert_resource(ClearColor(self.0.clear_color))
            .add_systems(Startup, systems::spawn_universe)
            .add_systems(Update, systems::draw_links)
            .add_systems(
                Update,
                systems::draw_star_labels.run_if(in_state(GameState::Debugging)),
            );
    }
}
