#![warn(missing_docs)]
//! Hex star map viewer.
//!
//! Renders a seeded star graph above an explorable hex plane. Hovering the
//! plane opens a window of outlined cells around the pointer; `[`/`]` resize
//! it, WASD or edge-scroll pan the camera within the window's bounds.

mod board;
mod camera;
mod galaxy;
pub mod hex;
mod input;
pub mod math;

use bevy::app::AppExit;
use bevy::prelude::*;
use bevy_inspector_egui::quick::WorldInspectorPlugin;

/// Application-wide state, used for system scheduling.
#[derive(States, Default, Debug, Clone, PartialEq, Eq, Hash, Reflect)]
pub enum GameState {
    /// Normal interaction: hover, pan, resize.
    #[default]
    Running,
    /// Debug overlay active (Tab to toggle).
    Debugging,
}

#[cfg(feature = "native")]
#[derive(clap::Parser, Debug)]
#[command(about = "Explorable hex star map")]
struct Args {
    /// Seed for universe generation.
    #[arg(long)]
    seed: Option<u64>,

    /// Initial window radius (clamped to ≥ 1).
    #[arg(long)]
    radius: Option<u32>,
}

fn main() {
    let galaxy_cfg = galaxy::GalaxyConfig::default();
    let input_cfg = input::InputConfig::default();

    #[cfg(feature = "native")]
    let (galaxy_cfg, input_cfg) = {
        use clap::Parser;
        let args = Args::parse();
        let mut galaxy_cfg = galaxy_cfg;
        let mut input_cfg = input_cfg;
        if let Some(seed) = args.seed {
            galaxy_cfg.seed = seed;
        }
        if let Some(radius) = args.radius {
            input_cfg.initial_radius = radius.max(1);
        }
        (galaxy_cfg, input_cfg)
    };

    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Star Map".into(),
            ..default()
        }),
        ..default()
    }))
    .register_type::<GameState>()
    .init_state::<GameState>()
    .add_plugins(bevy_egui::EguiPlugin::default())
    .add_plugins(galaxy::GalaxyPlugin(galaxy_cfg))
    .add_plugins(board::BoardPlugin(board::BoardConfig::default()))
    .add_plugins(input::InputPlugin(input_cfg))
    .add_plugins(camera::CameraPlugin(camera::CameraConfig::default()))
    .add_systems(Update, exit_on_esc)
    .add_systems(Update, toggle_inspector)
    .add_plugins(WorldInspectorPlugin::new().run_if(in_state(GameState::Debugging)));

    app.run();
}

fn toggle_inspector(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next: ResMut<NextState<GameState>>,
) {
    if keys.just_pressed(KeyCode::Tab) {
        next.set(match state.get() {
            GameState::Running => GameState::Debugging,
            GameState::Debugging => GameState::Running,
        });
    }
}

fn exit_on_esc(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
