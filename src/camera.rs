//! Fixed-pitch map camera tracking the clamped pan target.
//!
//! Spawns the `Camera3d` with HDR + bloom and eases it toward a point offset
//! from the current aim, so window recenters and pan input read as smooth
//! glides rather than snaps.

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::post_process::bloom::{Bloom, BloomCompositeMode};
use bevy::prelude::*;
use bevy::render::view::Hdr;

use crate::input::PanState;

/// Marker on the map camera entity.
#[derive(Component, Reflect)]
pub struct MapCamera;

/// Configuration for the map camera rig.
#[derive(Resource, Clone, Debug, Reflect)]
pub struct CameraConfig {
    /// Camera height above the grid plane.
    pub height: f32,
    /// Horizontal distance behind the aim point (+z).
    pub back_offset: f32,
    /// Per-frame interpolation factor toward the desired position.
    pub follow_lerp: f32,
    /// Bloom post-processing intensity.
    pub bloom_intensity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            height: 34.0,
            back_offset: 20.0,
            follow_lerp: 0.12,
            bloom_intensity: 0.3,
        }
    }
}

/// Camera plugin: spawn at startup, follow the pan target every frame.
pub struct CameraPlugin(pub CameraConfig);

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<MapCamera>()
            .register_type::<CameraConfig>()
            .insert_resource(self.0.clone())
            .add_systems(Startup, spawn_camera)
            .add_systems(
                Update,
                follow_target
                    .after(crate::input::systems::keyboard_pan)
                    .after(crate::input::systems::edge_pan),
            );
    }
}

/// Spawns the Camera3d with HDR, tonemapping, and bloom.
fn spawn_camera(mut commands: Commands, cfg: Res<CameraConfig>) {
    commands.spawn((
        Name::new("MapCamera"),
        Camera3d::default(),
        Hdr,
        Tonemapping::TonyMcMapface,
        Bloom {
            intensity: cfg.bloom_intensity,
            composite_mode: BloomCompositeMode::Additive,
            ..Bloom::NATURAL
        },
        Transform::from_xyz(0.0, cfg.height, cfg.back_offset).looking_at(Vec3::ZERO, Vec3::Y),
        MapCamera,
    ));
}

/// Eases the camera toward its perch above the clamped aim point.
fn follow_target(
    pan: Res<PanState>,
    cfg: Res<CameraConfig>,
    mut query: Query<&mut Transform, With<MapCamera>>,
) {
    let Ok(mut transform) = query.single_mut() else {
        return;
    };

    let aim = pan.aim();
    let desired = Vec3::new(aim.x, cfg.height, aim.y + cfg.back_offset);
    let step = (desired - transform.translation) * cfg.follow_lerp;
    transform.translation += step;
    transform.look_at(Vec3::new(aim.x, 0.0, aim.y), Vec3::Y);
}
