use bevy::prelude::*;
use bevy::window::CursorLeft;

use super::InputConfig;
use super::entities::{HoverState, PanLoop, PanState, RequestedRadius};
use crate::camera::MapCamera;
use crate::galaxy::window::MAX_GENERATED_RADIUS;
use crate::hex::HexLayout;
use crate::math;

/// Run condition for the repeating pan systems.
pub fn pan_loop_engaged(pan_loop: Res<PanLoop>) -> bool {
    pan_loop.engaged
}

/// Resolves the pointer into a hovered world point and cell.
///
/// Casts a ray from the camera through the cursor and intersects the grid
/// plane. Leaving the window, or a ray that misses the plane, resolves to no
/// hover and disengages the pan loop.
pub fn resolve_hover(
    windows: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform), With<MapCamera>>,
    mut cursor_left: MessageReader<CursorLeft>,
    mut hover: ResMut<HoverState>,
    mut pan_loop: ResMut<PanLoop>,
    cfg: Res<crate::board::BoardConfig>,
) {
    let left = cursor_left.read().next().is_some();

    let cursor = windows.single().ok().and_then(|w| w.cursor_position());
    let (Some(cursor), false) = (cursor, left) else {
        hover.cell = None;
        pan_loop.engaged = false;
        return;
    };

    let Ok((camera, cam_tf)) = camera_q.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(cam_tf, cursor) else {
        return;
    };

    match math::ray_ground_hit(ray.origin, *ray.direction) {
        Some(point) => {
            let layout = HexLayout {
                hex_size: cfg.hex_size,
            };
            hover.cell = Some(layout.world_to_axial(point));
            pan_loop.engaged = true;
        }
        None => {
            hover.cell = None;
            pan_loop.engaged = false;
        }
    }
}

/// `[` / `]` shrink and grow the requested window radius, held between 1 and
/// the generator's ceiling.
pub fn adjust_radius(keys: Res<ButtonInput<KeyCode>>, mut radius: ResMut<RequestedRadius>) {
    if keys.just_pressed(KeyCode::BracketRight) {
        radius.0 = radius.0.saturating_add(1).min(MAX_GENERATED_RADIUS);
    }
    if keys.just_pressed(KeyCode::BracketLeft) {
        radius.0 = radius.0.saturating_sub(1).max(1);
    }
}

/// WASD / arrow panning of the camera target, clamped after every increment.
pub fn keyboard_pan(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    cfg: Res<InputConfig>,
    mut pan: ResMut<PanState>,
) {
    let mut direction = Vec2::ZERO;
    if keys.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]) {
        direction.y -= 1.0;
    }
    if keys.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]) {
        direction.y += 1.0;
    }
    if keys.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]) {
        direction.x -= 1.0;
    }
    if keys.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]) {
        direction.x += 1.0;
    }

    if direction != Vec2::ZERO {
        let delta = direction.normalize() * cfg.pan_speed * time.delta_secs();
        pan.target = math::clamp_to_disc(pan.target + delta, pan.max_range);
    }
}

/// Edge-scroll panning: the cursor resting near a window border nudges the
/// camera target toward that border, clamped like every other pan update.
pub fn edge_pan(
    time: Res<Time>,
    windows: Query<&Window>,
    cfg: Res<InputConfig>,
    mut pan: ResMut<PanState>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    let mut direction = Vec2::ZERO;
    if cursor.x < cfg.edge_margin {
        direction.x -= 1.0;
    } else if cursor.x > window.width() - cfg.edge_margin {
        direction.x += 1.0;
    }
    if cursor.y < cfg.edge_margin {
        direction.y -= 1.0;
    } else if cursor.y > window.height() - cfg.edge_margin {
        direction.y += 1.0;
    }

    if direction != Vec2::ZERO {
        let delta = direction.normalize() * cfg.pan_speed * time.delta_secs();
        pan.target = math::clamp_to_disc(pan.target + delta, pan.max_range);
    }
}
