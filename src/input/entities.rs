use bevy::prelude::*;

use crate::hex::Axial;

/// Pointer hover resolution for the current frame.
///
/// `None` covers both "pointer outside the window" and "ray misses the grid
/// plane", which is a normal no-hover state rather than an error.
#[derive(Resource, Default, Reflect)]
pub struct HoverState {
    /// Cell under the pointer, resolved through the grid plane.
    pub cell: Option<Axial>,
}

/// User-requested window radius. Writers clamp to ≥ 1.
#[derive(Resource, Reflect)]
pub struct RequestedRadius(pub u32);

/// Camera aim state.
///
/// `target` is the aim offset from the window center; `max_range` is its
/// clamp radius, recomputed by the board on every window change; `origin` is
/// the window center's world position. The camera aims at `origin + target`.
#[derive(Resource, Default, Reflect)]
pub struct PanState {
    /// World position of the window center.
    pub origin: Vec2,
    /// Aim offset from the window center, kept within `max_range`.
    pub target: Vec2,
    /// Clamp radius for `target`.
    pub max_range: f32,
}

impl PanState {
    /// World point the camera should look at.
    pub fn aim(&self) -> Vec2 {
        self.origin + self.target
    }
}

/// Engagement flag for the repeating pan loop.
///
/// Dropped when the pointer leaves the interactive surface; the pan systems
/// are gated on it, so a stale loop cannot keep running.
#[derive(Resource, Default, Reflect)]
pub struct PanLoop {
    /// Whether per-frame panning is active.
    pub engaged: bool,
}
