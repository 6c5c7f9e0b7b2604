use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::BoardConfig;
use super::window::WindowTracker;
use crate::input::{HoverState, PanState, RequestedRadius};

/// Sole owner of the active window and geometry-cache decisions.
#[derive(Resource, Default)]
pub struct ActiveWindow(pub WindowTracker);

/// Scene handle for the cached boundary geometry root.
///
/// The root entity parents every cell outline; repositioning the window moves
/// only this transform. `None` until the first build.
#[derive(Resource, Default)]
pub struct BoundaryGeometry {
    /// Root entity of the outline hierarchy, if built.
    pub root: Option<Entity>,
}

/// Marker on the boundary geometry root entity.
#[derive(Component, Reflect)]
pub struct WindowOutlineRoot;

/// Marker on individual outline edge cuboids.
#[derive(Component, Reflect)]
pub struct OutlineEdge;

/// Human-readable hover/window status line shown in the overlay.
///
/// Empty while nothing is hovered.
#[derive(Resource, Default, Reflect)]
pub struct BoardStatus(pub String);

/// Shared material handles for board geometry.
#[derive(Resource)]
pub struct BoardMaterials {
    /// Bright emissive cyan used for cell outline edges.
    pub outline_material: Handle<StandardMaterial>,
}

/// Aggregated world access for the per-frame window sync pass.
#[derive(SystemParam)]
pub struct WindowSync<'w, 's> {
    /// Hover resolution for the frame.
    pub hover: Res<'w, HoverState>,
    /// Radius requested via input.
    pub requested: Res<'w, RequestedRadius>,
    /// Window state machine.
    pub tracker: ResMut<'w, ActiveWindow>,
    /// Cached outline root handle.
    pub geometry: ResMut<'w, BoundaryGeometry>,
    /// Status line resource.
    pub status: ResMut<'w, BoardStatus>,
    /// Camera pan state, re-clamped on every window change.
    pub pan: ResMut<'w, PanState>,
    /// Shared outline material.
    pub mats: Res<'w, BoardMaterials>,
    /// Board configuration.
    pub cfg: Res<'w, BoardConfig>,
    /// Transform/visibility access on the outline root.
    pub root_q:
        Query<'w, 's, (&'static mut Transform, &'static mut Visibility), With<WindowOutlineRoot>>,
}
