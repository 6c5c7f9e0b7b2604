use bevy::prelude::*;
use bevy_egui::egui;

use super::BoardConfig;
use super::entities::{
    ActiveWindow, BoardMaterials, BoardStatus, OutlineEdge, WindowOutlineRoot, WindowSync,
};
use super::window::{GeometryAction, GridWindow};
use crate::galaxy;
use crate::hex::{CellId, HexLayout};
use crate::input::HoverState;
use crate::math;

/// Status line shown while the generator rejects or corrupts a window.
const GENERATION_FAILED: &str = "Unable to build grid – check the generation module";

/// Creates the shared outline material.
pub fn setup_board_materials(
    mut commands: Commands,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let outline_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.0, 0.5, 1.0),
        emissive: LinearRgba::rgb(0.0, 20.0, 40.0),
        unlit: true,
        ..default()
    });
    commands.insert_resource(BoardMaterials { outline_material });
}

/// Drives the window state machine from the frame's hover resolution.
///
/// Runs after hover/radius input and before pan application, so the pan range
/// is never clamped against stale window data. On a window change the
/// geometry-cache decision is executed here: equal radius repositions the
/// cached outline root, anything else disposes and rebuilds it.
pub fn sync_window(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut sync: WindowSync,
) {
    let layout = HexLayout {
        hex_size: sync.cfg.hex_size,
    };

    let Some(center) = sync.hover.cell else {
        // Populated → Empty: hide geometry but keep it cached for reuse.
        if sync.tracker.0.clear() {
            if let Some(root) = sync.geometry.root
                && let Ok((_, mut visibility)) = sync.root_q.get_mut(root)
            {
                *visibility = Visibility::Hidden;
            }
            sync.status.0.clear();
        }
        return;
    };

    let radius = sync.requested.0.max(1);
    if !sync.tracker.0.needs_refresh(center, radius) {
        return;
    }

    let records = match galaxy::window::generate_window(center, radius) {
        Ok(records) => records,
        Err(err) => {
            warn!("window generation failed: {err}");
            sync.tracker.0.note_rejected(center, radius);
            sync.status.0 = GENERATION_FAILED.to_string();
            return;
        }
    };
    let window = match GridWindow::from_records(center, radius, &records) {
        Ok(window) => window,
        Err(err) => {
            warn!("generator returned invalid window: {err}");
            sync.tracker.0.note_rejected(center, radius);
            sync.status.0 = GENERATION_FAILED.to_string();
            return;
        }
    };

    let center_world = layout.axial_to_world(center);
    let cells = window.cell_count();

    match sync.tracker.0.install(window) {
        GeometryAction::Reposition => {
            if let Some(root) = sync.geometry.root
                && let Ok((mut transform, mut visibility)) = sync.root_q.get_mut(root)
            {
                transform.translation = Vec3::new(center_world.x, 0.0, center_world.y);
                *visibility = Visibility::Visible;
            }
            debug!("window repositioned to q{} r{}", center.q, center.r);
        }
        GeometryAction::Rebuild => {
            if let Some(old) = sync.geometry.root.take() {
                commands.entity(old).despawn();
            }
            if let Some(active) = sync.tracker.0.active() {
                sync.geometry.root = Some(spawn_outline_root(
                    &mut commands,
                    &mut meshes,
                    &sync.mats,
                    &sync.cfg,
                    &layout,
                    active,
                    center_world,
                ));
            }
            info!("window geometry rebuilt at radius {radius}");
        }
    }

    sync.status.0 = format!(
        "Center q{} r{}, radius {}, cells {}",
        center.q, center.r, radius, cells
    );

    // Recompute the pan bound against the fresh window, then re-clamp: a
    // shrinking window must pull an out-of-range target back in immediately.
    sync.pan.origin = center_world;
    sync.pan.max_range = math::pan_range(radius, &layout, sync.cfg.pan_damping);
    sync.pan.target = math::clamp_to_disc(sync.pan.target, sync.pan.max_range);
}

/// Spawns the outline hierarchy for a window: one root at the center's world
/// position, with six thin cuboid edges per cell as children, all positioned
/// relative to the center so the root transform is the reposition handle.
fn spawn_outline_root(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    mats: &BoardMaterials,
    cfg: &BoardConfig,
    layout: &HexLayout,
    window: &GridWindow,
    center_world: Vec2,
) -> Entity {
    let root = commands
        .spawn((
            WindowOutlineRoot,
            Name::new(format!("WindowOutline(r{})", window.radius)),
            Transform::from_xyz(center_world.x, 0.0, center_world.y),
            Visibility::Visible,
        ))
        .id();

    // Every edge of a regular hex has the same length, so all 6·n edges share
    // one mesh and differ only by transform.
    let thickness = cfg.outline_thickness;
    let edge_mesh = meshes.add(Cuboid::new(layout.hex_size, thickness, thickness));
    let corners = layout.corner_offsets();

    for cell in &window.cells {
        let offset = layout.axial_to_world(cell.axial) - center_world;
        for (i, &corner) in corners.iter().enumerate() {
            let from = offset + corner;
            let to = offset + corners[(i + 1) % 6];
            let midpoint = (from + to) / 2.0;
            let dir = (to - from).normalize();
            let rotation = Quat::from_rotation_arc(Vec3::X, Vec3::new(dir.x, 0.0, dir.y));

            let edge = commands
                .spawn((
                    OutlineEdge,
                    Mesh3d(edge_mesh.clone()),
                    MeshMaterial3d(mats.outline_material.clone()),
                    Transform::from_xyz(midpoint.x, cfg.outline_height, midpoint.y)
                        .with_rotation(rotation),
                ))
                .id();
            commands.entity(root).add_child(edge);
        }
    }

    root
}

/// Debug overlay: paints every active cell's axial coordinates at its world
/// position, the hovered cell brighter than the rest.
pub fn draw_cell_labels(
    mut egui_ctx: Query<&mut bevy_egui::EguiContext>,
    camera_q: Query<(&Camera, &GlobalTransform), With<crate::camera::MapCamera>>,
    tracker: Res<ActiveWindow>,
    hover: Res<HoverState>,
    cfg: Res<BoardConfig>,
    mut ready: Local<bool>,
) {
    // egui has no fonts on the very first frame.
    if !*ready {
        *ready = true;
        return;
    }
    let Ok(mut ctx) = egui_ctx.single_mut() else {
        return;
    };
    let Ok((camera, cam_tf)) = camera_q.single() else {
        return;
    };
    let Some(window) = tracker.0.active() else {
        return;
    };

    let layout = HexLayout {
        hex_size: cfg.hex_size,
    };
    let hovered = hover.cell.map(CellId::encode).and_then(|id| window.get(id));
    let painter = ctx.get_mut().layer_painter(egui::LayerId::background());

    for cell in &window.cells {
        let world = layout.axial_to_world(cell.axial);
        let Ok(screen) = camera.world_to_viewport(cam_tf, Vec3::new(world.x, 0.0, world.y)) else {
            continue;
        };
        let color = if hovered.is_some_and(|h| h.id == cell.id) {
            egui::Color32::WHITE
        } else {
            // Outer rings fade toward the window edge.
            let shade = 200_u32.saturating_sub(cell.distance * 30).max(90) as u8;
            egui::Color32::from_gray(shade)
        };
        painter.text(
            egui::pos2(screen.x, screen.y),
            egui::Align2::CENTER_CENTER,
            format!("{},{}", cell.axial.q, cell.axial.r),
            egui::FontId::proportional(11.0),
            color,
        );
    }
}

/// Paints the status line (or an idle hint) into the viewport corner.
pub fn draw_status(mut egui_ctx: Query<&mut bevy_egui::EguiContext>, status: Res<BoardStatus>) {
    let Ok(mut ctx) = egui_ctx.single_mut() else {
        return;
    };
    let painter = ctx.get_mut().layer_painter(egui::LayerId::background());

    let text = if status.0.is_empty() {
        "Hover the grid to open a window · [ ] resize · WASD pan"
    } else {
        status.0.as_str()
    };
    painter.text(
        egui::pos2(12.0, 12.0),
        egui::Align2::LEFT_TOP,
        text,
        egui::FontId::proportional(13.0),
        egui::Color32::WHITE,
    );
}
