use bevy::prelude::*;
use bevy_egui::egui;
use std::f32::consts::TAU;

use super::GalaxyConfig;
use super::entities::{ActiveUniverse, StarGlyph};
use super::universe::{UniverseConfig, UniverseGenerator};

/// Generates the universe from the configured seed and spawns one emissive
/// sphere per star, grouped around each system's marker position.
pub fn spawn_universe(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cfg: Res<GalaxyConfig>,
) {
    let universe = UniverseGenerator::with_config(
        cfg.seed,
        UniverseConfig {
            systems: cfg.systems,
            extra_edges: cfg.extra_edges,
            ..UniverseConfig::default()
        },
    )
    .generate();

    let star_material = materials.add(StandardMaterial {
        base_color: Color::srgb(1.0, 0.85, 0.5),
        emissive: LinearRgba::rgb(14.0, 10.0, 4.0),
        unlit: true,
        ..default()
    });
    let star_mesh = meshes.add(Sphere::new(cfg.star_radius));

    for system in &universe.systems {
        let count = system.stars.len();
        for (i, star) in system.stars.iter().enumerate() {
            // Companion stars orbit the marker in a tight circle.
            let offset = if count > 1 {
                let angle = i as f32 / count as f32 * TAU;
                Vec2::new(angle.cos(), angle.sin()) * cfg.star_radius * 3.0
            } else {
                Vec2::ZERO
            };
            let pos = system.position + offset;

            commands.spawn((
                StarGlyph,
                Name::new(star.name.clone()),
                Mesh3d(star_mesh.clone()),
                MeshMaterial3d(star_material.clone()),
                Transform::from_xyz(pos.x, cfg.graph_height, pos.y),
            ));
        }
    }

    info!(
        "generated universe: seed {}, {} systems",
        cfg.seed,
        universe.systems.len()
    );

    commands.insert_resource(ActiveUniverse(universe));
}

/// Draws the travel-link lines between system markers.
pub fn draw_links(universe: Res<ActiveUniverse>, cfg: Res<GalaxyConfig>, mut gizmos: Gizmos) {
    for system in &universe.0.systems {
        let from = Vec3::new(system.position.x, cfg.graph_height, system.position.y);
        for &link in &system.links {
            // Each edge is stored on both endpoints; draw it once.
            if link <= system.id {
                continue;
            }
            let other = &universe.0.systems[link as usize];
            let to = Vec3::new(other.position.x, cfg.graph_height, other.position.y);
            gizmos.line(from, to, cfg.link_color);
        }
    }
}

/// Paints each system's primary star name as a screen-projected egui label.
pub fn draw_star_labels(
    mut egui_ctx: Query<&mut bevy_egui::EguiContext>,
    camera_q: Query<(&Camera, &GlobalTransform), With<crate::camera::MapCamera>>,
    universe: Res<ActiveUniverse>,
    cfg: Res<GalaxyConfig>,
    mut ready: Local<bool>,
) {
    if !*ready {
        *ready = true;
        return;
    }
    let Ok((camera, cam_gt)) = camera_q.single() else {
        return;
    };
    let Ok(mut ctx) = egui_ctx.single_mut() else {
        return;
    };

    let painter = ctx.get_mut().layer_painter(egui::LayerId::background());

    for system in &universe.0.systems {
        let world_pos = Vec3::new(system.position.x, cfg.graph_height, system.position.y);
        if let Ok(viewport) = camera.world_to_viewport(cam_gt, world_pos) {
            let label = match system.stars.first().and_then(|s| s.nickname.as_deref()) {
                Some(nick) => format!("{} \u{201c}{nick}\u{201d}", system.primary_name()),
                None => system.primary_name().to_string(),
            };
            painter.text(
                egui::pos2(viewport.x, viewport.y - 12.0),
                egui::Align2::CENTER_BOTTOM,
                label,
                egui::FontId::proportional(11.0),
                egui::Color32::WHITE,
            );
        }
    }
}
