//! Pure computation helpers extracted for testability.
//!
//! All functions in this module are free of Bevy ECS dependencies and operate
//! on plain numeric / `Vec2` / `Vec3` inputs, making them straightforward to
//! unit-test.

use bevy::prelude::{Vec2, Vec3};

use crate::hex::{Axial, HexLayout};

/// Intersects a pointer ray with the y = 0 grid plane.
///
/// Returns the (x, z) hit point, or `None` when the ray is parallel to the
/// plane or points away from it. That is the normal "no hover" case, not an
/// error.
///
/// # Examples
/// ```
/// # use bevy::prelude::{Vec2, Vec3};
/// # use starmap::math::ray_ground_hit;
/// let hit = ray_ground_hit(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y);
/// assert_eq!(hit, Some(Vec2::ZERO));
/// assert_eq!(ray_ground_hit(Vec3::Y, Vec3::X), None);
/// ```
pub fn ray_ground_hit(origin: Vec3, direction: Vec3) -> Option<Vec2> {
    if direction.y.abs() <= f32::EPSILON {
        return None;
    }
    let distance = -origin.y / direction.y;
    if distance <= 0.0 {
        return None;
    }
    let impact = origin + direction * distance;
    Some(Vec2::new(impact.x, impact.z))
}

/// Clamps a pan target to a disc of radius `max_range` around the origin.
///
/// Inside the disc the target passes through unchanged; outside, it is scaled
/// down to exactly `max_range`, preserving direction.
pub fn clamp_to_disc(target: Vec2, max_range: f32) -> Vec2 {
    let len = target.length();
    if len > max_range {
        if max_range <= 0.0 {
            return Vec2::ZERO;
        }
        target * (max_range / len)
    } else {
        target
    }
}

/// Maximum camera-target distance from the window center.
///
/// Takes the farther of the two extreme rendered cells (axial offsets
/// `(radius, 0)` and `(radius, -radius)`) and scales by `damping` (< 1) so
/// the window edge stays visible while panning.
pub fn pan_range(radius: u32, layout: &HexLayout, damping: f32) -> f32 {
    let r = radius as i32;
    let east = layout.axial_to_world(Axial::new(r, 0)).length();
    let corner = layout.axial_to_world(Axial::new(r, -r)).length();
    east.max(corner) * damping
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── ray_ground_hit ──────────────────────────────────────────────

    #[test]
    fn vertical_ray_hits_directly_below() {
        let hit = ray_ground_hit(Vec3::new(3.0, 8.0, -2.0), Vec3::NEG_Y);
        assert_eq!(hit, Some(Vec2::new(3.0, -2.0)));
    }

    #[test]
    fn oblique_ray_hits_offset_point() {
        // 45° down the +x axis from height 5: lands 5 units along x.
        let dir = Vec3::new(1.0, -1.0, 0.0).normalize();
        let hit = ray_ground_hit(Vec3::new(0.0, 5.0, 0.0), dir).unwrap();
        assert!((hit.x - 5.0).abs() < 1e-4);
        assert!(hit.y.abs() < 1e-4);
    }

    #[test]
    fn parallel_ray_misses() {
        assert_eq!(ray_ground_hit(Vec3::new(0.0, 5.0, 0.0), Vec3::X), None);
    }

    #[test]
    fn ray_pointing_away_misses() {
        assert_eq!(ray_ground_hit(Vec3::new(0.0, 5.0, 0.0), Vec3::Y), None);
    }

    // ── clamp_to_disc ───────────────────────────────────────────────

    #[test]
    fn target_inside_disc_is_unchanged() {
        let t = Vec2::new(1.0, -2.0);
        assert_eq!(clamp_to_disc(t, 10.0), t);
    }

    #[test]
    fn target_outside_disc_lands_on_the_rim() {
        let clamped = clamp_to_disc(Vec2::new(30.0, 40.0), 10.0);
        assert!((clamped.length() - 10.0).abs() < 1e-4);
    }

    #[test]
    fn clamping_preserves_direction() {
        let t = Vec2::new(-6.0, 8.0);
        let clamped = clamp_to_disc(t, 2.5);
        let cross = t.x * clamped.y - t.y * clamped.x;
        assert!(cross.abs() < 1e-4, "direction changed: {t:?} -> {clamped:?}");
        assert!(t.dot(clamped) > 0.0);
    }

    #[test]
    fn zero_range_collapses_to_origin() {
        assert_eq!(clamp_to_disc(Vec2::new(3.0, 4.0), 0.0), Vec2::ZERO);
    }

    #[test]
    fn clamped_length_never_exceeds_range() {
        let layout = HexLayout { hex_size: 4.0 };
        for radius in 1..6 {
            let range = pan_range(radius, &layout, 0.85);
            for target in [
                Vec2::ZERO,
                Vec2::new(1000.0, -1000.0),
                Vec2::new(0.0, 0.1),
                Vec2::new(-range, range),
            ] {
                assert!(clamp_to_disc(target, range).length() <= range + 1e-4);
            }
        }
    }

    // ── pan_range ───────────────────────────────────────────────────

    #[test]
    fn pan_range_matches_window_extent() {
        // Both extreme offsets sit sqrt(3)·S·radius from the center under the
        // pointy-top projection.
        let layout = HexLayout { hex_size: 4.0 };
        let expected = 3.0_f32.sqrt() * 4.0 * 3.0 * 0.85;
        assert!((pan_range(3, &layout, 0.85) - expected).abs() < 1e-3);
    }

    #[test]
    fn pan_range_grows_with_radius() {
        let layout = HexLayout { hex_size: 2.0 };
        let r1 = pan_range(1, &layout, 0.85);
        let r4 = pan_range(4, &layout, 0.85);
        assert!(r4 > r1);
        assert!(r1 > 0.0);
    }
}
