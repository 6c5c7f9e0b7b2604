//! Hex coordinate engine: axial⇄world conversion, cube rounding, cell identifiers.
//!
//! All types and functions here are free of ECS dependencies and operate on
//! plain numeric / `Vec2` inputs, making them straightforward to unit-test.
//! Orientation is pointy-top throughout; world positions are (x, z) pairs on
//! the ground plane.

use bevy::prelude::Vec2;

/// Axial position of one hex cell. Immutable value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, bevy::prelude::Reflect)]
pub struct Axial {
    /// Column coordinate.
    pub q: i32,
    /// Row coordinate.
    pub r: i32,
}

impl Axial {
    /// The origin cell.
    pub const ZERO: Self = Self { q: 0, r: 0 };

    /// Constructs an axial coordinate.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The implicit cube representation (`y = -q - r`).
    pub fn to_cube(self) -> CubeCoord {
        CubeCoord::new(self.q, -self.q - self.r, self.r)
    }

    /// Hex distance to another cell (maximum cube-component delta).
    pub fn distance_to(self, other: Axial) -> u32 {
        let (a, b) = (self.to_cube(), other.to_cube());
        (a.x - b.x)
            .abs()
            .max((a.y - b.y).abs())
            .max((a.z - b.z).abs()) as u32
    }
}

/// Integral cube coordinate with invariant `x + y + z == 0`.
///
/// Axial maps in as `x = q`, `z = r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubeCoord {
    /// Cube x (equals axial q).
    pub x: i32,
    /// Cube y (derived: `-x - z`).
    pub y: i32,
    /// Cube z (equals axial r).
    pub z: i32,
}

impl CubeCoord {
    /// Constructs a cube coordinate, checking the zero-sum invariant in debug builds.
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        debug_assert!(x + y + z == 0, "cube coordinates must sum to zero");
        Self { x, y, z }
    }

    /// The (q, r) axial projection.
    pub fn axial(self) -> Axial {
        Axial::new(self.x, self.z)
    }
}

/// Rounds fractional cube coordinates to the nearest valid cell.
///
/// Each component is rounded independently, then the component with the
/// largest rounding error is recomputed from the other two so the zero-sum
/// invariant holds. The correction priority is fixed: x wins only when its
/// error strictly exceeds both others, else y wins over z, else z. This order
/// decides which cell a point on a boundary tie resolves to and must not be
/// reordered.
pub fn round_cube(fx: f32, fy: f32, fz: f32) -> CubeCoord {
    let mut rx = fx.round();
    let mut ry = fy.round();
    let mut rz = fz.round();

    let dx = (rx - fx).abs();
    let dy = (ry - fy).abs();
    let dz = (rz - fz).abs();

    if dx > dy && dx > dz {
        rx = -ry - rz;
    } else if dy > dz {
        ry = -rx - rz;
    } else {
        rz = -rx - ry;
    }

    CubeCoord::new(rx as i32, ry as i32, rz as i32)
}

/// Projection between axial coordinates and ground-plane world positions.
///
/// `hex_size` is the edge length (center-to-corner distance) of every cell.
#[derive(Debug, Clone, Copy)]
pub struct HexLayout {
    /// Hex edge length in world units.
    pub hex_size: f32,
}

const SQRT_3: f32 = 1.732_050_8;

impl HexLayout {
    /// World position of a cell center.
    ///
    /// # Examples
    /// ```
    /// # use starmap::hex::{Axial, HexLayout};
    /// let layout = HexLayout { hex_size: 1.0 };
    /// let p = layout.axial_to_world(Axial::ZERO);
    /// assert_eq!(p.x, 0.0);
    /// assert_eq!(p.y, 0.0);
    /// ```
    pub fn axial_to_world(&self, cell: Axial) -> Vec2 {
        let q = cell.q as f32;
        let r = cell.r as f32;
        Vec2::new(
            self.hex_size * (SQRT_3 * q + SQRT_3 / 2.0 * r),
            self.hex_size * 1.5 * r,
        )
    }

    /// Fractional cube coordinates of a world position (inverse projection).
    pub fn world_to_cube(&self, p: Vec2) -> (f32, f32, f32) {
        let fx = (SQRT_3 / 3.0 * p.x - p.y / 3.0) / self.hex_size;
        let fz = (2.0 / 3.0 * p.y) / self.hex_size;
        (fx, -fx - fz, fz)
    }

    /// The cell containing a world position.
    pub fn world_to_axial(&self, p: Vec2) -> Axial {
        let (fx, fy, fz) = self.world_to_cube(p);
        round_cube(fx, fy, fz).axial()
    }

    /// Offsets of the six corners relative to a cell center, counter-clockwise
    /// starting from the east-most corner.
    pub fn corner_offsets(&self) -> [Vec2; 6] {
        std::array::from_fn(|i| {
            let angle = (60.0 * i as f32 - 30.0).to_radians();
            Vec2::new(self.hex_size * angle.cos(), self.hex_size * angle.sin())
        })
    }
}

/// Canonical collision-free identifier for a cell.
///
/// Both axial coordinates are zigzag-encoded (0, -1, 1, -2, 2, … → 0, 1, 2,
/// 3, 4, …) and packed into disjoint halves of a `u64`, so distinct cells can
/// never collide and small-magnitude cells get small identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, bevy::prelude::Reflect)]
pub struct CellId(pub u64);

impl CellId {
    /// Packs a cell into its identifier: zigzag(q) in the high 32 bits,
    /// zigzag(r) in the low 32 bits.
    pub fn encode(cell: Axial) -> Self {
        Self((u64::from(zigzag(cell.q)) << 32) | u64::from(zigzag(cell.r)))
    }

    /// Inverse of [`CellId::encode`].
    pub fn decode(self) -> Axial {
        Axial::new(unzigzag((self.0 >> 32) as u32), unzigzag(self.0 as u32))
    }
}

fn zigzag(n: i32) -> u32 {
    ((n << 1) ^ (n >> 31)) as u32
}

fn unzigzag(z: u32) -> i32 {
    ((z >> 1) as i32) ^ -((z & 1) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: HexLayout = HexLayout { hex_size: 4.0 };

    // ── round_cube ──────────────────────────────────────────────────

    #[test]
    fn round_cube_preserves_zero_sum() {
        // Sweep fractional points with fx + fy + fz == 0.
        for i in -20..=20 {
            for j in -20..=20 {
                let fx = i as f32 * 0.37;
                let fz = j as f32 * 0.23;
                let fy = -fx - fz;
                let c = round_cube(fx, fy, fz);
                assert_eq!(c.x + c.y + c.z, 0, "sum broken at ({fx}, {fy}, {fz})");
            }
        }
    }

    #[test]
    fn round_cube_exact_integers_pass_through() {
        let c = round_cube(3.0, -5.0, 2.0);
        assert_eq!(c, CubeCoord::new(3, -5, 2));
    }

    #[test]
    fn round_cube_tie_breaks_x_only_when_strictly_largest() {
        // x error (0.4) strictly exceeds y and z (0.3 each): x is recomputed,
        // pulling the point back into the origin cell.
        let c = round_cube(0.6, -0.3, -0.3);
        assert_eq!(c, CubeCoord::new(0, 0, 0));
    }

    #[test]
    fn round_cube_tie_breaks_y_before_z() {
        // x and y errors tie at 0.5: x does not strictly exceed, y exceeds z,
        // so y is the component recomputed from the other two.
        let c = round_cube(0.5, 0.5, -1.0);
        assert_eq!(c, CubeCoord::new(1, 0, -1));
    }

    #[test]
    fn round_cube_tie_breaks_z_last() {
        // x and z errors tie at 0.5 and y is exact: neither the x rule nor the
        // y rule fires, so z is recomputed.
        let c = round_cube(0.5, -1.0, 0.5);
        assert_eq!(c, CubeCoord::new(1, -1, 0));
    }

    #[test]
    fn round_cube_is_reproducible_on_boundaries() {
        // A point equidistant between two cells must resolve identically on
        // every call.
        let first = round_cube(0.5, -0.25, -0.25);
        for _ in 0..100 {
            assert_eq!(round_cube(0.5, -0.25, -0.25), first);
        }
    }

    #[test]
    fn round_cube_corrects_largest_error() {
        // fy has the dominant error (0.4); independent rounding would give -3
        // but the correction recomputes it from x and z.
        let c = round_cube(1.3, -2.6, 1.3);
        assert_eq!(c, CubeCoord::new(1, -2, 1));
    }

    // ── axial / world round-trip ────────────────────────────────────

    #[test]
    fn world_roundtrip_is_exact_on_centers() {
        for q in -32..=32 {
            for r in -32..=32 {
                let cell = Axial::new(q, r);
                let world = LAYOUT.axial_to_world(cell);
                assert_eq!(
                    LAYOUT.world_to_axial(world),
                    cell,
                    "roundtrip failed for ({q}, {r})"
                );
            }
        }
    }

    #[test]
    fn nearby_points_resolve_to_center_cell() {
        let cell = Axial::new(3, -2);
        let center = LAYOUT.axial_to_world(cell);
        // Anywhere well inside the cell maps to it.
        for offset in [
            Vec2::new(0.4, 0.0),
            Vec2::new(-0.4, 0.3),
            Vec2::new(0.0, -0.5),
        ] {
            assert_eq!(LAYOUT.world_to_axial(center + offset * LAYOUT.hex_size), cell);
        }
    }

    #[test]
    fn neighbor_spacing_matches_pointy_top_metrics() {
        // Adjacent columns are sqrt(3)·S apart; adjacent rows 1.5·S down.
        let a = LAYOUT.axial_to_world(Axial::ZERO);
        let b = LAYOUT.axial_to_world(Axial::new(1, 0));
        let c = LAYOUT.axial_to_world(Axial::new(0, 1));
        assert!((b.x - a.x - SQRT_3 * LAYOUT.hex_size).abs() < 1e-4);
        assert!((c.y - a.y - 1.5 * LAYOUT.hex_size).abs() < 1e-4);
    }

    #[test]
    fn corner_offsets_lie_on_the_hex_circle() {
        let corners = LAYOUT.corner_offsets();
        assert_eq!(corners.len(), 6);
        for corner in corners {
            assert!((corner.length() - LAYOUT.hex_size).abs() < 1e-4);
        }
    }

    // ── distance ────────────────────────────────────────────────────

    #[test]
    fn distance_counts_rings() {
        let center = Axial::ZERO;
        assert_eq!(center.distance_to(center), 0);
        assert_eq!(center.distance_to(Axial::new(1, 0)), 1);
        assert_eq!(center.distance_to(Axial::new(3, -3)), 3);
        assert_eq!(Axial::new(2, -1).distance_to(Axial::new(2, 2)), 3);
    }

    #[test]
    fn cube_axial_projection_roundtrips() {
        for q in -8..=8 {
            for r in -8..=8 {
                let cell = Axial::new(q, r);
                assert_eq!(cell.to_cube().axial(), cell);
                assert_eq!(cell.to_cube().x + cell.to_cube().y + cell.to_cube().z, 0);
            }
        }
    }

    // ── cell identifiers ────────────────────────────────────────────

    #[test]
    fn cell_ids_are_injective() {
        let mut seen = std::collections::HashSet::new();
        for q in -64..=64 {
            for r in -64..=64 {
                assert!(
                    seen.insert(CellId::encode(Axial::new(q, r))),
                    "collision at ({q}, {r})"
                );
            }
        }
    }

    #[test]
    fn cell_id_decode_inverts_encode() {
        for cell in [
            Axial::ZERO,
            Axial::new(1, -1),
            Axial::new(-7, 13),
            Axial::new(i32::MAX, i32::MIN),
            Axial::new(i32::MIN, i32::MAX),
        ] {
            assert_eq!(CellId::encode(cell).decode(), cell);
        }
    }

    #[test]
    fn small_cells_get_small_ids() {
        // Zigzag keeps magnitudes compact: the origin is id 0, its immediate
        // surroundings stay within a few bits per half.
        assert_eq!(CellId::encode(Axial::ZERO).0, 0);
        assert_eq!(CellId::encode(Axial::new(0, -1)).0, 1);
        assert_eq!(CellId::encode(Axial::new(0, 1)).0, 2);
        assert_eq!(CellId::encode(Axial::new(-1, 0)).0, 1 << 32);
        assert_eq!(CellId::encode(Axial::new(1, 0)).0, 2 << 32);
    }

    #[test]
    fn zigzag_maps_signs_alternately() {
        assert_eq!(zigzag(0), 0);
        assert_eq!(zigzag(-1), 1);
        assert_eq!(zigzag(1), 2);
        assert_eq!(zigzag(-2), 3);
        assert_eq!(zigzag(2), 4);
        for n in [-1000, -1, 0, 1, 1000, i32::MIN, i32::MAX] {
            assert_eq!(unzigzag(zigzag(n)), n);
        }
    }
}
