use thiserror::Error;

use crate::hex::{Axial, CellId};

/// Largest window radius the generator will materialize in one call.
///
/// The window manager imposes no upper bound of its own; callers are expected
/// to catch [`GridGenError::RadiusTooLarge`] and keep whatever window they had.
pub const MAX_GENERATED_RADIUS: u32 = 64;

/// Raw cell record handed across the generation boundary.
///
/// Consumers validate these before building a window; see
/// [`crate::board::GridWindow::from_records`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRecord {
    /// Absolute axial position of the cell.
    pub axial: Axial,
    /// Hex distance from the requested window center.
    pub distance: u32,
    /// Canonical identifier for the cell.
    pub key: CellId,
}

/// Failure modes of the window generator.
#[derive(Debug, Error)]
pub enum GridGenError {
    /// Requested radius exceeds what the generator is willing to build.
    #[error("window radius {0} exceeds the generator limit of {MAX_GENERATED_RADIUS}")]
    RadiusTooLarge(u32),
}

/// Number of cells in a hexagonal window of the given radius.
pub fn cell_count(radius: u32) -> usize {
    (1 + 3 * radius * (radius + 1)) as usize
}

/// Generates the ordered cell list for a hexagonal window around `center`.
///
/// Deterministic for identical inputs: cells are emitted in a fixed cube-space
/// sweep order, each carrying its distance from the center and canonical key.
pub fn generate_window(center: Axial, radius: u32) -> Result<Vec<CellRecord>, GridGenError> {
    if radius > MAX_GENERATED_RADIUS {
        return Err(GridGenError::RadiusTooLarge(radius));
    }

    let r = radius as i32;
    let mut cells = Vec::with_capacity(cell_count(radius));

    // Sweep a hexagon of cube offsets around the origin, then translate.
    for x in -r..=r {
        for y in -r..=r {
            let z = -x - y;
            if z.abs() <= r {
                let axial = Axial::new(center.q + x, center.r + z);
                cells.push(CellRecord {
                    axial,
                    distance: x.abs().max(y.abs()).max(z.abs()) as u32,
                    key: CellId::encode(axial),
                });
            }
        }
    }

    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn window_counts_match_formula() {
        for radius in 0..=5 {
            let cells = generate_window(Axial::ZERO, radius).unwrap();
            assert_eq!(
                cells.len(),
                cell_count(radius),
                "radius {radius} should yield {} cells",
                cell_count(radius)
            );
        }
    }

    #[test]
    fn radius_three_window_has_37_cells() {
        let cells = generate_window(Axial::new(2, -1), 3).unwrap();
        assert_eq!(cells.len(), 37);
    }

    #[test]
    fn distances_stay_within_radius_and_match_geometry() {
        let center = Axial::new(-4, 7);
        for record in generate_window(center, 4).unwrap() {
            assert!(record.distance <= 4, "cell {:?} outside radius", record.axial);
            assert_eq!(record.distance, center.distance_to(record.axial));
        }
    }

    #[test]
    fn keys_are_canonical_and_unique() {
        let mut seen = HashSet::new();
        for record in generate_window(Axial::new(10, -3), 3).unwrap() {
            assert_eq!(record.key, CellId::encode(record.axial));
            assert!(seen.insert(record.key), "duplicate key for {:?}", record.axial);
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let a = generate_window(Axial::new(1, 2), 3).unwrap();
        let b = generate_window(Axial::new(1, 2), 3).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn oversized_radius_is_rejected() {
        let err = generate_window(Axial::ZERO, MAX_GENERATED_RADIUS + 1).unwrap_err();
        assert!(matches!(err, GridGenError::RadiusTooLarge(_)));
        assert!(generate_window(Axial::ZERO, MAX_GENERATED_RADIUS).is_ok());
    }

    #[test]
    fn window_is_centered_on_the_requested_cell() {
        let center = Axial::new(5, -2);
        let cells = generate_window(center, 2).unwrap();
        assert!(cells.iter().any(|c| c.axial == center && c.distance == 0));
    }
}
