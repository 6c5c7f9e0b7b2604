//! Pure window state machine and geometry-cache bookkeeping.
//!
//! No ECS dependencies: the tracker decides *what* should happen to the
//! rendered boundary geometry and hands the decision back as a
//! [`GeometryAction`] for the systems layer to execute.

use bevy::platform::collections::HashMap;
use thiserror::Error;

use crate::galaxy::window::{CellRecord, cell_count};
use crate::hex::{Axial, CellId};

/// One renderable cell of the active window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Canonical identifier.
    pub id: CellId,
    /// Absolute axial position.
    pub axial: Axial,
    /// Hex distance from the window center.
    pub distance: u32,
}

/// Rejection reasons when generator output fails boundary validation.
#[derive(Debug, Error)]
pub enum WindowError {
    /// Generator returned the wrong number of cells for the radius.
    #[error("expected {expected} cells for radius {radius}, got {got}")]
    WrongCellCount {
        /// Requested radius.
        radius: u32,
        /// Cell count the formula demands.
        expected: usize,
        /// Cell count actually received.
        got: usize,
    },
    /// A cell lies outside the window or carries a wrong distance.
    #[error("cell {axial:?} has distance {distance}, outside radius {radius}")]
    DistanceOutOfRange {
        /// Offending cell.
        axial: Axial,
        /// Distance the record claimed.
        distance: u32,
        /// Requested radius.
        radius: u32,
    },
    /// A record's key does not match its axial position.
    #[error("cell {axial:?} carries non-canonical key {key:?}")]
    NonCanonicalKey {
        /// Offending cell.
        axial: Axial,
        /// Key the record carried.
        key: CellId,
    },
    /// Two records share an identifier.
    #[error("duplicate cell id {0:?}")]
    DuplicateId(CellId),
}

/// The currently materialized view of the grid.
#[derive(Debug, Clone)]
pub struct GridWindow {
    /// Center cell.
    pub center: Axial,
    /// Window radius (≥ 1).
    pub radius: u32,
    /// Ordered cells as delivered by the generator.
    pub cells: Vec<Cell>,
    by_id: HashMap<CellId, usize>,
}

impl GridWindow {
    /// Validates raw generator records into a window.
    ///
    /// Checks the cell-count formula, every distance against the actual hex
    /// distance from `center`, key canonicality, and id uniqueness. Any
    /// failure aborts the build so the caller can keep its previous window.
    pub fn from_records(
        center: Axial,
        radius: u32,
        records: &[CellRecord],
    ) -> Result<Self, WindowError> {
        let expected = cell_count(radius);
        if records.len() != expected {
            return Err(WindowError::WrongCellCount {
                radius,
                expected,
                got: records.len(),
            });
        }

        let mut cells = Vec::with_capacity(records.len());
        let mut by_id = HashMap::with_capacity(records.len());
        for record in records {
            if record.distance > radius || record.distance != center.distance_to(record.axial) {
                return Err(WindowError::DistanceOutOfRange {
                    axial: record.axial,
                    distance: record.distance,
                    radius,
                });
            }
            if record.key.decode() != record.axial || record.key != CellId::encode(record.axial) {
                return Err(WindowError::NonCanonicalKey {
                    axial: record.axial,
                    key: record.key,
                });
            }
            if by_id.insert(record.key, cells.len()).is_some() {
                return Err(WindowError::DuplicateId(record.key));
            }
            cells.push(Cell {
                id: record.key,
                axial: record.axial,
                distance: record.distance,
            });
        }

        Ok(Self {
            center,
            radius,
            cells,
            by_id,
        })
    }

    /// Number of cells in the window.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Looks a cell up by identifier.
    pub fn get(&self, id: CellId) -> Option<&Cell> {
        self.by_id.get(&id).map(|&i| &self.cells[i])
    }
}

/// Decision handed to the rendering layer after a window (re)build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryAction {
    /// Built geometry has the same radius: move it to the new center.
    Reposition,
    /// Radius changed, or nothing is built yet: dispose and rebuild.
    Rebuild,
}

/// Owns the active window and the radius the boundary geometry was built for.
///
/// Cell-relative boundary shape depends only on the radius, so two windows
/// with equal radius share geometry and differ only in placement. Clearing
/// the window keeps the built radius: geometry is hidden, not disposed, and
/// reusable when hover returns at the same radius.
///
/// A failed generation is remembered per (center, radius) request so the
/// generator is not re-invoked every frame while the failing input is held;
/// any input change retries.
#[derive(Debug, Default)]
pub struct WindowTracker {
    active: Option<GridWindow>,
    built_radius: Option<u32>,
    rejected: Option<(Axial, u32)>,
}

impl WindowTracker {
    /// The active window, if hover is on the grid.
    pub fn active(&self) -> Option<&GridWindow> {
        self.active.as_ref()
    }

    /// Whether resolving hover at (`center`, `radius`) requires regeneration.
    pub fn needs_refresh(&self, center: Axial, radius: u32) -> bool {
        if self.rejected == Some((center, radius)) {
            return false;
        }
        match &self.active {
            None => true,
            Some(w) => w.center != center || w.radius != radius,
        }
    }

    /// Installs a freshly validated window and returns the geometry decision.
    pub fn install(&mut self, window: GridWindow) -> GeometryAction {
        let action = if self.built_radius == Some(window.radius) {
            GeometryAction::Reposition
        } else {
            GeometryAction::Rebuild
        };
        self.built_radius = Some(window.radius);
        self.active = Some(window);
        self.rejected = None;
        action
    }

    /// Records a request the generator rejected, suppressing retries until
    /// the hover center or requested radius changes.
    pub fn note_rejected(&mut self, center: Axial, radius: u32) {
        self.rejected = Some((center, radius));
    }

    /// Drops the active window. Returns whether one was present. The built
    /// radius is retained so cached geometry can be reused; a remembered
    /// rejection is forgotten since leaving the grid resets the input.
    pub fn clear(&mut self) -> bool {
        self.rejected = None;
        self.active.take().is_some()
    }
}
