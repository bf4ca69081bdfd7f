//! One player's board: cell occupancy, hit state and the fleet placed on it.

use core::fmt;
use log::debug;

use super::common::{HitResult, PlacementError};
use super::config::{BOARD_HEIGHT, BOARD_WIDTH};
use super::fleet::Fleet;
use super::grid::{Coord, Grid, GridError};
use super::ship::{clamp_anchor, Orientation, Ship, ShipKind};

/// State of a single board cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub occupied: bool,
    /// Once set, never cleared for the lifetime of the board.
    pub hit: bool,
}

/// A fixed-size board holding one fleet.
///
/// Every occupied cell belongs to exactly one ship of the fleet, and every
/// ship cell is occupied. Spacing between ships is not enforced here.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: Grid<Cell>,
    fleet: Fleet,
    locked: bool,
}

impl Board {
    /// Create an empty `width × height` board.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Grid::new(width, height),
            fleet: Fleet::new(),
            locked: false,
        }
    }

    /// The 10×10 reference board.
    pub fn standard() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }

    pub fn height(&self) -> usize {
        self.cells.height()
    }

    pub fn cell(&self, coord: Coord) -> Result<Cell, GridError> {
        self.cells.get(coord).copied()
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells.iter().map(|(coord, cell)| (coord, *cell))
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn ship(&self, kind: ShipKind) -> Option<&Ship> {
        self.fleet.get(kind)
    }

    /// Whether `finalize_placement` has been called.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Cells not attacked yet.
    pub fn untried_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .filter(|(_, cell)| !cell.hit)
            .map(|(coord, _)| coord)
    }

    /// Ships not sunk yet.
    pub fn ships_remaining(&self) -> usize {
        self.fleet.iter().filter(|s| !s.is_sunk()).count()
    }

    fn ensure_unlocked(&self) -> Result<(), PlacementError> {
        if self.locked {
            Err(PlacementError::PlacementLocked)
        } else {
            Ok(())
        }
    }

    /// Check that `ship` fits the grid and covers only free cells.
    fn check_footprint(&self, ship: &Ship) -> Result<(), PlacementError> {
        if !ship.fits(self.width(), self.height()) {
            return Err(PlacementError::OutOfBounds);
        }
        for coord in ship.cells() {
            let cell = self
                .cells
                .get(coord)
                .map_err(|_| PlacementError::OutOfBounds)?;
            if cell.occupied {
                return Err(PlacementError::CellOccupied);
            }
        }
        Ok(())
    }

    fn mark(&mut self, ship: &Ship, occupied: bool) {
        for coord in ship.cells() {
            if let Ok(cell) = self.cells.get_mut(coord) {
                cell.occupied = occupied;
            }
        }
    }

    /// Place `ship`, marking its cells occupied.
    ///
    /// Only hard invariants are checked: bounds, double occupancy and one
    /// ship per kind. Nothing changes on error.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), PlacementError> {
        self.ensure_unlocked()?;
        if self.fleet.contains(ship.kind()) {
            return Err(PlacementError::ShipAlreadyPlaced(ship.kind()));
        }
        self.check_footprint(&ship)?;
        self.mark(&ship, true);
        self.fleet.push(ship);
        debug!(
            "placed {} at {} ({:?})",
            ship.kind(),
            ship.anchor(),
            ship.orientation()
        );
        Ok(())
    }

    /// Remove the ship of `kind`, clearing its cells.
    pub fn remove_ship(&mut self, kind: ShipKind) -> Result<Ship, PlacementError> {
        self.ensure_unlocked()?;
        let ship = self
            .fleet
            .remove(kind)
            .ok_or(PlacementError::ShipNotPlaced(kind))?;
        self.mark(&ship, false);
        Ok(ship)
    }

    /// Remove every ship.
    pub fn clear_ships(&mut self) -> Result<(), PlacementError> {
        self.ensure_unlocked()?;
        for ship in self.fleet.iter() {
            for coord in ship.cells() {
                if let Ok(cell) = self.cells.get_mut(coord) {
                    cell.occupied = false;
                }
            }
        }
        self.fleet.clear();
        Ok(())
    }

    /// Re-place the ship of `kind` at `anchor` with `orientation`, clamping
    /// the anchor so the body stays on the grid. Rolls back on overlap.
    fn reposition(
        &mut self,
        kind: ShipKind,
        anchor: Coord,
        orientation: Orientation,
    ) -> Result<Ship, PlacementError> {
        self.ensure_unlocked()?;
        let old = *self
            .fleet
            .get(kind)
            .ok_or(PlacementError::ShipNotPlaced(kind))?;
        let anchor = clamp_anchor(anchor, kind.length(), orientation, self.width(), self.height())
            .ok_or(PlacementError::OutOfBounds)?;
        let mut moved = old.repositioned(anchor, orientation);
        // Cells attacked earlier stay hit; the ship's segments must agree.
        for coord in moved.cells() {
            if self.cells.get(coord).is_ok_and(|c| c.hit) {
                moved.register_hit(coord);
            }
        }

        self.mark(&old, false);
        if let Err(err) = self.check_footprint(&moved) {
            self.mark(&old, true);
            return Err(err);
        }
        self.mark(&moved, true);
        if let Some(slot) = self.fleet.get_mut(kind) {
            *slot = moved;
        }
        Ok(moved)
    }

    /// Rotate the ship of `kind` about its anchor, shifting it back inside
    /// the grid if the rotated body would stick out.
    pub fn rotate_ship(&mut self, kind: ShipKind) -> Result<Ship, PlacementError> {
        let ship = *self
            .fleet
            .get(kind)
            .ok_or(PlacementError::ShipNotPlaced(kind))?;
        self.reposition(kind, ship.anchor(), ship.orientation().toggled())
    }

    /// Move the ship of `kind` to `anchor`, snapping it inside the grid.
    pub fn move_ship(&mut self, kind: ShipKind, anchor: Coord) -> Result<Ship, PlacementError> {
        let ship = *self
            .fleet
            .get(kind)
            .ok_or(PlacementError::ShipNotPlaced(kind))?;
        self.reposition(kind, anchor, ship.orientation())
    }

    /// Lock the layout. Later placement calls fail with `PlacementLocked`.
    pub fn finalize_placement(&mut self) {
        self.locked = true;
    }

    /// Attack `coord`.
    ///
    /// A second attack on the same cell is a no-op reported through
    /// `already_tried`, not an error.
    pub fn attack(&mut self, coord: Coord) -> Result<HitResult, GridError> {
        let cell = self.cells.get_mut(coord)?;
        if cell.hit {
            return Ok(HitResult::already_tried(cell.occupied));
        }
        cell.hit = true;
        if !cell.occupied {
            debug!("attack at {} missed", coord);
            return Ok(HitResult {
                hit: false,
                already_tried: false,
                sunk: None,
            });
        }

        let sunk = match self.fleet.ship_at_mut(coord) {
            Some(ship) => {
                ship.register_hit(coord);
                ship.is_sunk().then(|| ship.kind())
            }
            None => None,
        };
        match sunk {
            Some(kind) => debug!("attack at {} sank {}", coord, kind),
            None => debug!("attack at {} hit", coord),
        }
        Ok(HitResult {
            hit: true,
            already_tried: false,
            sunk,
        })
    }

    /// Every occupied cell has been hit.
    pub fn is_fleet_eliminated(&self) -> bool {
        self.cells
            .iter()
            .all(|(_, cell)| !cell.occupied || cell.hit)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {}x{} {{", self.width(), self.height())?;
        for row in 0..self.height() {
            write!(f, "  ")?;
            for col in 0..self.width() {
                let ch = match self.cell(Coord::new(row, col)) {
                    Ok(Cell { occupied: true, hit: true }) => 'X',
                    Ok(Cell { occupied: true, hit: false }) => '■',
                    Ok(Cell { occupied: false, hit: true }) => 'o',
                    _ => '□',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  fleet: {:?}, locked: {}", self.fleet, self.locked)?;
        write!(f, "}}")
    }
}
