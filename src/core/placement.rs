//! Fleet layout rules and randomized placement.
//!
//! Ships may not touch, not even diagonally. The check is additive: every
//! ship adds 2 to each of its body cells and 1 to each in-bounds cell of its
//! one-cell margin (the Chebyshev ring around the body). A lone ship leaves
//! at most 2 in any cell, so any cell above 2 means a second ship overlaps
//! or sits in the first one's margin. Two margins may share a cell: one free
//! cell between ships is allowed.

use std::collections::BTreeSet;

use log::debug;
use rand::Rng;

use super::board::Board;
use super::common::PlacementError;
use super::config::STANDARD_FLEET;
use super::grid::{Coord, Grid};
use super::ship::{fits, Orientation, Ship, ShipKind};

const BODY_WEIGHT: u8 = 2;
const MARGIN_WEIGHT: u8 = 1;
const THRESHOLD: u8 = 2;

/// Build the accumulator grid for `ships`, or `None` if any ship leaves
/// the grid.
fn accumulate<'a, I>(ships: I, width: usize, height: usize) -> Option<Grid<u8>>
where
    I: IntoIterator<Item = &'a Ship>,
{
    let mut check = Grid::<u8>::new(width, height);
    for ship in ships {
        if !ship.fits(width, height) {
            return None;
        }
        let mut margin = BTreeSet::new();
        for coord in ship.cells() {
            let cell = check.get_mut(coord).ok()?;
            *cell = cell.saturating_add(BODY_WEIGHT);
            margin.extend(check.neighbors(coord).filter(|&n| !ship.contains(n)));
        }
        for coord in margin {
            if let Ok(cell) = check.get_mut(coord) {
                *cell = cell.saturating_add(MARGIN_WEIGHT);
            }
        }
    }
    Some(check)
}

/// Whether `ships` form a legal layout on a `width × height` grid.
pub fn is_legal<'a, I>(ships: I, width: usize, height: usize) -> bool
where
    I: IntoIterator<Item = &'a Ship>,
{
    match accumulate(ships, width, height) {
        Some(check) => check.iter().all(|(_, &v)| v <= THRESHOLD),
        None => false,
    }
}

/// Cells where ships overlap or touch, for highlighting. Empty when the
/// layout is legal; ships outside the grid are not reported here.
pub fn conflicts<'a, I>(ships: I, width: usize, height: usize) -> Vec<Coord>
where
    I: IntoIterator<Item = &'a Ship>,
{
    let in_bounds: Vec<&Ship> = ships
        .into_iter()
        .filter(|s| s.fits(width, height))
        .collect();
    match accumulate(in_bounds, width, height) {
        Some(check) => check
            .iter()
            .filter(|(_, &v)| v > THRESHOLD)
            .map(|(coord, _)| coord)
            .collect(),
        None => Vec::new(),
    }
}

/// Whether the board's fleet breaks no spacing rule.
pub fn board_is_legal(board: &Board) -> bool {
    is_legal(board.fleet(), board.width(), board.height())
}

/// Whether the board holds the complete standard fleet in a legal layout,
/// so a match may start with it.
pub fn check_ready(board: &Board) -> bool {
    board.fleet().is_complete() && board_is_legal(board)
}

/// Place `ship` if it keeps the layout legal; otherwise leave the board as
/// it was and report why.
pub fn place_checked(board: &mut Board, ship: Ship) -> Result<(), PlacementError> {
    board.place_ship(ship)?;
    if board_is_legal(board) {
        Ok(())
    } else {
        board.remove_ship(ship.kind())?;
        Err(PlacementError::TooClose)
    }
}

/// Draw a uniformly random orientation and an anchor that keeps the whole
/// ship on the grid.
fn random_ship<R: Rng + ?Sized>(
    rng: &mut R,
    kind: ShipKind,
    width: usize,
    height: usize,
) -> Option<Ship> {
    let len = kind.length();
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    let (max_row, max_col) = match orientation {
        Orientation::Horizontal => (height.checked_sub(1)?, width.checked_sub(len)?),
        Orientation::Vertical => (height.checked_sub(len)?, width.checked_sub(1)?),
    };
    let anchor = Coord::new(rng.random_range(0..=max_row), rng.random_range(0..=max_col));
    Some(Ship::new(kind, orientation, anchor))
}

fn fits_somewhere(kind: ShipKind, width: usize, height: usize) -> bool {
    let origin = Coord::new(0, 0);
    fits(origin, kind.length(), Orientation::Horizontal, width, height)
        || fits(origin, kind.length(), Orientation::Vertical, width, height)
}

/// Try one draw for `kind`. Returns `Ok(true)` once the ship is kept.
fn try_place<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
    kind: ShipKind,
) -> Result<bool, PlacementError> {
    let Some(ship) = random_ship(rng, kind, board.width(), board.height()) else {
        return Ok(false);
    };
    match board.place_ship(ship) {
        Ok(()) => {}
        Err(PlacementError::CellOccupied) => return Ok(false),
        Err(err) => return Err(err),
    }
    if board_is_legal(board) {
        Ok(true)
    } else {
        board.remove_ship(kind)?;
        Ok(false)
    }
}

/// Clear `board` and lay out the standard fleet at random.
///
/// Each ship is redrawn until it fits legally next to the ships already
/// placed, with no limit on the number of draws. Fails fast only when a
/// ship cannot fit the grid in either orientation.
pub fn randomize_placement<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
) -> Result<(), PlacementError> {
    board.clear_ships()?;
    for kind in STANDARD_FLEET {
        if !fits_somewhere(kind, board.width(), board.height()) {
            return Err(PlacementError::PlacementImpossible { kind, attempts: 0 });
        }
        let mut attempts: u64 = 0;
        loop {
            attempts += 1;
            if try_place(board, rng, kind)? {
                break;
            }
        }
        debug!("placed {} after {} draws", kind, attempts);
    }
    Ok(())
}

/// Like [`randomize_placement`] but gives up on a ship after `max_attempts`
/// draws, leaving the board cleared.
pub fn randomize_placement_bounded<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
    max_attempts: u32,
) -> Result<(), PlacementError> {
    board.clear_ships()?;
    for kind in STANDARD_FLEET {
        let mut placed = false;
        for attempt in 1..=max_attempts {
            if try_place(board, rng, kind)? {
                debug!("placed {} after {} draws", kind, attempt);
                placed = true;
                break;
            }
        }
        if !placed {
            debug!("giving up on {} after {} draws", kind, max_attempts);
            board.clear_ships()?;
            return Err(PlacementError::PlacementImpossible {
                kind,
                attempts: max_attempts,
            });
        }
    }
    Ok(())
}
