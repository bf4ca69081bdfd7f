//! The set of ships one player owns.

use super::config::STANDARD_FLEET;
use super::grid::Coord;
use super::ship::{Ship, ShipKind};

/// Ships placed on a board, at most one per [`ShipKind`].
///
/// Does not validate geometry; see [`crate::core::placement`].
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    pub fn new() -> Self {
        Self { ships: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Ship> {
        self.ships.iter()
    }

    pub fn get(&self, kind: ShipKind) -> Option<&Ship> {
        self.ships.iter().find(|s| s.kind() == kind)
    }

    pub(crate) fn get_mut(&mut self, kind: ShipKind) -> Option<&mut Ship> {
        self.ships.iter_mut().find(|s| s.kind() == kind)
    }

    pub(crate) fn ship_at_mut(&mut self, coord: Coord) -> Option<&mut Ship> {
        self.ships.iter_mut().find(|s| s.contains(coord))
    }

    pub fn contains(&self, kind: ShipKind) -> bool {
        self.get(kind).is_some()
    }

    /// Ships whose body covers `coord`. At most one on a consistent board.
    pub fn ships_overlapping(&self, coord: Coord) -> impl Iterator<Item = &Ship> + '_ {
        self.ships.iter().filter(move |s| s.contains(coord))
    }

    /// Every standard kind is present.
    pub fn is_complete(&self) -> bool {
        STANDARD_FLEET.iter().all(|&kind| self.contains(kind))
    }

    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    pub(crate) fn push(&mut self, ship: Ship) {
        self.ships.push(ship);
    }

    pub(crate) fn remove(&mut self, kind: ShipKind) -> Option<Ship> {
        let idx = self.ships.iter().position(|s| s.kind() == kind)?;
        Some(self.ships.remove(idx))
    }

    pub(crate) fn clear(&mut self) {
        self.ships.clear();
    }
}

impl<'a> IntoIterator for &'a Fleet {
    type Item = &'a Ship;
    type IntoIter = core::slice::Iter<'a, Ship>;

    fn into_iter(self) -> Self::IntoIter {
        self.ships.iter()
    }
}

impl FromIterator<Ship> for Fleet {
    fn from_iter<I: IntoIterator<Item = Ship>>(iter: I) -> Self {
        Self {
            ships: iter.into_iter().collect(),
        }
    }
}

impl core::fmt::Debug for Fleet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.ships.iter()).finish()
    }
}
