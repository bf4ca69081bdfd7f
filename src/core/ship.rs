//! Ship kinds, orientation and the geometry shared by placement, legality
//! checks and hit-testing.

use core::fmt;

use super::config::{NUM_SHIPS, STANDARD_FLEET};
use super::grid::Coord;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends toward increasing column.
    Horizontal,
    /// Extends toward increasing row.
    Vertical,
}

impl Orientation {
    pub fn toggled(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// The five ship classes. Lengths are fixed by the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipKind {
    Carrier,
    Battleship,
    Cruiser,
    Submarine,
    Destroyer,
}

impl ShipKind {
    /// Number of cells the ship covers.
    pub const fn length(self) -> usize {
        match self {
            ShipKind::Carrier => 5,
            ShipKind::Battleship => 4,
            ShipKind::Cruiser => 3,
            ShipKind::Submarine => 3,
            ShipKind::Destroyer => 2,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipKind::Carrier => "Carrier",
            ShipKind::Battleship => "Battleship",
            ShipKind::Cruiser => "Cruiser",
            ShipKind::Submarine => "Submarine",
            ShipKind::Destroyer => "Destroyer",
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The fixed fleet composition every board must contain, in placement order.
pub fn standard_fleet() -> [ShipKind; NUM_SHIPS] {
    STANDARD_FLEET
}

/// The `length` consecutive cells starting at `anchor` along `orientation`.
///
/// This is the only place ship geometry is computed.
pub fn occupied_cells(
    anchor: Coord,
    length: usize,
    orientation: Orientation,
) -> impl Iterator<Item = Coord> + Clone {
    (0..length).map(move |offset| match orientation {
        Orientation::Horizontal => Coord::new(anchor.row, anchor.col + offset),
        Orientation::Vertical => Coord::new(anchor.row + offset, anchor.col),
    })
}

/// Whether a ship of `length` anchored at `anchor` fits a `width × height` grid.
pub fn fits(
    anchor: Coord,
    length: usize,
    orientation: Orientation,
    width: usize,
    height: usize,
) -> bool {
    match orientation {
        Orientation::Horizontal => anchor.row < height && anchor.col.saturating_add(length) <= width,
        Orientation::Vertical => anchor.col < width && anchor.row.saturating_add(length) <= height,
    }
}

/// Pull `anchor` back toward the origin until the ship fits, if the grid is
/// large enough to hold it at all.
pub fn clamp_anchor(
    anchor: Coord,
    length: usize,
    orientation: Orientation,
    width: usize,
    height: usize,
) -> Option<Coord> {
    let (max_row, max_col) = match orientation {
        Orientation::Horizontal => (height.checked_sub(1)?, width.checked_sub(length)?),
        Orientation::Vertical => (height.checked_sub(length)?, width.checked_sub(1)?),
    };
    Some(Coord::new(anchor.row.min(max_row), anchor.col.min(max_col)))
}

/// A ship placed on a board, with hits tracked per segment offset.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    kind: ShipKind,
    orientation: Orientation,
    anchor: Coord,
    /// Bit `i` set once segment offset `i` has been hit.
    hit_segments: u8,
}

impl Ship {
    pub fn new(kind: ShipKind, orientation: Orientation, anchor: Coord) -> Self {
        Self {
            kind,
            orientation,
            anchor,
            hit_segments: 0,
        }
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn length(&self) -> usize {
        self.kind.length()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cell of segment offset 0.
    pub fn anchor(&self) -> Coord {
        self.anchor
    }

    /// Cells covered by the ship, from the anchor outward.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + Clone {
        occupied_cells(self.anchor, self.length(), self.orientation)
    }

    /// Segment offset covering `coord`, if any.
    pub fn offset_of(&self, coord: Coord) -> Option<usize> {
        self.cells().position(|c| c == coord)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.offset_of(coord).is_some()
    }

    /// Whether the whole ship lies inside a `width × height` grid.
    pub fn fits(&self, width: usize, height: usize) -> bool {
        fits(self.anchor, self.length(), self.orientation, width, height)
    }

    /// Record a hit at `coord`. Returns `true` if the ship covers it.
    pub fn register_hit(&mut self, coord: Coord) -> bool {
        match self.offset_of(coord) {
            Some(offset) => {
                self.hit_segments |= 1u8 << offset;
                true
            }
            None => false,
        }
    }

    /// Whether segment `offset` has been hit.
    pub fn is_segment_hit(&self, offset: usize) -> bool {
        offset < self.length() && self.hit_segments & (1u8 << offset) != 0
    }

    /// Offsets already hit, in ascending order.
    pub fn hit_segments(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.length()).filter(|&offset| self.is_segment_hit(offset))
    }

    pub fn hit_count(&self) -> usize {
        self.hit_segments.count_ones() as usize
    }

    pub fn is_sunk(&self) -> bool {
        self.hit_count() == self.length()
    }

    /// Same ship re-anchored and re-oriented. Hits are not carried over.
    pub fn repositioned(&self, anchor: Coord, orientation: Orientation) -> Self {
        Self::new(self.kind, orientation, anchor)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ kind: {}, anchor: {}, orientation: {:?}, hits: {}/{} }}",
            self.kind,
            self.anchor,
            self.orientation,
            self.hit_count(),
            self.length(),
        )
    }
}
