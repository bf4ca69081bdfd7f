//! A runtime-sized rectangular grid.
//!
//! Cells are stored row-major in a single `Vec`. All positional access goes
//! through [`Coord`] and is bounds-checked, so callers never index past the
//! edge of the board.

use core::fmt;
use thiserror::Error;

/// A zero-based `(row, col)` position on a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Errors returned by grid access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// Row or column lies outside `[0, height) × [0, width)`.
    #[error("coordinate out of bounds: row={row}, col={col}")]
    OutOfBounds { row: usize, col: usize },
}

/// A `width × height` grid of `T`.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    /// Create a grid with every cell set to `T::default()`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![T::default(); width * height],
        }
    }

    /// Reset every cell to `T::default()`.
    pub fn clear_all(&mut self) {
        self.cells.fill(T::default());
    }
}

impl<T> Grid<T> {
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `coord` lies inside the grid.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    #[inline]
    fn index(&self, coord: Coord) -> Result<usize, GridError> {
        if self.contains(coord) {
            Ok(coord.row * self.width + coord.col)
        } else {
            Err(GridError::OutOfBounds {
                row: coord.row,
                col: coord.col,
            })
        }
    }

    /// Shared reference to the cell at `coord`.
    pub fn get(&self, coord: Coord) -> Result<&T, GridError> {
        let idx = self.index(coord)?;
        Ok(&self.cells[idx])
    }

    /// Mutable reference to the cell at `coord`.
    pub fn get_mut(&mut self, coord: Coord) -> Result<&mut T, GridError> {
        let idx = self.index(coord)?;
        Ok(&mut self.cells[idx])
    }

    /// Overwrite the cell at `coord`.
    pub fn set(&mut self, coord: Coord, value: T) -> Result<(), GridError> {
        *self.get_mut(coord)? = value;
        Ok(())
    }

    /// Every coordinate of the grid in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| Coord::new(row, col)))
    }

    /// Row-major iterator over `(coord, cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &T)> + '_ {
        self.coords().zip(self.cells.iter())
    }

    /// The up-to-eight in-bounds cells at Chebyshev distance 1 from `coord`.
    pub fn neighbors(&self, coord: Coord) -> Neighbors {
        Neighbors {
            center: coord,
            width: self.width,
            height: self.height,
            idx: 0,
        }
    }
}

impl<T> fmt::Debug for Grid<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}x{}>:", self.width, self.height)?;
        for row in self.cells.chunks(self.width.max(1)) {
            for cell in row {
                write!(f, "{:?} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Iterator over the Chebyshev neighbours of a cell, clipped to the grid.
#[derive(Debug, Clone, Copy)]
pub struct Neighbors {
    center: Coord,
    width: usize,
    height: usize,
    idx: usize,
}

impl Iterator for Neighbors {
    type Item = Coord;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < NEIGHBOR_OFFSETS.len() {
            let (dr, dc) = NEIGHBOR_OFFSETS[self.idx];
            self.idx += 1;
            let row = self.center.row.checked_add_signed(dr);
            let col = self.center.col.checked_add_signed(dc);
            if let (Some(row), Some(col)) = (row, col) {
                if row < self.height && col < self.width {
                    return Some(Coord::new(row, col));
                }
            }
        }
        None
    }
}
