//! Grid geometry: cells, inclusive cell rectangles, and the playing area.

use core::fmt;

use serde::Serialize;

use crate::common::GridError;

/// Largest number of columns addressable by a single letter.
pub const MAX_COLUMNS: usize = 26;
/// Largest number of rows addressable by a two digit row number.
pub const MAX_ROWS: usize = 99;

/// One grid location, zero-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Cell {
    pub column: usize,
    pub row: usize,
}

impl Cell {
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.column < MAX_COLUMNS {
            write!(f, "{}{}", (b'A' + self.column as u8) as char, self.row + 1)
        } else {
            write!(f, "({}, {})", self.column, self.row)
        }
    }
}

/// Rectangle of whole cells. Both `origin` and the opposite corner are
/// occupied, so a single cell has `columns == rows == 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    origin: Cell,
    columns: usize,
    rows: usize,
}

impl Bounds {
    /// Rectangle spanning `columns` x `rows` cells from `origin`. Zero extents
    /// are widened to one cell.
    pub fn new(origin: Cell, columns: usize, rows: usize) -> Self {
        Self {
            origin,
            columns: columns.max(1),
            rows: rows.max(1),
        }
    }

    pub fn origin(&self) -> Cell {
        self.origin
    }

    /// Bottom-right occupied cell.
    pub fn last(&self) -> Cell {
        Cell::new(
            self.origin.column + self.columns - 1,
            self.origin.row + self.rows - 1,
        )
    }

    pub fn contains(&self, cell: Cell) -> bool {
        let last = self.last();
        (self.origin.column..=last.column).contains(&cell.column)
            && (self.origin.row..=last.row).contains(&cell.row)
    }

    /// Whether `other` lies entirely inside this rectangle.
    pub fn contains_bounds(&self, other: &Bounds) -> bool {
        self.contains(other.origin) && self.contains(other.last())
    }

    /// Whether the two rectangles share at least one cell.
    pub fn intersects(&self, other: &Bounds) -> bool {
        let (a, b) = (self.last(), other.last());
        self.origin.column <= b.column
            && other.origin.column <= a.column
            && self.origin.row <= b.row
            && other.origin.row <= a.row
    }

    /// Every occupied cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |r| {
            (0..self.columns)
                .map(move |c| Cell::new(self.origin.column + c, self.origin.row + r))
        })
    }
}

/// The playing area, `(0, 0)` to `(width - 1, height - 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
}

impl Grid {
    /// Create a grid that the location encoding can fully address.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }
        if width > MAX_COLUMNS {
            return Err(GridError::TooWide(width));
        }
        if height > MAX_ROWS {
            return Err(GridError::TooTall(height));
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(Cell::new(0, 0), self.width, self.height)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.column < self.width && cell.row < self.height
    }

    /// Whether a rectangle fits entirely on the grid.
    pub fn fits(&self, bounds: &Bounds) -> bool {
        self.bounds().contains_bounds(bounds)
    }
}
