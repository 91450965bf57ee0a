//! Shape module - rectangular occupancy matrices and the rotation transform
//!
//! A shape is stored inline in a fixed `MAX_SHAPE_EXTENT`-square array so that
//! shapes are `Copy` and rotating never allocates. Cells outside
//! `rows x cols` are always `false`, which keeps derived equality exact.

use crate::types::MAX_SHAPE_EXTENT;

const N: usize = MAX_SHAPE_EXTENT;

/// Immutable rectangular boolean matrix describing a piece's occupied cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; N]; N],
}

impl Shape {
    /// Build a shape from text rows, `#` marking an occupied cell.
    ///
    /// Usable in const context, so catalog templates are compile-time data.
    /// Panics (at compile time for consts) on ragged or oversized input.
    pub const fn parse(rows: &[&str]) -> Self {
        assert!(!rows.is_empty() && rows.len() <= N, "shape row count out of range");
        let cols = rows[0].len();
        assert!(cols > 0 && cols <= N, "shape column count out of range");

        let mut cells = [[false; N]; N];
        let mut r = 0;
        while r < rows.len() {
            let bytes = rows[r].as_bytes();
            assert!(bytes.len() == cols, "ragged shape row");
            let mut c = 0;
            while c < cols {
                cells[r][c] = bytes[c] == b'#';
                c += 1;
            }
            r += 1;
        }

        Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            cells,
        }
    }

    /// Number of rows (height).
    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Number of columns (width).
    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the cell at (row, col) is occupied. Out-of-range reads are empty.
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// Iterate over occupied cells as `(local_row, local_col)`.
    pub fn filled_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.rows as usize).flat_map(move |r| {
            (0..self.cols as usize)
                .filter(move |&c| self.cells[r][c])
                .map(move |c| (r as i8, c as i8))
        })
    }

    /// Number of occupied cells.
    pub fn filled_count(&self) -> usize {
        self.filled_cells().count()
    }

    /// Rotate 90° clockwise, producing a new `cols x rows` shape.
    ///
    /// `result[r][c] = self[rows - 1 - c][r]`. The receiver is untouched.
    pub fn rotate_clockwise(&self) -> Shape {
        let h = self.rows as usize;
        let w = self.cols as usize;
        let mut cells = [[false; N]; N];
        for (r, row) in cells.iter_mut().enumerate().take(w) {
            for (c, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.cells[h - 1 - c][r];
            }
        }
        Shape {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// Free-function form of [`Shape::rotate_clockwise`].
pub fn rotate_clockwise(shape: &Shape) -> Shape {
    shape.rotate_clockwise()
}
