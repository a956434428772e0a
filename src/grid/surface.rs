//! A player's placement grid.
//!
//! Fixed rows x cols of [`Cell`]s, row-major. Created once per player at
//! game start; dice enter through controller-validated placements and move
//! only through effect operations.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::Cell;
use crate::core::Die;

/// A fixed-size 2-D grid of constrained cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an unconstrained grid.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows >= 2 && cols >= 2, "Grid must be at least 2x2");
        Self {
            rows,
            cols,
            cells: vec![Cell::new(); rows * cols],
        }
    }

    /// Create a grid from a prepared row-major cell layout.
    ///
    /// Panics if `cells.len() != rows * cols`.
    #[must_use]
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        assert!(rows >= 2 && cols >= 2, "Grid must be at least 2x2");
        assert_eq!(cells.len(), rows * cols, "Cell layout has the wrong size");
        Self { rows, cols, cells }
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether (row, col) lies within the grid.
    #[must_use]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// The cell at (row, col). Panics out of bounds.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        assert!(self.in_bounds(row, col), "Cell index out of bounds");
        &self.cells[row * self.cols + col]
    }

    fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        assert!(self.in_bounds(row, col), "Cell index out of bounds");
        &mut self.cells[row * self.cols + col]
    }

    /// True while no cell holds a die.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| !c.has_die())
    }

    /// Number of placed dice.
    #[must_use]
    pub fn dice_count(&self) -> usize {
        self.cells.iter().filter(|c| c.has_die()).count()
    }

    /// Whether (row, col) lies on the first/last row or column.
    #[must_use]
    pub fn is_border(&self, row: usize, col: usize) -> bool {
        row == 0 || col == 0 || row == self.rows - 1 || col == self.cols - 1
    }

    /// The up-to-8 in-bounds neighbor coordinates of (row, col),
    /// orthogonal and diagonal. Edge and corner cells simply have fewer.
    #[must_use]
    pub fn neighbors(&self, row: usize, col: usize) -> SmallVec<[(usize, usize); 8]> {
        let mut out = SmallVec::new();
        for dr in [-1isize, 0, 1] {
            for dc in [-1isize, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let r = row as isize + dr;
                let c = col as isize + dc;
                if r >= 0 && c >= 0 && self.in_bounds(r as usize, c as usize) {
                    out.push((r as usize, c as usize));
                }
            }
        }
        out
    }

    /// Dice currently occupying neighbors of (row, col).
    pub fn neighbor_dice(&self, row: usize, col: usize) -> SmallVec<[&Die; 8]> {
        self.neighbors(row, col)
            .into_iter()
            .filter_map(|(r, c)| self.cell(r, c).die())
            .collect()
    }

    /// Whether any neighbor of (row, col) is occupied.
    #[must_use]
    pub fn has_occupied_neighbor(&self, row: usize, col: usize) -> bool {
        !self.neighbor_dice(row, col).is_empty()
    }

    /// Put a die on (row, col).
    ///
    /// Legality must already have been established through the rule chain;
    /// placing on an occupied cell is a programming bug and panics.
    pub fn place(&mut self, die: Die, row: usize, col: usize) {
        self.cell_mut(row, col).put(die);
    }

    /// Remove and return the die at (row, col), if any.
    pub fn take(&mut self, row: usize, col: usize) -> Option<Die> {
        self.cell_mut(row, col).take()
    }
}
