// grid.rs - Dense toroidal grid for Conway's Game of Life

use crate::error::GridError;

/// Column-count by row-count boolean matrix. Every cell is always defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    columns: usize,
    rows: usize,
    cells: Vec<bool>, // row-major, index = y * columns + x
}

impl Grid {
    /// Allocates a grid with every cell dead.
    pub fn new(columns: usize, rows: usize) -> Result<Self, GridError> {
        if columns == 0 || rows == 0 {
            return Err(GridError::EmptyDimension { columns, rows });
        }
        let len = columns
            .checked_mul(rows)
            .ok_or(GridError::TooLarge { columns, rows })?;
        Ok(Self {
            columns,
            rows,
            cells: vec![false; len],
        })
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// State of the cell at `(x, y)`. Panics when the coordinate is outside the grid.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let index = self.index(x, y);
        self.cells[index] = alive;
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of every live cell, row by row.
    pub fn iter_live(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| (i % columns, i / columns))
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.columns && y < self.rows,
            "cell ({x}, {y}) outside {}x{} grid",
            self.columns,
            self.rows
        );
        y * self.columns + x
    }
}
