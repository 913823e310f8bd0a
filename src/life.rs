// life.rs - B3/S23 generation step on a toroidal grid

use rand::Rng;

use crate::grid::Grid;

#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// Overwrites every cell with an independent coin flip.
pub fn randomize<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    for y in 0..grid.rows() {
        for x in 0..grid.columns() {
            grid.set(x, y, rng.gen_bool(0.5));
        }
    }
}

/// Computes the next generation into a fresh grid. `grid` is only read.
pub fn advance(grid: &Grid) -> Grid {
    let mut next = grid.clone();
    for y in 0..grid.rows() {
        for x in 0..grid.columns() {
            let count = live_neighbors(grid, x, y);
            next.set(x, y, next_state(grid.get(x, y), count));
        }
    }
    next
}

/// Live cells among the 8 neighbours of `(x, y)`, wrapping at every edge.
pub fn live_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    let columns = grid.columns() as isize;
    let rows = grid.rows() as isize;
    let mut count = 0;
    for &(dx, dy) in &NEIGHBOR_OFFSETS {
        let nx = (x as isize + dx).rem_euclid(columns) as usize;
        let ny = (y as isize + dy).rem_euclid(rows) as usize;
        if grid.get(nx, ny) {
            count += 1;
        }
    }
    count
}

#[rustfmt::skip]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}
