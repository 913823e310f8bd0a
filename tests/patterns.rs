use toroidal_life::Grid;
use toroidal_life::life::advance;

fn grid_with(columns: usize, rows: usize, live: &[(usize, usize)]) -> Grid {
    let mut grid = Grid::new(columns, rows).unwrap();
    for &(x, y) in live {
        grid.set(x, y, true);
    }
    grid
}

fn run(grid: &Grid, generations: usize) -> Grid {
    let mut current = grid.clone();
    for _ in 0..generations {
        current = advance(&current);
    }
    current
}

const GLIDER: [(usize, usize); 5] = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

#[test]
fn blinker_has_period_two() {
    let horizontal = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
    let vertical = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);

    assert_eq!(advance(&horizontal), vertical);
    assert_eq!(advance(&vertical), horizontal);
}

#[test]
fn blinker_across_the_seam() {
    let horizontal = grid_with(5, 5, &[(4, 0), (0, 0), (1, 0)]);
    let vertical = grid_with(5, 5, &[(0, 4), (0, 0), (0, 1)]);

    assert_eq!(advance(&horizontal), vertical);
}

#[test]
fn glider_moves_one_diagonal_step_every_four_generations() {
    let start = grid_with(10, 10, &GLIDER);
    let shifted: Vec<_> = GLIDER.iter().map(|&(x, y)| (x + 1, y + 1)).collect();

    assert_eq!(run(&start, 4), grid_with(10, 10, &shifted));
}

#[test]
fn glider_circles_the_torus() {
    for size in [8, 12] {
        let start = grid_with(size, size, &GLIDER);
        assert_eq!(run(&start, 4 * size), start, "glider lost on {size}x{size}");
    }
}

#[test]
fn glider_on_rectangular_torus_keeps_population() {
    let start = grid_with(16, 9, &GLIDER);
    let later = run(&start, 100);
    assert_eq!(later.live_count(), 5);
    assert_eq!(later.columns(), 16);
    assert_eq!(later.rows(), 9);
}
