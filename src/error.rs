use thiserror::Error;

/// Errors raised when allocating a grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must have at least one column and one row, got {columns}x{rows}")]
    EmptyDimension { columns: usize, rows: usize },
    #[error("grid of {columns}x{rows} cells does not fit in memory")]
    TooLarge { columns: usize, rows: usize },
}

/// Errors raised when validating startup configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("columns must be non-zero")]
    ZeroColumns,
    #[error("rows must be non-zero")]
    ZeroRows,
    #[error("updates per second must be a positive finite number, got {0}")]
    InvalidRate(f64),
    #[error("window size must be positive, got {width}x{height}")]
    InvalidWindowSize { width: f32, height: f32 },
}

/// Everything that can stop the application from starting or running.
#[derive(Debug, Error)]
pub enum LifeError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("window error: {0}")]
    Window(#[from] eframe::Error),
}
