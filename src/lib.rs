//! Conway's Game of Life on a toroidal grid, drawn with eframe.

pub mod config;
pub mod error;
pub mod grid;
pub mod input;
pub mod life;
pub mod tick;
pub mod ui;

pub use config::Config;
pub use error::{ConfigError, GridError, LifeError};
pub use grid::Grid;
