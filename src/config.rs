use std::time::Duration;

use clap::Parser;

use crate::error::ConfigError;

/// Startup configuration. Built once in `main` and lent to the app.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "toroidal_life", version, about = "Conway's Game of Life on a torus")]
pub struct Config {
    /// Grid width in cells.
    #[arg(long, env = "LIFE_COLUMNS", default_value_t = 100)]
    pub columns: usize,

    /// Grid height in cells.
    #[arg(long, env = "LIFE_ROWS", default_value_t = 100)]
    pub rows: usize,

    /// Generations computed per second, independent of the repaint rate.
    #[arg(long, env = "LIFE_UPDATES_PER_SECOND", default_value_t = 5.0)]
    pub updates_per_second: f64,

    #[arg(long, env = "LIFE_WINDOW_WIDTH", default_value_t = 1000.0)]
    pub window_width: f32,

    #[arg(long, env = "LIFE_WINDOW_HEIGHT", default_value_t = 1000.0)]
    pub window_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            columns: 100,
            rows: 100,
            updates_per_second: 5.0,
            window_width: 1000.0,
            window_height: 1000.0,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        let rate = self.updates_per_second;
        if !rate.is_finite() || rate <= 0.0 || Duration::try_from_secs_f64(1.0 / rate).is_err() {
            return Err(ConfigError::InvalidRate(rate));
        }
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(ConfigError::InvalidWindowSize {
                width: self.window_width,
                height: self.window_height,
            });
        }
        Ok(())
    }

    /// Time between two generation steps. Only meaningful once `validate` passed.
    pub fn update_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.updates_per_second)
    }
}
