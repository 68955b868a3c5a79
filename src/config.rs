// --- File: config.rs ---
use crate::constants::*;
use crate::error::{LifeError, Result};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct LifeConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub cell_size: u32, // Pixels per cell side
    pub alive_color: [u8; 3],
    pub dead_color: [u8; 3],
    pub max_updates_per_second: f64,
    pub alive_probability: f64,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            alive_color: DEFAULT_ALIVE_COLOR,
            dead_color: DEFAULT_DEAD_COLOR,
            max_updates_per_second: DEFAULT_MAX_UPDATES_PER_SECOND,
            alive_probability: DEFAULT_ALIVE_PROBABILITY,
        }
    }
}

impl LifeConfig {
    /// `(num_rows, num_cols)` from the screen size, truncating partial cells.
    pub fn grid_dimensions(&self) -> Result<(usize, usize)> {
        if self.cell_size == 0 {
            return Err(LifeError::InvalidDimensions { rows: 0, cols: 0 });
        }
        let rows = (self.screen_height / self.cell_size) as usize;
        let cols = (self.screen_width / self.cell_size) as usize;
        if rows == 0 || cols == 0 {
            return Err(LifeError::InvalidDimensions { rows, cols });
        }
        Ok((rows, cols))
    }

    /// Shortest allowed time between two generation updates.
    /// A non-positive or non-finite rate means no cap. A rate too small for the
    /// interval to fit in a `Duration` saturates to `Duration::MAX`.
    pub fn min_update_interval(&self) -> Duration {
        if self.max_updates_per_second.is_finite() && self.max_updates_per_second > 0.0 {
            Duration::try_from_secs_f64(1.0 / self.max_updates_per_second)
                .unwrap_or(Duration::MAX)
        } else {
            Duration::ZERO
        }
    }

    pub fn cell_radius(&self) -> f32 {
        self.cell_size as f32 / 2.0
    }
}

// --- End of File: config.rs ---
