// --- File: constants.rs ---
// --- Global Simulation Constants ---
pub const DEFAULT_SCREEN_WIDTH: u32 = 800;
pub const DEFAULT_SCREEN_HEIGHT: u32 = 600;
pub const DEFAULT_CELL_SIZE: u32 = 10;
pub const DEFAULT_MAX_UPDATES_PER_SECOND: f64 = 10.0;
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.2;

pub const DEFAULT_ALIVE_COLOR: [u8; 3] = [0, 255, 255]; // Cyan
pub const DEFAULT_DEAD_COLOR: [u8; 3] = [0, 0, 0];

// One active generation plus one scratch buffer
pub const BUFFER_COUNT: usize = 2;

pub const WINDOW_TITLE: &str = "Game of Life";
pub const FPS_UPDATE_INTERVAL_SECS: f64 = 1.0;

// --- End of File: constants.rs ---
