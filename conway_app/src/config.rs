// config.rs - Compile-time settings for the Game of Life window

// Grid
pub const GRID_WIDTH: i32  = 50;                      // Cells across
pub const GRID_HEIGHT: i32 = 50;                      // Cells down

// Step timing, in seconds between generations
pub const DEFAULT_INTERVAL_SECS: f32 = 0.5;
pub const MAX_INTERVAL_SECS: f32     = 2.0;

// Camera, in screen points per cell
pub const DEFAULT_CELL_SIZE: f32 = 15.0;
pub const MIN_CELL_SIZE: f32     = 2.0;
pub const MAX_CELL_SIZE: f32     = 60.0;
pub const ZOOM_SPEED: f32        = 0.002;             // Relative zoom per scrolled point
pub const CELL_SPACING: f32      = 0.5;

/// Generations remembered when looking for a repeating state.
pub const HISTORY_LEN: usize = 10;

pub const WINDOW_SIZE: [f32; 2] = [800.0, 950.0];

/// Used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "conway=info,conway_app=info";
