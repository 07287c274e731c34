use ecolor::Color32;

/// Pixel size of one cell, not counting the grid line around it
pub const DEFAULT_CELL_SIZE: u32 = 7;
/// Largest cell size accepted by the settings
pub const MAX_CELL_SIZE: u32 = 64;

pub const GRID_LINE_COLOR: Color32 = Color32::from_rgb(0xCC, 0xCC, 0xCC);
pub const WALL_COLOR: Color32 = Color32::BLACK;
pub const PASSAGE_COLOR: Color32 = Color32::WHITE;

/// Element id of the canvas in the host page
pub const CANVAS_ELEMENT_ID: &str = "mycanvas";
pub const CELL_SIZE_ATTRIBUTE: &str = "data-cell-size";
pub const MAZE_ATTRIBUTE: &str = "data-maze";

/// How many frames pass between frame timing reports in the log
pub const FRAMES_PER_REPORT: u64 = 600;
