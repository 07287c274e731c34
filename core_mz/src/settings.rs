use crate::constants::{
    DEFAULT_CELL_SIZE, GRID_LINE_COLOR, MAX_CELL_SIZE, PASSAGE_COLOR, WALL_COLOR,
};
use crate::maze::standard_maze::StandardMaze;
use anyhow::{bail, Error};
use ecolor::Color32;
use serde::{Deserialize, Serialize};

/// How the maze is drawn, and which maze
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Width and height of each cell in pixels, not counting grid lines
    pub cell_size: u32,
    /// Which maze is shown
    pub standard_maze: StandardMaze,
    /// Options for colors
    pub palette: Palette,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            standard_maze: Default::default(),
            palette: Default::default(),
        }
    }
}

impl RenderSettings {
    pub fn validate(&self) -> Result<(), Error> {
        if self.cell_size == 0 {
            bail!("Cell size must be at least 1");
        }
        if self.cell_size > MAX_CELL_SIZE {
            bail!(
                "Cell size {} is larger than the maximum {}",
                self.cell_size,
                MAX_CELL_SIZE
            );
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub grid: Color32,
    pub wall: Color32,
    /// Every cell that is not a wall
    pub passage: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            grid: GRID_LINE_COLOR,
            wall: WALL_COLOR,
            passage: PASSAGE_COLOR,
        }
    }
}
