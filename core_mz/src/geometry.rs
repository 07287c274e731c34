//! Pixel layout of a maze drawn as `cell_size` squares separated by 1 pixel grid lines

use crate::maze::MazeSource;
use anyhow::{anyhow, Error};

/// An axis-aligned rectangle in canvas pixels
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.width && y < self.y + self.height
    }
}

/// A straight line between two canvas pixel coordinates
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LineSegment {
    pub from: (u32, u32),
    pub to: (u32, u32),
}

/// Where every grid line and cell of a `width` x `height` maze lands on the canvas
///
/// Only built through [`GridLayout::new`], so every pixel coordinate fits in a `u32`
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridLayout {
    width: u32,
    height: u32,
    cell_size: u32,
}

impl GridLayout {
    /// Fails if the canvas for this grid would be wider or taller than `u32::MAX` pixels
    pub fn new(width: u32, height: u32, cell_size: u32) -> Result<Self, Error> {
        let canvas_side = |cells: u32| {
            cell_size
                .checked_add(1)
                .and_then(|pitch| pitch.checked_mul(cells))
                .and_then(|side| side.checked_add(1))
        };
        if canvas_side(width).is_none() || canvas_side(height).is_none() {
            return Err(anyhow!(
                "A {}x{} maze at {}px per cell does not fit on a canvas",
                width,
                height,
                cell_size
            ));
        }
        Ok(Self {
            width,
            height,
            cell_size,
        })
    }

    pub fn for_maze<M: MazeSource + ?Sized>(maze: &M, cell_size: u32) -> Result<Self, Error> {
        Self::new(maze.width(), maze.height(), cell_size)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Distance between two neighboring grid lines
    pub fn pitch(&self) -> u32 {
        self.cell_size + 1
    }

    /// Canvas `(width, height)` in pixels
    pub fn canvas_size(&self) -> (u32, u32) {
        (
            self.pitch() * self.width + 1,
            self.pitch() * self.height + 1,
        )
    }

    /// Pixel offset of the `i`th grid line on either axis
    pub fn line_offset(&self, i: u32) -> u32 {
        i * self.pitch() + 1
    }

    /// `width + 1` lines spanning the full canvas height
    pub fn vertical_lines(&self) -> impl Iterator<Item = LineSegment> + '_ {
        let (_, canvas_height) = self.canvas_size();
        (0..=self.width).map(move |i| {
            let x = self.line_offset(i);
            LineSegment {
                from: (x, 0),
                to: (x, canvas_height),
            }
        })
    }

    /// `height + 1` lines spanning the full canvas width
    pub fn horizontal_lines(&self) -> impl Iterator<Item = LineSegment> + '_ {
        let (canvas_width, _) = self.canvas_size();
        (0..=self.height).map(move |j| {
            let y = self.line_offset(j);
            LineSegment {
                from: (0, y),
                to: (canvas_width, y),
            }
        })
    }

    pub fn cell_rect(&self, row: u32, col: u32) -> PixelRect {
        PixelRect {
            x: col * self.pitch() + 1,
            y: row * self.pitch() + 1,
            width: self.cell_size,
            height: self.cell_size,
        }
    }

    /// Buffer index of a cell
    pub fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// `(row, col)` of the cell painted at a pixel, `None` on grid lines or off the canvas
    pub fn cell_at_pixel(&self, x: u32, y: u32) -> Option<(u32, u32)> {
        if x == 0 || y == 0 {
            return None;
        }
        let col = (x - 1) / self.pitch();
        let row = (y - 1) / self.pitch();
        if row >= self.height || col >= self.width {
            return None;
        }
        if self.cell_rect(row, col).contains(x, y) {
            Some((row, col))
        } else {
            None
        }
    }
}
