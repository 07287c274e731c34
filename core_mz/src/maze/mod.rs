//! [`MazeSource`] is what the renderer reads every frame; [`Maze`] is the owned implementation

use crate::cell::Cell;
use crate::maze::standard_maze::StandardMaze;
use anyhow::{anyhow, bail, Error};

pub mod standard_maze;

/// Anything that can hand out maze dimensions and a row-major cell buffer
///
/// Dimensions must not change for the lifetime of the source. The buffer may be mutated
/// between frames, so renderers read it again on every frame.
pub trait MazeSource {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// One byte per cell, `row * width + column`, encoded as [`Cell`]
    fn cells(&self) -> &[u8];
}

/// A grid of [`Cell`]s stored as their byte encoding
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) cells: Vec<u8>,
    pub(crate) standard_maze: Option<StandardMaze>,
}

impl Default for Maze {
    fn default() -> Self {
        Self::new()
    }
}

impl Maze {
    /// The default [`StandardMaze`]
    pub fn new() -> Self {
        StandardMaze::default().get_maze()
    }

    /// Parse a text layout, one string per row
    ///
    /// `#` is a wall, `.` (or a space) is walkable, `+` is a temporary wall
    ///
    /// ```
    /// use core_mz::cell::Cell;
    /// use core_mz::maze::Maze;
    ///
    /// let maze = Maze::from_rows(&["###", "#.#", "###"]).unwrap();
    /// assert_eq!(maze.get(1, 1), Some(Cell::Space));
    /// assert!(Maze::from_rows(&["###", "#."]).is_err());
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self, Error> {
        let width = rows.first().map(|row| row.chars().count()).unwrap_or(0);
        if width == 0 {
            bail!("Maze layout is empty");
        }
        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != width {
                bail!(
                    "Row {} has {} cells, expected {}",
                    row,
                    line.chars().count(),
                    width
                );
            }
            for (col, c) in line.chars().enumerate() {
                let cell = Cell::from_symbol(c)
                    .ok_or_else(|| anyhow!("Unknown cell {:?} at ({}, {})", c, row, col))?;
                cells.push(cell.into());
            }
        }
        Ok(Self {
            width: width as u32,
            height: rows.len() as u32,
            cells,
            standard_maze: None,
        })
    }

    /// Wrap an existing cell buffer
    ///
    /// Bytes are kept as they are; ones that don't decode to a [`Cell`] are never walls
    pub fn from_bytes(width: u32, height: u32, cells: Vec<u8>) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            bail!("Maze dimensions must be positive, got {}x{}", width, height);
        }
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            bail!(
                "Cell buffer has {} bytes, expected {} for a {}x{} maze",
                cells.len(),
                expected,
                width,
                height
            );
        }
        Ok(Self {
            width,
            height,
            cells,
            standard_maze: None,
        })
    }

    /// The [`StandardMaze`] this was built from, if any
    pub fn standard_maze(&self) -> Option<StandardMaze> {
        self.standard_maze
    }

    pub(crate) fn set_standard_maze(&mut self, standard_maze: StandardMaze) {
        self.standard_maze = Some(standard_maze);
    }

    pub fn get_index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    fn in_bounds(&self, row: u32, col: u32) -> bool {
        row < self.height && col < self.width
    }

    /// The cell at a location, or `None` if it is out of bounds or holds an unknown byte
    pub fn get(&self, row: u32, col: u32) -> Option<Cell> {
        if !self.in_bounds(row, col) {
            return None;
        }
        Cell::try_from(self.cells[self.get_index(row, col)]).ok()
    }

    /// Overwrite a cell; the change shows up on the next rendered frame
    pub fn set(&mut self, row: u32, col: u32, cell: Cell) -> Result<(), Error> {
        if !self.in_bounds(row, col) {
            bail!(
                "({}, {}) is outside the {}x{} maze",
                row,
                col,
                self.width,
                self.height
            );
        }
        let idx = self.get_index(row, col);
        self.cells[idx] = cell.into();
        Ok(())
    }

    /// Number of cells that are [`Cell::Wall`]
    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|b| Cell::byte_is_wall(**b)).count()
    }
}

impl MazeSource for Maze {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn cells(&self) -> &[u8] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_row_major() {
        let maze = Maze::from_bytes(4, 3, vec![0; 12]).unwrap();
        assert_eq!(maze.get_index(0, 0), 0);
        assert_eq!(maze.get_index(0, 3), 3);
        assert_eq!(maze.get_index(1, 1), 5);
        assert_eq!(maze.get_index(2, 3), 11);
    }

    #[test]
    fn set_is_visible_in_buffer() {
        let mut maze = Maze::from_bytes(4, 3, vec![0; 12]).unwrap();
        maze.set(1, 1, Cell::Wall).unwrap();
        assert_eq!(maze.cells()[5], Cell::WALL_BYTE);
        assert_eq!(maze.get(1, 1), Some(Cell::Wall));
        assert_eq!(maze.wall_count(), 1);

        let v = maze.set(3, 0, Cell::Wall);
        assert!(v.is_err());
        assert_eq!(
            format!("{}", v.unwrap_err()),
            "(3, 0) is outside the 4x3 maze"
        );
    }

    #[test]
    fn from_bytes_requires_matching_length() {
        let v = Maze::from_bytes(4, 3, vec![0; 11]);
        assert!(v.is_err());
        assert_eq!(
            format!("{}", v.unwrap_err()),
            "Cell buffer has 11 bytes, expected 12 for a 4x3 maze"
        );
        assert!(Maze::from_bytes(0, 3, vec![]).is_err());
    }

    #[test]
    fn unknown_bytes_are_kept() {
        let maze = Maze::from_bytes(2, 1, vec![7, 1]).unwrap();
        assert_eq!(maze.cells(), &[7, 1]);
        assert_eq!(maze.get(0, 0), None);
        assert_eq!(maze.get(0, 1), Some(Cell::Wall));
    }

    #[test]
    fn from_rows_rejects_bad_layouts() {
        assert_eq!(
            format!("{}", Maze::from_rows(&[]).unwrap_err()),
            "Maze layout is empty"
        );
        assert_eq!(
            format!("{}", Maze::from_rows(&["##", "#"]).unwrap_err()),
            "Row 1 has 1 cells, expected 2"
        );
        assert_eq!(
            format!("{}", Maze::from_rows(&["#x"]).unwrap_err()),
            "Unknown cell 'x' at (0, 1)"
        );
    }

    #[test]
    fn from_rows_reads_every_symbol() {
        let maze = Maze::from_rows(&["#.+", "...", "###"]).unwrap();
        assert_eq!((maze.width(), maze.height()), (3, 3));
        assert_eq!(maze.get(0, 0), Some(Cell::Wall));
        assert_eq!(maze.get(0, 1), Some(Cell::Space));
        assert_eq!(maze.get(0, 2), Some(Cell::TempWall));
        assert_eq!(maze.wall_count(), 4);
        assert_eq!(maze.standard_maze(), None);
    }

    #[test]
    fn new_is_default_standard_maze() {
        let maze = Maze::new();
        assert_eq!(maze.standard_maze(), Some(StandardMaze::default()));
    }
}
