//! See [`Cell`], the state of one square of the maze

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The state of one grid unit, as stored in a maze's byte buffer
///
/// The byte values are the buffer encoding and must stay stable
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    IntoPrimitive,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
pub enum Cell {
    /// Walkable
    Space = 0,
    Wall = 1,
    /// A wall that is still being laid down; drawn like a passage
    TempWall = 2,
}

// not `#[default]`: num_enum reads that as the fallback for unknown bytes
impl Default for Cell {
    fn default() -> Self {
        Cell::Space
    }
}

impl Cell {
    /// The buffer byte for [`Cell::Wall`]
    pub const WALL_BYTE: u8 = Cell::Wall as u8;

    /// All cell states in encoding order
    pub fn get_all() -> [Cell; 3] {
        [Cell::Space, Cell::Wall, Cell::TempWall]
    }

    pub fn is_wall(&self) -> bool {
        *self == Cell::Wall
    }

    /// Whether a raw buffer byte encodes a wall
    ///
    /// Unknown bytes are not walls
    pub fn byte_is_wall(byte: u8) -> bool {
        byte == Self::WALL_BYTE
    }

    /// The character used for this cell in text layouts
    pub fn symbol(&self) -> char {
        match self {
            Cell::Space => '.',
            Cell::Wall => '#',
            Cell::TempWall => '+',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' | ' ' => Some(Cell::Space),
            '#' => Some(Cell::Wall),
            '+' => Some(Cell::TempWall),
            _ => None,
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Space => write!(f, "Space"),
            Cell::Wall => write!(f, "Wall"),
            Cell::TempWall => write!(f, "TempWall"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_encoding() {
        for (i, cell) in Cell::get_all().into_iter().enumerate() {
            assert_eq!(u8::from(cell) as usize, i, "get_all should be in encoding order");
            assert_eq!(Cell::try_from(i as u8).ok(), Some(cell));
            assert_eq!(Cell::from_symbol(cell.symbol()), Some(cell));
        }
        assert!(Cell::try_from(3).is_err());
        assert!(Cell::try_from(u8::MAX).is_err());
        assert_eq!(Cell::default(), Cell::Space);
        assert_eq!(Cell::WALL_BYTE, 1);
    }

    #[test]
    fn only_wall_bytes_are_walls() {
        for byte in 0..=u8::MAX {
            assert_eq!(Cell::byte_is_wall(byte), byte == 1, "byte {byte}");
        }
        assert!(Cell::Wall.is_wall());
        assert!(!Cell::TempWall.is_wall());
        assert!(!Cell::Space.is_wall());
    }
}
