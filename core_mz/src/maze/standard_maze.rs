use crate::cell::Cell;
use crate::maze::Maze;
use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Width of the computed [`StandardMaze`]s ([`StandardMaze::Open`], [`StandardMaze::Blank`])
pub const COMPUTED_MAZE_WIDTH: u32 = 32;
/// Height of the computed [`StandardMaze`]s ([`StandardMaze::Open`], [`StandardMaze::Blank`])
pub const COMPUTED_MAZE_HEIGHT: u32 = 24;

#[derive(Copy, Clone, Debug, Default, PartialOrd, PartialEq, Ord, Eq, Hash, Serialize, Deserialize)]
pub enum StandardMaze {
    #[default]
    Classic,
    Rooms,
    Open,
    Blank,
}

impl StandardMaze {
    /// Get a list of all available mazes
    pub fn get_all() -> [Self; 4] {
        [Self::Classic, Self::Rooms, Self::Open, Self::Blank]
    }

    /// Build the [`Maze`] associated with this enum
    pub fn get_maze(&self) -> Maze {
        let maze = match self {
            Self::Classic => Maze::from_rows(MAZE_CLASSIC),
            Self::Rooms => Maze::from_rows(MAZE_ROOMS),
            Self::Open => Ok(bordered(COMPUTED_MAZE_WIDTH, COMPUTED_MAZE_HEIGHT)),
            Self::Blank => Maze::from_bytes(
                COMPUTED_MAZE_WIDTH,
                COMPUTED_MAZE_HEIGHT,
                vec![Cell::Space.into(); (COMPUTED_MAZE_WIDTH * COMPUTED_MAZE_HEIGHT) as usize],
            ),
        };
        // the layouts are fixed and checked by tests
        let mut maze = maze.unwrap_or_else(|e| panic!("standard maze {self} is invalid: {e}"));
        maze.set_standard_maze(*self);
        maze
    }

    /// Whether every cell on the outer edge is a wall
    pub fn is_bordered(&self) -> bool {
        !matches!(self, Self::Blank)
    }
}

impl Display for StandardMaze {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl FromStr for StandardMaze {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::get_all()
            .into_iter()
            .find(|maze| maze.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow!("Unknown maze {s:?}"))
    }
}

impl From<StandardMaze> for Maze {
    fn from(value: StandardMaze) -> Self {
        value.get_maze()
    }
}

fn bordered(width: u32, height: u32) -> Maze {
    let cells: Vec<u8> = (0..height)
        .flat_map(|row| {
            (0..width).map(move |col| {
                let edge = row == 0 || col == 0 || row == height - 1 || col == width - 1;
                if edge {
                    Cell::Wall.into()
                } else {
                    Cell::Space.into()
                }
            })
        })
        .collect();
    Maze {
        width,
        height,
        cells,
        standard_maze: None,
    }
}

/// A 21x15 maze with a single route between any two passages
///
/// ```
/// use core_mz::maze::standard_maze::MAZE_CLASSIC;
/// use core_mz::maze::{Maze, MazeSource};
///
/// let maze = Maze::from_rows(MAZE_CLASSIC).unwrap();
/// assert_eq!((maze.width(), maze.height()), (21, 15));
/// ```
#[rustfmt::skip]
pub const MAZE_CLASSIC: &[&str] = &[
    "#####################", // 0
    "#.....#.........#...#",
    "#.###.#.#######.#.#.#",
    "#.#...#.#.....#...#.#",
    "#.#.###.#.###.#####.#",
    "#.#.....#...#.......#", // 5
    "#.#########.#######.#",
    "#.....#...#.....#...#",
    "#####.#.#.#####.#.###",
    "#.....#.#.....#.#...#",
    "#.#####.#####.#.###.#", // 10
    "#.#.....#...#.#...#.#",
    "#.#.#####.#.#.###.#.#",
    "#...#.....#.......#.#",
    "#####################",
];

/// A 25x13 floor plan of open rooms joined by doorways
///
/// ```
/// use core_mz::maze::standard_maze::MAZE_ROOMS;
/// use core_mz::maze::{Maze, MazeSource};
///
/// let maze = Maze::from_rows(MAZE_ROOMS).unwrap();
/// assert_eq!((maze.width(), maze.height()), (25, 13));
/// ```
#[rustfmt::skip]
pub const MAZE_ROOMS: &[&str] = &[
    "#########################", // 0
    "#.....#.........#.......#",
    "#.....#.........#.......#",
    "#.....#....#....#.......#",
    "###.###....#....###.#####",
    "#..........#............#", // 5
    "#.....######.####.......#",
    "#.....#.........#.......#",
    "#######.........#.......#",
    "#.....#....#............#",
    "#..........#....#.......#", // 10
    "#.....#....#....#.......#",
    "#########################",
];
