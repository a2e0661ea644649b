use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Wall,
    Path,
    Start,
    End,
}

impl CellKind {
    pub fn is_open(self) -> bool {
        self != CellKind::Wall
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit offset as `(dy, dx)` in row-major grid coordinates.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Construction-time precondition violations. Runtime rejections (blocked
/// moves, unreachable goals) fail soft instead of going through this type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MazeError {
    UnknownTier(String),
    SizeTooSmall { size: usize },
    SizeNotOdd { size: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::UnknownTier(name) => {
                write!(f, "unknown difficulty tier: {name:?} (expected easy, medium, hard, or expert)")
            }
            MazeError::SizeTooSmall { size } => {
                write!(f, "maze size {size} is too small to carve an interior (minimum is 5)")
            }
            MazeError::SizeNotOdd { size } => {
                write!(f, "maze size {size} must be odd so carving lands on interior cells")
            }
        }
    }
}

impl std::error::Error for MazeError {}
