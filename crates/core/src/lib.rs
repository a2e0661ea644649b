pub mod mazegen;
pub mod session;
pub mod solver;
pub mod types;

pub use mazegen::{Difficulty, GeneratedMaze, MazeGenerator, count_distinct_routes, generate_maze};
pub use session::MazeSession;
pub use solver::shortest_path;
pub use types::*;
