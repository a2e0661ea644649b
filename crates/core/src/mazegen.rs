//! Procedural maze generation domain split into coherent submodules.

pub mod model;
pub mod tiers;

mod carve;
mod generator;
mod grid;
mod rng;
mod routes;

pub use generator::MazeGenerator;
pub use model::GeneratedMaze;
pub use tiers::{Difficulty, MAX_GENERATION_ATTEMPTS, MIN_MAZE_SIZE};

pub fn generate_maze(seed: u64, tier: Difficulty) -> GeneratedMaze {
    MazeGenerator::new(seed, tier).generate()
}

/// Bounded count of distinct simple routes from start to end. Stops early
/// once ten routes are found; zero means the end was unreachable within the
/// depth cap.
pub fn count_distinct_routes(maze: &GeneratedMaze) -> usize {
    routes::count_distinct_routes(&maze.cells, maze.size, maze.start, maze.end)
}
