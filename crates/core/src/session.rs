//! Game-session state: a finalized maze, the agent on it, and movement.

use crate::mazegen::{self, Difficulty, GeneratedMaze};
use crate::solver::shortest_path;
use crate::types::{Direction, Pos};

/// Owns one finalized maze and the mutable agent state on top of it. All
/// mutation goes through `&mut self`, so two callers cannot race on the
/// grid without external synchronization.
pub struct MazeSession {
    maze: GeneratedMaze,
    agent: Pos,
    steps: u32,
}

impl MazeSession {
    /// Builds a session on a freshly generated maze for the tier. The
    /// generator retries internally, so this always yields a usable maze.
    pub fn new(seed: u64, tier: Difficulty) -> Self {
        Self::from_maze(mazegen::generate_maze(seed, tier))
    }

    /// Wraps an existing maze (generated elsewhere or hand-built for
    /// synthetic layouts). The agent starts on the maze's start cell.
    pub fn from_maze(maze: GeneratedMaze) -> Self {
        let agent = maze.start;
        Self { maze, agent, steps: 0 }
    }

    pub fn maze(&self) -> &GeneratedMaze {
        &self.maze
    }

    pub fn agent(&self) -> Pos {
        self.agent
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn tier(&self) -> Difficulty {
        self.maze.tier
    }

    pub fn is_finished(&self) -> bool {
        self.agent == self.maze.end
    }

    /// Attempts a one-cell move. Accepted iff the target is in bounds and
    /// not a wall; a rejected move changes nothing and does not count.
    pub fn step(&mut self, direction: Direction) -> bool {
        let (dy, dx) = direction.offset();
        self.advance_to(Pos { y: self.agent.y + dy, x: self.agent.x + dx })
    }

    pub fn move_up(&mut self) -> bool {
        self.step(Direction::Up)
    }

    pub fn move_down(&mut self) -> bool {
        self.step(Direction::Down)
    }

    pub fn move_left(&mut self) -> bool {
        self.step(Direction::Left)
    }

    pub fn move_right(&mut self) -> bool {
        self.step(Direction::Right)
    }

    /// Absolute placement used by automated route playback. Unlike the
    /// directional moves it skips the adjacency rule, so it teleports; it
    /// is not a movement primitive and interactive shells must not expose
    /// it as one. Invalid targets are silently ignored.
    pub fn teleport_for_playback(&mut self, target: Pos) -> bool {
        self.advance_to(target)
    }

    /// Shortest route from the current agent position to the end cell,
    /// empty when unreachable. Pure query; repeated calls without
    /// intervening moves return identical routes.
    pub fn solve(&self) -> Vec<Pos> {
        shortest_path(&self.maze, self.agent, self.maze.end)
    }

    /// Solves from the current position and replays the route through
    /// playback teleports, one accepted step per route cell after the
    /// first. Returns the route that was walked (empty when unsolvable,
    /// in which case the agent does not move).
    pub fn play_back_solution(&mut self) -> Vec<Pos> {
        let route = self.solve();
        for &pos in route.iter().skip(1) {
            self.teleport_for_playback(pos);
        }
        route
    }

    pub fn snapshot_hash(&self) -> u64 {
        use std::hash::Hasher;
        use xxhash_rust::xxh3::Xxh3;

        let mut hasher = Xxh3::new();
        hasher.write(&self.maze.canonical_bytes());
        hasher.write_i32(self.agent.y);
        hasher.write_i32(self.agent.x);
        hasher.write_u32(self.steps);
        hasher.finish()
    }

    fn advance_to(&mut self, target: Pos) -> bool {
        if !self.maze.is_open(target) {
            return false;
        }
        self.agent = target;
        self.steps += 1;
        true
    }
}
