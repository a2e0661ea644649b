//! Breadth-first shortest-route search over a finalized maze.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::mazegen::GeneratedMaze;
use crate::types::Pos;

/// Shortest route between two open cells, inclusive of both endpoints.
/// Returns an empty vector when no route exists; callers must treat empty
/// as "no solution", not as a trivial route at the start. When `from`
/// equals `to` the route is the single shared cell.
pub fn shortest_path(maze: &GeneratedMaze, from: Pos, to: Pos) -> Vec<Pos> {
    if !maze.is_open(from) || !maze.is_open(to) {
        return Vec::new();
    }
    if from == to {
        return vec![from];
    }

    let mut frontier = VecDeque::from([from]);
    let mut visited = BTreeSet::from([from]);
    let mut came_from: BTreeMap<Pos, Pos> = BTreeMap::new();

    while let Some(current) = frontier.pop_front() {
        if current == to {
            return reconstruct_route(&came_from, from, to);
        }

        for next in neighbors(current) {
            if !maze.is_open(next) || !visited.insert(next) {
                continue;
            }
            came_from.insert(next, current);
            frontier.push_back(next);
        }
    }

    Vec::new()
}

fn reconstruct_route(came_from: &BTreeMap<Pos, Pos>, from: Pos, to: Pos) -> Vec<Pos> {
    let mut route = vec![to];
    let mut current = to;

    while current != from {
        let Some(previous) = came_from.get(&current).copied() else {
            return Vec::new();
        };
        current = previous;
        route.push(current);
    }

    route.reverse();
    route
}

// Fixed order: up, down, left, right. Only tie-breaking among equal-length
// routes depends on it.
fn neighbors(pos: Pos) -> [Pos; 4] {
    [
        Pos { y: pos.y - 1, x: pos.x },
        Pos { y: pos.y + 1, x: pos.x },
        Pos { y: pos.y, x: pos.x - 1 },
        Pos { y: pos.y, x: pos.x + 1 },
    ]
}
