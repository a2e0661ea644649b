//! Bounded enumeration of distinct simple routes between start and end.

use crate::types::{CellKind, Pos};

use super::grid::{index, is_open, neighbors4};

/// Longest simple route the search will follow before pruning the branch.
const MAX_ROUTE_DEPTH: usize = 1000;

/// The search is a "has multiple routes" probe, not an exhaustive counter;
/// it stops as soon as this many complete routes are found.
const ROUTE_COUNT_CUTOFF: usize = 10;

struct Frame {
    pos: Pos,
    next_dir: usize,
}

/// Backtracking depth-first enumeration of simple routes with an explicit
/// frame stack, so Expert-tier grids cannot overflow the call stack. The
/// visited set is scoped to the route under construction: cells are
/// unmarked as frames pop, which is what makes the counted routes distinct
/// rather than merely the reachable region.
pub(super) fn count_distinct_routes(
    cells: &[CellKind],
    size: usize,
    start: Pos,
    end: Pos,
) -> usize {
    if !is_open(cells, size, start) || !is_open(cells, size, end) {
        return 0;
    }

    let mut visited = vec![false; size * size];
    visited[index(size, start)] = true;
    let mut frames = vec![Frame { pos: start, next_dir: 0 }];
    let mut found = 0;

    while !frames.is_empty() {
        let depth = frames.len();
        let frame = frames.last_mut().expect("stack is non-empty");
        let pos = frame.pos;

        // A frame standing on the end completes one route; routes are never
        // extended past the end cell.
        if pos == end {
            found += 1;
            visited[index(size, pos)] = false;
            frames.pop();
            if found >= ROUTE_COUNT_CUTOFF {
                break;
            }
            continue;
        }

        // Depth cap prunes this branch only; shorter routes elsewhere are
        // still explored.
        if depth > MAX_ROUTE_DEPTH {
            visited[index(size, pos)] = false;
            frames.pop();
            continue;
        }

        let mut advance: Option<Pos> = None;
        while frame.next_dir < 4 {
            let next = neighbors4(pos)[frame.next_dir];
            frame.next_dir += 1;
            if is_open(cells, size, next) && !visited[index(size, next)] {
                advance = Some(next);
                break;
            }
        }

        match advance {
            Some(next) => {
                visited[index(size, next)] = true;
                frames.push(Frame { pos: next, next_dir: 0 });
            }
            None => {
                visited[index(size, pos)] = false;
                frames.pop();
            }
        }
    }

    found
}
