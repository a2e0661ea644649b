//! Carving phases that turn a solid wall buffer into a multi-route maze.
//!
//! The phases run in sequence over one exclusively borrowed cell buffer:
//! base passages first, then random extra openings, then a handful of
//! deliberate side corridors. None of them can fail; a phase that runs out
//! of attempts simply leaves fewer openings behind.

use rand_chacha::ChaCha8Rng;

use crate::types::{CellKind, Pos};

use super::grid::{cell_at, index, is_open, open_neighbor_count};
use super::rng::{chance, coin_flip, random_usize};

/// Randomized backtracker over the odd interior lattice. Carves from (1,1)
/// in two-cell jumps, opening the intermediate cell of each jump, until the
/// stack drains. The result is a perfect maze: every interior lattice cell
/// reachable through exactly one route.
pub(super) fn carve_base_passages(cells: &mut [CellKind], size: usize, rng: &mut ChaCha8Rng) {
    let origin = Pos { y: 1, x: 1 };
    cells[index(size, origin)] = CellKind::Path;
    let mut stack = vec![origin];

    while let Some(&current) = stack.last() {
        let mut jumps: Vec<(Pos, Pos)> = Vec::with_capacity(4);
        for (dy, dx) in [(-2_i32, 0_i32), (2, 0), (0, -2), (0, 2)] {
            let target = Pos { y: current.y + dy, x: current.x + dx };
            if !in_interior(size, target) || cell_at(cells, size, target) != CellKind::Wall {
                continue;
            }
            let between = Pos { y: current.y + dy / 2, x: current.x + dx / 2 };
            jumps.push((between, target));
        }

        if jumps.is_empty() {
            stack.pop();
            continue;
        }

        let (between, target) = jumps[random_usize(rng, 0, jumps.len() - 1)];
        cells[index(size, between)] = CellKind::Path;
        cells[index(size, target)] = CellKind::Path;
        stack.push(target);
    }
}

/// Augmentation pass: random interior walls touching at least two open
/// cells become openings, merging neighboring branches without tunneling
/// through solid blocks. Bounded by 2·size² samples so an unreachable
/// target count still terminates.
pub(super) fn punch_extra_openings(
    cells: &mut [CellKind],
    size: usize,
    rng: &mut ChaCha8Rng,
    target: usize,
) -> usize {
    let mut opened = 0;
    let max_samples = size * size * 2;

    for _ in 0..max_samples {
        if opened >= target {
            break;
        }
        let pos = Pos {
            y: random_usize(rng, 1, size - 2) as i32,
            x: random_usize(rng, 1, size - 2) as i32,
        };
        if is_open(cells, size, pos) {
            continue;
        }
        if open_neighbor_count(cells, size, pos) >= 2 {
            cells[index(size, pos)] = CellKind::Path;
            opened += 1;
        }
    }

    opened
}

/// Deliberate alternate-route pass: three to five straight corridors carved
/// from random open cells, each with a 30% per-step chance of one
/// perpendicular branch cell. A corridor that cannot find an open start in
/// 100 tries is silently skipped.
pub(super) fn carve_side_corridors(cells: &mut [CellKind], size: usize, rng: &mut ChaCha8Rng) {
    let corridor_count = random_usize(rng, 3, 5);
    for _ in 0..corridor_count {
        carve_one_corridor(cells, size, rng);
    }
}

fn carve_one_corridor(cells: &mut [CellKind], size: usize, rng: &mut ChaCha8Rng) {
    for _ in 0..100 {
        let start = Pos {
            y: random_usize(rng, 2, size - 3) as i32,
            x: random_usize(rng, 2, size - 3) as i32,
        };
        if !is_open(cells, size, start) {
            continue;
        }

        let (dy, dx) = match random_usize(rng, 0, 3) {
            0 => (-1, 0),
            1 => (1, 0),
            2 => (0, -1),
            _ => (0, 1),
        };
        let length = random_usize(rng, 3, 7);

        let mut pos = start;
        for _ in 0..length {
            pos = Pos { y: pos.y + dy, x: pos.x + dx };
            if !in_interior(size, pos) {
                break;
            }
            cells[index(size, pos)] = CellKind::Path;

            if chance(rng, 30) {
                carve_branch_cell(cells, size, rng, pos, dy, dx);
            }
        }
        return;
    }
}

fn carve_branch_cell(
    cells: &mut [CellKind],
    size: usize,
    rng: &mut ChaCha8Rng,
    pos: Pos,
    dy: i32,
    dx: i32,
) {
    let side = if coin_flip(rng) { 1 } else { -1 };
    let limit = size as i32 - 2;
    if dx != 0 && pos.y > 1 && pos.y < limit {
        cells[index(size, Pos { y: pos.y + side, x: pos.x })] = CellKind::Path;
    } else if dy != 0 && pos.x > 1 && pos.x < limit {
        cells[index(size, Pos { y: pos.y, x: pos.x + side })] = CellKind::Path;
    }
}

fn in_interior(size: usize, pos: Pos) -> bool {
    pos.x > 0 && pos.y > 0 && pos.x < size as i32 - 1 && pos.y < size as i32 - 1
}
