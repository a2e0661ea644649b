//! Cell-buffer primitives shared by the carving and verification phases.

use crate::types::{CellKind, Pos};

pub(super) fn index(size: usize, pos: Pos) -> usize {
    (pos.y as usize) * size + (pos.x as usize)
}

pub(super) fn in_bounds(size: usize, pos: Pos) -> bool {
    pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < size && (pos.y as usize) < size
}

pub(super) fn cell_at(cells: &[CellKind], size: usize, pos: Pos) -> CellKind {
    if !in_bounds(size, pos) {
        return CellKind::Wall;
    }
    cells[index(size, pos)]
}

pub(super) fn is_open(cells: &[CellKind], size: usize, pos: Pos) -> bool {
    cell_at(cells, size, pos).is_open()
}

/// Fixed exploration order: up, down, left, right. The order only affects
/// tie-breaking in route search, never correctness.
pub(super) fn neighbors4(pos: Pos) -> [Pos; 4] {
    [
        Pos { y: pos.y - 1, x: pos.x },
        Pos { y: pos.y + 1, x: pos.x },
        Pos { y: pos.y, x: pos.x - 1 },
        Pos { y: pos.y, x: pos.x + 1 },
    ]
}

pub(super) fn open_neighbor_count(cells: &[CellKind], size: usize, pos: Pos) -> usize {
    neighbors4(pos).iter().filter(|&&next| is_open(cells, size, next)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_reads_as_wall() {
        let cells = vec![CellKind::Path; 25];
        assert_eq!(cell_at(&cells, 5, Pos { y: -1, x: 0 }), CellKind::Wall);
        assert_eq!(cell_at(&cells, 5, Pos { y: 0, x: 5 }), CellKind::Wall);
        assert_eq!(cell_at(&cells, 5, Pos { y: 2, x: 2 }), CellKind::Path);
    }

    #[test]
    fn open_neighbor_count_sees_four_connectivity_only() {
        let mut cells = vec![CellKind::Wall; 25];
        cells[index(5, Pos { y: 1, x: 2 })] = CellKind::Path; // above center
        cells[index(5, Pos { y: 3, x: 2 })] = CellKind::Path; // below center
        cells[index(5, Pos { y: 1, x: 1 })] = CellKind::Path; // diagonal, must not count
        assert_eq!(open_neighbor_count(&cells, 5, Pos { y: 2, x: 2 }), 2);
    }
}
