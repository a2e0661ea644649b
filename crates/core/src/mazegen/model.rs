//! Public data model for generated mazes.

use serde::{Deserialize, Serialize};

use crate::types::{CellKind, Pos};

use super::tiers::Difficulty;

/// A finalized maze produced by the acceptance loop. Immutable once built;
/// agent position and step tracking live in the session, not here.
///
/// `route_count` and `attempts` record what the acceptance loop actually
/// achieved: after ten failed regenerations the final maze is kept as-is,
/// so a caller that requires strict multi-route structure must check
/// [`GeneratedMaze::has_multiple_routes`] rather than assume it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedMaze {
    pub size: usize,
    pub cells: Vec<CellKind>,
    pub start: Pos,
    pub end: Pos,
    pub tier: Difficulty,
    pub route_count: usize,
    pub attempts: u32,
}

impl GeneratedMaze {
    pub fn cell_at(&self, pos: Pos) -> CellKind {
        if pos.x < 0 || pos.y < 0 {
            return CellKind::Wall;
        }
        let x = pos.x as usize;
        let y = pos.y as usize;
        if x >= self.size || y >= self.size {
            return CellKind::Wall;
        }
        self.cells[y * self.size + x]
    }

    pub fn is_open(&self, pos: Pos) -> bool {
        self.cell_at(pos).is_open()
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.size && (pos.y as usize) < self.size
    }

    /// Whether the acceptance loop met its soft multi-route guarantee.
    pub fn has_multiple_routes(&self) -> bool {
        self.route_count > 1
    }

    pub fn open_cell_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_open()).count()
    }

    /// Stable byte encoding for determinism checks and fingerprinting.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.size as u32).to_le_bytes());
        for cell in &self.cells {
            bytes.push(match cell {
                CellKind::Wall => 0,
                CellKind::Path => 1,
                CellKind::Start => 2,
                CellKind::End => 3,
            });
        }
        bytes.extend(self.start.y.to_le_bytes());
        bytes.extend(self.start.x.to_le_bytes());
        bytes.extend(self.end.y.to_le_bytes());
        bytes.extend(self.end.x.to_le_bytes());
        bytes.push(self.tier as u8);
        bytes.extend((self.route_count as u32).to_le_bytes());
        bytes.extend(self.attempts.to_le_bytes());
        bytes
    }
}
