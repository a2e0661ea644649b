//! Difficulty policy mapping tiers to grid size and extra-opening density.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::MazeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

/// Smallest dimension with a carvable interior around the border ring.
pub const MIN_MAZE_SIZE: usize = 5;

/// Full regenerations attempted before a single-route maze is accepted as-is.
pub const MAX_GENERATION_ATTEMPTS: u32 = 10;

pub fn tier_size(tier: Difficulty) -> usize {
    match tier {
        Difficulty::Easy => 15,
        Difficulty::Medium => 21,
        Difficulty::Hard => 31,
        Difficulty::Expert => 41,
    }
}

/// Number of extra wall openings the augmentation pass aims for.
pub(super) fn extra_opening_target(size: usize, tier: Difficulty) -> usize {
    size * size / extra_opening_divisor(tier)
}

fn extra_opening_divisor(tier: Difficulty) -> usize {
    match tier {
        Difficulty::Easy => 3,
        Difficulty::Medium => 4,
        Difficulty::Hard => 6,
        Difficulty::Expert => 8,
    }
}

impl FromStr for Difficulty {
    type Err = MazeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "expert" => Ok(Difficulty::Expert),
            _ => Err(MazeError::UnknownTier(name.to_string())),
        }
    }
}
