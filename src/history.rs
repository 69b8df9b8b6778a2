use serde::Serialize;

use crate::types::{Coord, Direction};

/// One applied action, with enough detail to take it back.
///
/// A pass carries no flip counts at all, so a pass that flipped something
/// cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MoveRecord {
    Pass,
    Placement {
        location: Coord,
        /// Opponent pieces flipped along each of [`Direction::ALL`].
        flips: [u8; 8],
    },
}

impl MoveRecord {
    /// Where the piece went, or [`Coord::PASS`].
    pub const fn location(&self) -> Coord {
        match self {
            MoveRecord::Pass => Coord::PASS,
            MoveRecord::Placement { location, .. } => *location,
        }
    }

    /// Per-direction flip counts; all zero for a pass.
    pub const fn flips(&self) -> [u8; 8] {
        match self {
            MoveRecord::Pass => [0; 8],
            MoveRecord::Placement { flips, .. } => *flips,
        }
    }

    pub fn flipped_toward(&self, direction: Direction) -> u8 {
        self.flips()[direction.index()]
    }

    pub fn total_flipped(&self) -> u8 {
        self.flips().iter().sum()
    }

    pub const fn is_pass(&self) -> bool {
        matches!(self, MoveRecord::Pass)
    }
}
