//! Headless replay of a move sequence on a bounded grid.
//!
//! The board is what a host does with the moves a program produced: walk the
//! robot from its start square, clamping at the edges, until it lands on the
//! goal or runs out of moves.

use seek_eval::Position;
use seek_ir::Direction;

/// Rectangular grid with the origin in the lower-left corner.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    pub width: u32,
    pub height: u32,
}

impl Default for Board {
    fn default() -> Self {
        Board {
            width: Self::DEFAULT_SIZE,
            height: Self::DEFAULT_SIZE,
        }
    }
}

/// Where a replay ended and why.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ReplayOutcome {
    pub final_position: Position,
    pub moves_applied: usize,
    pub won: bool,
}

impl Board {
    pub const DEFAULT_SIZE: u32 = 3;
    pub const DEFAULT_MAX_MOVES: usize = 10;

    pub const fn new(width: u32, height: u32) -> Self {
        Board { width, height }
    }

    /// One step from `from`, clamped to the board.
    pub fn step(&self, from: Position, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        let max_x = i64::from(self.width.max(1)) - 1;
        let max_y = i64::from(self.height.max(1)) - 1;
        Position::new(
            from.x.saturating_add(dx).clamp(0, max_x),
            from.y.saturating_add(dy).clamp(0, max_y),
        )
    }

    /// Apply `moves` from `start` until the goal is reached or `max_moves`
    /// moves have been applied.
    ///
    /// A start already on the goal counts as won with no moves applied.
    pub fn replay(
        &self,
        moves: &[Direction],
        start: Position,
        goal: Position,
        max_moves: usize,
    ) -> ReplayOutcome {
        let mut pos = start;
        let mut applied = 0;
        let mut won = pos == goal;

        for &direction in moves {
            if won || applied == max_moves {
                break;
            }
            pos = self.step(pos, direction);
            applied += 1;
            won = pos == goal;
        }

        tracing::debug!(final_position = %pos, moves_applied = applied, won, "replay finished");
        ReplayOutcome {
            final_position: pos,
            moves_applied: applied,
            won,
        }
    }
}
