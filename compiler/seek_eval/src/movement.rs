use seek_ir::Direction;

/// The move sequence built by a run.
///
/// Append-only: movement statements push to it, nothing in the language
/// reads it, and the evaluator hands it back when the run succeeds.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct MovementList {
    moves: Vec<Direction>,
}

impl MovementList {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, direction: Direction) {
        self.moves.push(direction);
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn into_vec(self) -> Vec<Direction> {
        self.moves
    }
}
