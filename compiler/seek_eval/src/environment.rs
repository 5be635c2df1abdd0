//! Variable bindings for one evaluation run.
//!
//! A single flat scope: seek_lang has no functions, and `if`/`for` bodies
//! assign into the same table. Variables come into existence on their first
//! assignment.

use rustc_hash::FxHashMap;

use seek_ir::Name;

use crate::Position;

/// Whether a variable binding can be reassigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutability {
    /// Created by user assignment.
    Mutable,
    /// Seeded by the evaluator (`player_x`, `goal_y`, ...).
    Immutable,
}

impl Mutability {
    #[inline]
    pub fn is_mutable(self) -> bool {
        matches!(self, Mutability::Mutable)
    }
}

/// Error returned by `Environment::assign`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignError {
    /// Variable exists but is read-only.
    Immutable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Binding {
    value: i64,
    mutability: Mutability,
}

/// Identifier-to-integer mapping, created fresh per run.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: FxHashMap<Name, Binding>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// An environment with read-only `player_x`, `player_y`, `goal_x`, `goal_y`.
    pub fn with_positions(player: Position, goal: Position) -> Self {
        let mut env = Environment::new();
        env.define(Name::PLAYER_X, player.x, Mutability::Immutable);
        env.define(Name::PLAYER_Y, player.y, Mutability::Immutable);
        env.define(Name::GOAL_X, goal.x, Mutability::Immutable);
        env.define(Name::GOAL_Y, goal.y, Mutability::Immutable);
        env
    }

    /// Create or replace a binding unconditionally.
    pub fn define(&mut self, name: Name, value: i64, mutability: Mutability) {
        self.bindings.insert(name, Binding { value, mutability });
    }

    /// Look up a variable's value.
    #[inline]
    pub fn lookup(&self, name: Name) -> Option<i64> {
        self.bindings.get(&name).map(|b| b.value)
    }

    /// Assign to a variable, creating it as mutable if it does not exist.
    pub fn assign(&mut self, name: Name, value: i64) -> Result<(), AssignError> {
        match self.bindings.get_mut(&name) {
            Some(binding) if !binding.mutability.is_mutable() => Err(AssignError::Immutable),
            Some(binding) => {
                binding.value = value;
                Ok(())
            }
            None => {
                self.define(name, value, Mutability::Mutable);
                Ok(())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
