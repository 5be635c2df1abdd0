//! Interned identifier.

use std::fmt;

/// Interned identifier, an index into a [`StringInterner`](crate::StringInterner).
///
/// Names are only meaningful together with the interner that produced them.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Pre-interned empty string.
    pub const EMPTY: Name = Name(0);

    /// Pre-interned `player_x`.
    pub const PLAYER_X: Name = Name(1);

    /// Pre-interned `player_y`.
    pub const PLAYER_Y: Name = Name(2);

    /// Pre-interned `goal_x`.
    pub const GOAL_X: Name = Name(3);

    /// Pre-interned `goal_y`.
    pub const GOAL_Y: Name = Name(4);

    #[inline]
    pub(crate) const fn from_index(index: u32) -> Self {
        Name(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}
