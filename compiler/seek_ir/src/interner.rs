//! String interner for identifiers.
//!
//! One interner lives for one compilation (one program submission). The
//! position names the evaluator binds are pre-interned so their [`Name`]s are
//! compile-time constants.

use super::Name;
use rustc_hash::FxHashMap;

/// Maps identifier text to compact [`Name`]s and back.
#[derive(Clone, Debug)]
pub struct StringInterner {
    map: FxHashMap<Box<str>, Name>,
    strings: Vec<Box<str>>,
}

impl StringInterner {
    /// Names interned by every new interner, in `Name` constant order.
    const PRE_INTERNED: [&'static str; 5] = ["", "player_x", "player_y", "goal_x", "goal_y"];

    /// Create a new interner with the position names pre-interned.
    pub fn new() -> Self {
        let mut interner = StringInterner {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(32),
        };
        for s in Self::PRE_INTERNED {
            interner.intern(s);
        }
        interner
    }

    /// Intern a string, returning its `Name`.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` distinct strings are interned.
    pub fn intern(&mut self, s: &str) -> Name {
        if let Some(&name) = self.map.get(s) {
            return name;
        }
        let index = u32::try_from(self.strings.len())
            .unwrap_or_else(|_| panic!("interner exceeded u32::MAX strings"));
        let name = Name::from_index(index);
        self.strings.push(s.into());
        self.map.insert(s.into(), name);
        name
    }

    /// Look up an already-interned string without inserting it.
    pub fn get(&self, s: &str) -> Option<Name> {
        self.map.get(s).copied()
    }

    /// Look up the string for a `Name`.
    ///
    /// Returns `""` for names that did not come from this interner.
    pub fn lookup(&self, name: Name) -> &str {
        self.strings.get(name.index()).map_or("", |s| &**s)
    }

    /// Number of interned strings, including the pre-interned ones.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
