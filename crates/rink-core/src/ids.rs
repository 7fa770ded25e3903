//! Strongly typed, zero-cost identifier wrappers.
//!
//! Agents and choices are both plain indices into dense arrays.  The inner
//! integer is `pub` so tests and fixtures can write `AgentId(3)` directly, but
//! callers should prefer `.index()` when addressing a `Vec`.

use std::fmt;

/// Generate a typed index wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of an agent in the population.  Processing order within a sweep
    /// is ascending `AgentId`.
    pub struct AgentId(u32);
}

typed_id! {
    /// Index of one of the `C` equally spaced movement directions.
    pub struct ChoiceId(u16);
}

impl AgentId {
    /// Iterator over `count` ids in ascending order, capped at `u32::MAX`
    /// ids.
    pub fn range(count: usize) -> impl Iterator<Item = AgentId> {
        (0..u32::try_from(count).unwrap_or(u32::MAX)).map(AgentId)
    }
}

impl ChoiceId {
    /// Iterator over `count` ids in ascending order, capped at `u16::MAX`
    /// ids.
    pub fn range(count: usize) -> impl Iterator<Item = ChoiceId> {
        (0..u16::try_from(count).unwrap_or(u16::MAX)).map(ChoiceId)
    }
}
