//! # Selection
//!
//! The single piece of mutable state in a group.
//!
//! ```text
//! Selection
//! ├── None                      nothing selected
//! ├── Single { option }         a plain option
//! └── Multi { option, chosen }  a multiple-choice option, chosen ≠ ∅
//! ```
//!
//! `ChosenSet` cannot be empty: removing its last member hands back `None`
//! instead of an empty set, so an empty multi selection is unrepresentable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Non-empty, ascending set of choice indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct ChosenSet(BTreeSet<usize>);

/// Returned when building a `ChosenSet` from no indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyChosenError;

impl fmt::Display for EmptyChosenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chosen set must contain at least one choice")
    }
}

impl std::error::Error for EmptyChosenError {}

impl ChosenSet {
    pub fn single(choice: usize) -> Self {
        Self(BTreeSet::from([choice]))
    }

    /// Flips membership of `choice`. `None` when that removed the last member.
    pub fn toggled(mut self, choice: usize) -> Option<Self> {
        if !self.0.remove(&choice) {
            self.0.insert(choice);
        }
        if self.0.is_empty() { None } else { Some(self) }
    }

    pub fn contains(&self, choice: usize) -> bool {
        self.0.contains(&choice)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ascending iteration.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    pub fn max(&self) -> usize {
        // Non-empty by construction.
        self.0.last().copied().unwrap_or_default()
    }
}

impl TryFrom<Vec<usize>> for ChosenSet {
    type Error = EmptyChosenError;

    fn try_from(indices: Vec<usize>) -> Result<Self, Self::Error> {
        let set: BTreeSet<usize> = indices.into_iter().collect();
        if set.is_empty() {
            Err(EmptyChosenError)
        } else {
            Ok(Self(set))
        }
    }
}

impl From<ChosenSet> for Vec<usize> {
    fn from(chosen: ChosenSet) -> Self {
        chosen.0.into_iter().collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Selection {
    #[default]
    None,
    Single {
        option: usize,
    },
    Multi {
        option: usize,
        chosen: ChosenSet,
    },
}

impl Selection {
    pub fn single(option: usize) -> Self {
        Selection::Single { option }
    }

    /// Builds a multi selection; collapses to `None` when `chosen` is empty.
    pub fn multi(option: usize, chosen: impl IntoIterator<Item = usize>) -> Self {
        match ChosenSet::try_from(chosen.into_iter().collect::<Vec<_>>()) {
            Ok(chosen) => Selection::Multi { option, chosen },
            Err(EmptyChosenError) => Selection::None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Selection::None)
    }

    /// Index of the active option, if any.
    pub fn option(&self) -> Option<usize> {
        match self {
            Selection::None => None,
            Selection::Single { option } | Selection::Multi { option, .. } => Some(*option),
        }
    }

    /// Chosen indices of a multi selection.
    pub fn chosen(&self) -> Option<&ChosenSet> {
        match self {
            Selection::Multi { chosen, .. } => Some(chosen),
            _ => None,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::None => write!(f, "none"),
            Selection::Single { option } => write!(f, "single({option})"),
            Selection::Multi { option, chosen } => {
                let chosen: Vec<String> = chosen.iter().map(|c| c.to_string()).collect();
                write!(f, "multi({option}, {{{}}})", chosen.join(","))
            }
        }
    }
}
