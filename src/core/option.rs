//! # Option Definitions
//!
//! The immutable building blocks of a group. A group is an ordered list of
//! [`GroupOption`]s; an option's position in that list is its index.

use serde::{Deserialize, Serialize};

/// One entry of a multiple-choice option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Opaque image reference, handed through to whatever renders the choice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub title: String,
}

impl Choice {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            icon: None,
            title: title.into(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// A selectable unit of the group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GroupOption {
    Plain { title: String },
    MultipleChoice { title: String, choices: Vec<Choice> },
}

impl GroupOption {
    pub fn plain(title: impl Into<String>) -> Self {
        GroupOption::Plain {
            title: title.into(),
        }
    }

    pub fn multiple_choice(title: impl Into<String>, choices: Vec<Choice>) -> Self {
        GroupOption::MultipleChoice {
            title: title.into(),
            choices,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            GroupOption::Plain { title } | GroupOption::MultipleChoice { title, .. } => title,
        }
    }

    /// The sub-choices, or `None` for a plain option.
    pub fn choices(&self) -> Option<&[Choice]> {
        match self {
            GroupOption::Plain { .. } => None,
            GroupOption::MultipleChoice { choices, .. } => Some(choices),
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, GroupOption::Plain { .. })
    }
}
