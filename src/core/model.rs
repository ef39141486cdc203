//! # Option Group Model
//!
//! Owns a fixed option list and the current [`Selection`], and implements
//! the two transitions a tap can cause.
//!
//! ```text
//!              select_plain_option(i)
//!   any state ───────────────────────────▶ Single(i)
//!
//!              toggle_choice(o, c)
//!   not Multi(o) ────────────────────────▶ Multi(o, {c})
//!   Multi(o, S)  ────────────────────────▶ Multi(o, S △ {c})   or None if empty
//! ```
//!
//! The transitions take indices on trust from the caller. An index that does
//! not fit the option list is a desync between view and model, so the model
//! panics rather than guessing. Adapters fed untrusted input should run the
//! `check_*` methods first.

use log::debug;

use crate::core::error::GroupError;
use crate::core::option::GroupOption;
use crate::core::selection::{ChosenSet, Selection};

#[derive(Debug, Clone)]
pub struct OptionGroupModel {
    options: Vec<GroupOption>,
    selection: Selection,
}

impl OptionGroupModel {
    /// Creates a model, panicking if `initial` does not fit `options`.
    pub fn new(options: Vec<GroupOption>, initial: Selection) -> Self {
        match Self::try_new(options, initial) {
            Ok(model) => model,
            Err(e) => panic!("inconsistent initial selection: {e}"),
        }
    }

    /// Creates a model, rejecting an initial selection that does not fit `options`.
    pub fn try_new(options: Vec<GroupOption>, initial: Selection) -> Result<Self, GroupError> {
        validate_selection(&options, &initial)?;
        debug!(
            "Option group created with {} options, initial selection {}",
            options.len(),
            initial
        );
        Ok(Self {
            options,
            selection: initial,
        })
    }

    pub fn options(&self) -> &[GroupOption] {
        &self.options
    }

    pub fn current_selection(&self) -> &Selection {
        &self.selection
    }

    pub fn into_selection(self) -> Selection {
        self.selection
    }

    /// Replaces whatever is selected with the plain option at `index`.
    ///
    /// # Panics
    ///
    /// If `index` is out of range or addresses a multiple-choice option.
    pub fn select_plain_option(&mut self, index: usize) {
        if let Err(e) = self.check_plain_option(index) {
            panic!("select_plain_option: {e}");
        }
        self.selection = Selection::single(index);
        debug!("Selection is now {}", self.selection);
    }

    /// Toggles `choice` of the multiple-choice option at `option`.
    ///
    /// Starts a fresh one-element selection unless that option is already
    /// the active multi selection. Removing the last chosen entry clears the
    /// selection.
    ///
    /// # Panics
    ///
    /// If either index is out of range or `option` is a plain option.
    pub fn toggle_choice(&mut self, option: usize, choice: usize) {
        if let Err(e) = self.check_choice(option, choice) {
            panic!("toggle_choice: {e}");
        }
        self.selection = match std::mem::take(&mut self.selection) {
            Selection::Multi {
                option: active,
                chosen,
            } if active == option => match chosen.toggled(choice) {
                Some(chosen) => Selection::Multi { option, chosen },
                None => Selection::None,
            },
            _ => Selection::Multi {
                option,
                chosen: ChosenSet::single(choice),
            },
        };
        debug!("Selection is now {}", self.selection);
    }

    /// Whether `index` is the active option, plain or multi.
    pub fn is_option_selected(&self, index: usize) -> bool {
        self.selection.option() == Some(index)
    }

    pub fn is_choice_selected(&self, option: usize, choice: usize) -> bool {
        match &self.selection {
            Selection::Multi {
                option: active,
                chosen,
            } => *active == option && chosen.contains(choice),
            _ => false,
        }
    }

    /// Anything selected at all, e.g. to enable a submit action.
    pub fn has_selection(&self) -> bool {
        !self.selection.is_none()
    }

    /// Checks that `index` addresses a plain option.
    pub fn check_plain_option(&self, index: usize) -> Result<(), GroupError> {
        match self.option_at(index)? {
            GroupOption::Plain { .. } => Ok(()),
            GroupOption::MultipleChoice { .. } => Err(GroupError::NotPlain { index }),
        }
    }

    /// Checks that `option` is a multiple-choice option with a `choice` entry.
    pub fn check_choice(&self, option: usize, choice: usize) -> Result<(), GroupError> {
        check_choice_in(&self.options, option, choice)
    }

    fn option_at(&self, index: usize) -> Result<&GroupOption, GroupError> {
        option_in(&self.options, index)
    }
}

fn option_in(options: &[GroupOption], index: usize) -> Result<&GroupOption, GroupError> {
    options.get(index).ok_or(GroupError::OptionOutOfRange {
        index,
        len: options.len(),
    })
}

fn check_choice_in(options: &[GroupOption], option: usize, choice: usize) -> Result<(), GroupError> {
    match option_in(options, option)? {
        GroupOption::Plain { .. } => Err(GroupError::NotMultipleChoice { index: option }),
        GroupOption::MultipleChoice { choices, .. } if choice >= choices.len() => {
            Err(GroupError::ChoiceOutOfRange {
                option,
                choice,
                len: choices.len(),
            })
        }
        GroupOption::MultipleChoice { .. } => Ok(()),
    }
}

fn validate_selection(options: &[GroupOption], selection: &Selection) -> Result<(), GroupError> {
    match selection {
        Selection::None => Ok(()),
        Selection::Single { option } => match option_in(options, *option)? {
            GroupOption::Plain { .. } => Ok(()),
            GroupOption::MultipleChoice { .. } => Err(GroupError::NotPlain { index: *option }),
        },
        // ChosenSet is never empty, so the largest index is the only one
        // that can be out of range.
        Selection::Multi { option, chosen } => check_choice_in(options, *option, chosen.max()),
    }
}
