//! # Actions
//!
//! Every user interaction with a group becomes a `Tap`.
//! Tapping a plain row? That's `Tap::Plain { index }`.
//! Tapping a sub-choice? That's `Tap::Choice { option, choice }`.
//!
//! The `update()` function takes the model and a tap and applies the
//! matching transition. No side effects beyond the model itself.
//!
//! ```text
//! Model + Tap  →  update()  →  New Selection
//! ```
//!
//! Use `try_update()` when the tap comes from somewhere that could be out of
//! sync with the option list; it validates before touching state.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::error::GroupError;
use crate::core::model::OptionGroupModel;
use crate::core::selection::Selection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tap", rename_all = "snake_case")]
pub enum Tap {
    Plain { index: usize },
    Choice { option: usize, choice: usize },
}

/// Applies `tap`, panicking on an index that does not fit the model.
pub fn update(model: &mut OptionGroupModel, tap: Tap) -> &Selection {
    debug!("Applying {:?}", tap);
    match tap {
        Tap::Plain { index } => model.select_plain_option(index),
        Tap::Choice { option, choice } => model.toggle_choice(option, choice),
    }
    model.current_selection()
}

/// Checks `tap` against the model without applying it.
pub fn validate(model: &OptionGroupModel, tap: Tap) -> Result<(), GroupError> {
    match tap {
        Tap::Plain { index } => model.check_plain_option(index),
        Tap::Choice { option, choice } => model.check_choice(option, choice),
    }
}

/// Applies `tap` if it fits the model; otherwise leaves the model untouched.
pub fn try_update(model: &mut OptionGroupModel, tap: Tap) -> Result<&Selection, GroupError> {
    validate(model, tap)?;
    Ok(update(model, tap))
}
