//! # Errors
//!
//! Recoverable errors for the checked paths into the model. The transition
//! entry points themselves never return errors: a bad index there is a caller
//! bug and panics. These variants are what an adapter gets back when it asks
//! up front whether a tap or an initial selection fits the option list.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupError {
    /// The option index does not address any option.
    OptionOutOfRange { index: usize, len: usize },
    /// The choice index does not address any choice of the option.
    ChoiceOutOfRange {
        option: usize,
        choice: usize,
        len: usize,
    },
    /// A plain selection or tap pointed at a multiple-choice option.
    NotPlain { index: usize },
    /// A multi selection or choice tap pointed at a plain option.
    NotMultipleChoice { index: usize },
    /// A group without any options.
    EmptyGroup,
}

impl fmt::Display for GroupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupError::OptionOutOfRange { index, len } => {
                write!(f, "option index {index} out of range (group has {len} options)")
            }
            GroupError::ChoiceOutOfRange { option, choice, len } => write!(
                f,
                "choice index {choice} out of range for option {option} ({len} choices)"
            ),
            GroupError::NotPlain { index } => {
                write!(f, "option {index} is a multiple-choice option, not a plain one")
            }
            GroupError::NotMultipleChoice { index } => {
                write!(f, "option {index} is a plain option, not a multiple-choice one")
            }
            GroupError::EmptyGroup => write!(f, "option group has no options"),
        }
    }
}

impl std::error::Error for GroupError {}
