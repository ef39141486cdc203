//! # Group Definitions
//!
//! Option groups described in TOML, so a screen can be assembled from a file
//! instead of code.
//!
//! ```toml
//! title = "Which symptoms do you have?"
//!
//! [[options]]
//! kind = "plain"
//! title = "None"
//!
//! [[options]]
//! kind = "multiple_choice"
//! title = "Some"
//! choices = [{ title = "Fever", icon = "thermometer" }, { title = "Cough" }]
//!
//! [initial_selection]
//! kind = "multi"
//! option = 1
//! chosen = [0]
//! ```

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::core::error::GroupError;
use crate::core::model::OptionGroupModel;
use crate::core::option::GroupOption;
use crate::core::selection::Selection;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GroupDefinition {
    pub title: Option<String>,
    #[serde(default)]
    pub options: Vec<GroupOption>,
    #[serde(default)]
    pub initial_selection: Selection,
}

#[derive(Debug)]
pub enum DefinitionError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(GroupError),
}

impl fmt::Display for DefinitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefinitionError::Io(e) => write!(f, "definition I/O error: {e}"),
            DefinitionError::Parse(e) => write!(f, "definition parse error: {e}"),
            DefinitionError::Invalid(e) => write!(f, "invalid definition: {e}"),
        }
    }
}

impl std::error::Error for DefinitionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DefinitionError::Io(e) => Some(e),
            DefinitionError::Parse(e) => Some(e),
            DefinitionError::Invalid(e) => Some(e),
        }
    }
}

impl GroupDefinition {
    /// Parses and validates a definition.
    pub fn from_toml_str(contents: &str) -> Result<Self, DefinitionError> {
        let definition: GroupDefinition = toml::from_str(contents).map_err(DefinitionError::Parse)?;
        definition.validate().map_err(DefinitionError::Invalid)?;
        debug!("Definition: {:?}", definition);
        Ok(definition)
    }

    pub fn load(path: &Path) -> Result<Self, DefinitionError> {
        let contents = fs::read_to_string(path).map_err(DefinitionError::Io)?;
        let definition = Self::from_toml_str(&contents)?;
        info!(
            "Loaded option group from {} ({} options)",
            path.display(),
            definition.options.len()
        );
        Ok(definition)
    }

    /// Checks the option list is non-empty and the initial selection fits it.
    pub fn validate(&self) -> Result<(), GroupError> {
        if self.options.is_empty() {
            return Err(GroupError::EmptyGroup);
        }
        OptionGroupModel::try_new(self.options.clone(), self.initial_selection.clone()).map(|_| ())
    }

    pub fn into_model(self) -> Result<OptionGroupModel, GroupError> {
        if self.options.is_empty() {
            return Err(GroupError::EmptyGroup);
        }
        OptionGroupModel::try_new(self.options, self.initial_selection)
    }
}
