//! String rendering settings for todo lists.
//!
//! The defaults produce the standard checklist form:
//!
//! ```text
//! ---- Today's Todos ----
//! [X] Buy milk
//! [ ] Clean room
//! ```
//!
//! Settings can be loaded from TOML, with every key optional:
//!
//! ```toml
//! header_rule = "===="
//! done_mark = "x"
//! undone_mark = " "
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const DEFAULT_HEADER_RULE: &str = "----";
const DEFAULT_DONE_MARK: &str = "X";
const DEFAULT_UNDONE_MARK: &str = " ";

/// Controls how lists and todos are turned into text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Decoration placed on both sides of the list title.
    pub header_rule: String,

    /// Text inside the brackets of a done todo.
    pub done_mark: String,

    /// Text inside the brackets of a todo that is not done.
    pub undone_mark: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            header_rule: DEFAULT_HEADER_RULE.to_string(),
            done_mark: DEFAULT_DONE_MARK.to_string(),
            undone_mark: DEFAULT_UNDONE_MARK.to_string(),
        }
    }
}

impl RenderConfig {
    /// Parses a config from TOML. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(Error::config)
    }

    /// Serializes the config to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(Error::config)
    }

    /// Formats the header line for a list title.
    pub fn header(&self, title: &str) -> String {
        format!("{rule} {title} {rule}", rule = self.header_rule)
    }
}
