//! Cli settings.
//!
//! Nothing here reads files; callers deserialize [`CliConfig`] from whatever
//! source they already have:
//!
//! ```toml
//! program = "mailer"
//! require_commands_first = true
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Program name shown in help usage lines.
    pub program: Option<String>,
    /// Reject input where arguments appear before the command names.
    pub require_commands_first: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            program: None,
            require_commands_first: true,
        }
    }
}

impl CliConfig {
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = Some(program.into());
        self
    }

    pub fn require_commands_first(mut self, require: bool) -> Self {
        self.require_commands_first = require;
        self
    }
}
