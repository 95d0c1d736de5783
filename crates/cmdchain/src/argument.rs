//! Argument declarations.

use crate::ValueType;
use serde::Serialize;

/// Whether an argument takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArgumentKind {
    /// `--name value`, or a bare value when positional use is allowed.
    Option,
    /// `--name`, a presence marker.
    Flag,
}

/// A declared command argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Argument {
    /// Key in the parsed argument map.
    pub name: String,
    /// Token that names the argument on the command line (e.g. "--to").
    pub token: String,
    pub description: String,
    pub kind: ArgumentKind,
    pub value_type: ValueType,
    /// Only meaningful for options: the value must follow the option token and
    /// can never be supplied positionally.
    pub option_name_required: bool,
    pub required: bool,
}

impl Argument {
    /// A required option accepting any text, addressable as `--{name}` or by position.
    pub fn option(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            token: format!("--{name}"),
            name,
            description: String::new(),
            kind: ArgumentKind::Option,
            value_type: ValueType::Data,
            option_name_required: false,
            required: true,
        }
    }

    /// An optional flag addressable as `--{name}`.
    pub fn flag(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            token: format!("--{name}"),
            name,
            description: String::new(),
            kind: ArgumentKind::Flag,
            value_type: ValueType::Data,
            option_name_required: true,
            required: false,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn value_type(mut self, value_type: ValueType) -> Self {
        self.value_type = value_type;
        self
    }

    /// Override the command-line token (defaults to `--{name}`).
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Require the option token before the value.
    pub fn named_only(mut self) -> Self {
        self.option_name_required = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn is_option(&self) -> bool {
        self.kind == ArgumentKind::Option
    }

    pub fn is_flag(&self) -> bool {
        self.kind == ArgumentKind::Flag
    }

    /// Whether a bare value may fill this argument.
    pub fn accepts_positional(&self) -> bool {
        self.is_option() && self.required && !self.option_name_required
    }
}
