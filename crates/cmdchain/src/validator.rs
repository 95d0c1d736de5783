//! Value validation keyed by value type.
//!
//! Every argument carries a [`ValueType`]. The parser asks a [`Validators`]
//! registry whether a raw token is acceptable for that type, and which
//! example values to show when it is not.
//!
//! # Extensibility
//!
//! ```ignore
//! use cmdchain::{ValueType, Validators};
//!
//! let mut validators = Validators::with_defaults();
//! validators.register_with_examples(
//!     "branch",
//!     |value| !value.contains(' '),
//!     ["main", "feature/login"],
//! );
//! let branch = ValueType::custom("branch");
//! ```

use crate::ParseError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The kind of value an option accepts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Any text.
    #[default]
    Data,
    Number,
    Email,
    Uuid,
    Ip,
    Url,
    Phone,
    /// `HH:MM`, 24 hour clock.
    Time,
    Filename,
    /// A type registered by the caller under this tag.
    Custom(String),
}

impl ValueType {
    pub fn custom(tag: impl Into<String>) -> Self {
        Self::Custom(tag.into())
    }

    /// Tag the type is registered under.
    pub fn tag(&self) -> &str {
        match self {
            Self::Data => "data",
            Self::Number => "number",
            Self::Email => "email",
            Self::Uuid => "uuid",
            Self::Ip => "ip",
            Self::Url => "url",
            Self::Phone => "phone",
            Self::Time => "time",
            Self::Filename => "filename",
            Self::Custom(tag) => tag,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

type Predicate = Box<dyn Fn(&str) -> bool + Send + Sync>;

struct Entry {
    predicate: Predicate,
    examples: Option<Vec<String>>,
}

/// Registry of value predicates.
pub struct Validators {
    entries: HashMap<String, Entry>,
}

impl Default for Validators {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl fmt::Debug for Validators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<_> = self.entries.keys().collect();
        tags.sort();
        f.debug_struct("Validators").field("tags", &tags).finish()
    }
}

impl Validators {
    /// Create an empty registry (no built-in types).
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create a registry with every built-in [`ValueType`] except `Custom`.
    pub fn with_defaults() -> Self {
        let mut validators = Self::new();
        validators.register("data", |_| true);
        validators.register_with_examples("number", is_number, ["42", "-3.5", "1e3"]);
        validators.register_pattern(
            "email",
            r"^[^\s@]+@[^\s@]+\.[^\s@]+$",
            &["user@example.com", "a@mail.ru"],
        );
        validators.register_pattern(
            "uuid",
            r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$",
            &["123e4567-e89b-12d3-a456-426614174000"],
        );
        validators.register_pattern(
            "ip",
            r"^(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$",
            &["127.0.0.1", "192.168.0.10"],
        );
        validators.register_pattern(
            "url",
            r#"^(ftp|http|https)://[^ "]+$"#,
            &["https://example.com", "ftp://files.example.com/pub"],
        );
        validators.register_pattern(
            "phone",
            r"^(\+?\d{1,2}[-.\s]?)?(\(?\d{3}\)?[-.\s]?|\d{3}[-.\s]?)\d{3}[-.\s]?\d{4}$",
            &["+1 555-123-4567", "(555) 123-4567"],
        );
        validators.register_pattern("time", r"^([01]\d|2[0-3]):([0-5]\d)$", &["09:30", "23:59"]);
        validators.register_pattern(
            "filename",
            r"^[a-zA-Z0-9\-_\\/]+\.[a-zA-Z0-9]+$",
            &["notes.txt", "src/main.rs"],
        );
        validators
    }

    /// Register (or replace) a predicate for a tag.
    pub fn register<F>(&mut self, tag: impl Into<String>, predicate: F)
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.entries.insert(
            tag.into(),
            Entry {
                predicate: Box::new(predicate),
                examples: None,
            },
        );
    }

    /// Register (or replace) a predicate together with example values shown
    /// in error messages.
    pub fn register_with_examples<F, I, S>(&mut self, tag: impl Into<String>, predicate: F, examples: I)
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.insert(
            tag.into(),
            Entry {
                predicate: Box::new(predicate),
                examples: Some(examples.into_iter().map(Into::into).collect()),
            },
        );
    }

    fn register_pattern(&mut self, tag: &str, pattern: &'static str, examples: &[&str]) {
        let re = Regex::new(pattern).expect("built-in validator pattern is valid");
        self.register_with_examples(tag, move |value| re.is_match(value), examples.iter().copied());
    }

    /// Check a raw value against the type's predicate.
    pub fn validate(&self, value_type: &ValueType, value: &str) -> Result<bool, ParseError> {
        let entry = self.entry(value_type)?;
        Ok((entry.predicate)(value))
    }

    /// Example values registered for the type, if any.
    pub fn examples(&self, value_type: &ValueType) -> Result<Option<&[String]>, ParseError> {
        let entry = self.entry(value_type)?;
        Ok(entry.examples.as_deref())
    }

    fn entry(&self, value_type: &ValueType) -> Result<&Entry, ParseError> {
        self.entries
            .get(value_type.tag())
            .ok_or_else(|| ParseError::NoValidator(value_type.tag().to_string()))
    }
}

/// Numeric text, surrounding whitespace ignored. Blank counts as zero.
fn is_number(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return true;
    }
    trimmed.parse::<f64>().map(|n| !n.is_nan()).unwrap_or(false)
}
