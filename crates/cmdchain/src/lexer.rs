//! Tokenizing and classifying raw input.
//!
//! Classification is set membership only: a token that equals a known command
//! name is a command, else a known option token is an option, else a known
//! flag token is a flag, everything else may be a value. Position plays no
//! part, so a message whose text is literally `--msg` lexes as an option.

use crate::{KnownLexemes, ParseError};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// What a token was classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LexemeKind {
    Command,
    Option,
    Flag,
    MaybeValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lexeme {
    pub kind: LexemeKind,
    pub content: String,
}

impl Lexeme {
    pub fn new(kind: LexemeKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }
}

/// Raw input: a command line still to be split, or tokens split already
/// (e.g. `std::env::args()`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Line(String),
    Tokens(Vec<String>),
}

impl Source {
    /// Split into tokens. Lines honor `"..."` and `'...'` spans.
    pub fn tokens(&self) -> Result<Vec<String>, ParseError> {
        let tokens = match self {
            Self::Line(line) => split_line(line),
            Self::Tokens(tokens) => tokens.clone(),
        };
        if tokens.is_empty() {
            return Err(ParseError::InvalidSource);
        }
        Ok(tokens)
    }
}

impl From<&str> for Source {
    fn from(line: &str) -> Self {
        Self::Line(line.to_string())
    }
}

impl From<String> for Source {
    fn from(line: String) -> Self {
        Self::Line(line)
    }
}

impl From<Vec<String>> for Source {
    fn from(tokens: Vec<String>) -> Self {
        Self::Tokens(tokens)
    }
}

impl From<Vec<&str>> for Source {
    fn from(tokens: Vec<&str>) -> Self {
        Self::Tokens(tokens.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Source {
    fn from(tokens: &[&str]) -> Self {
        Self::Tokens(tokens.iter().map(|t| t.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Source {
    fn from(tokens: [&str; N]) -> Self {
        Self::Tokens(tokens.iter().map(|t| t.to_string()).collect())
    }
}

fn quote_aware() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"[^\s"']+|"([^"]*)"|'([^']*)'"#).expect("quote-aware split pattern is valid")
    })
}

/// Split on whitespace, keeping quoted spans together and dropping their quotes.
pub fn split_line(line: &str) -> Vec<String> {
    quote_aware()
        .captures_iter(line)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(0)))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Classify one token.
pub fn classify(token: &str, known: &KnownLexemes) -> LexemeKind {
    if known.is_command(token) {
        LexemeKind::Command
    } else if known.is_option(token) {
        LexemeKind::Option
    } else if known.is_flag(token) {
        LexemeKind::Flag
    } else {
        LexemeKind::MaybeValue
    }
}

/// Split and classify a source.
pub fn lex(source: &Source, known: &KnownLexemes) -> Result<Vec<Lexeme>, ParseError> {
    let lexemes: Vec<_> = source
        .tokens()?
        .into_iter()
        .map(|token| Lexeme::new(classify(&token, known), token))
        .collect();
    tracing::trace!(?lexemes, "lexed source");
    Ok(lexemes)
}
