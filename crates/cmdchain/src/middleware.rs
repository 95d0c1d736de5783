//! Pre-dispatch hooks.
//!
//! A middleware pairs a regex, tested against the normalized source (tokens
//! joined by single spaces), with a handler that sees the lexemes. A handler
//! returning `false` stops the invocation before arguments are parsed.

use crate::{BuildError, Lexeme};
use regex::Regex;
use std::fmt;

pub type MiddlewareHandler = Box<dyn Fn(&[Lexeme]) -> bool + Send + Sync>;

pub struct Middleware {
    pattern: Regex,
    handler: MiddlewareHandler,
}

impl fmt::Debug for Middleware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Middleware")
            .field("pattern", &self.pattern.as_str())
            .finish_non_exhaustive()
    }
}

impl Middleware {
    pub fn new<F>(pattern: &str, handler: F) -> Result<Self, BuildError>
    where
        F: Fn(&[Lexeme]) -> bool + Send + Sync + 'static,
    {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            handler: Box::new(handler),
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn matches(&self, normalized: &str) -> bool {
        self.pattern.is_match(normalized)
    }

    pub fn call(&self, lexemes: &[Lexeme]) -> bool {
        (self.handler)(lexemes)
    }
}

/// Ordered middleware list.
#[derive(Debug, Default)]
pub struct MiddlewareStack {
    entries: Vec<Middleware>,
}

impl MiddlewareStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a middleware. Patterns must be unique.
    pub fn push(&mut self, middleware: Middleware) -> Result<(), BuildError> {
        if self.entries.iter().any(|m| m.pattern() == middleware.pattern()) {
            return Err(BuildError::DuplicateMiddleware(middleware.pattern().to_string()));
        }
        self.entries.push(middleware);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Run every middleware whose pattern matches, in registration order.
    ///
    /// Returns the pattern of the first handler that returned `false`.
    pub fn run(&self, normalized: &str, lexemes: &[Lexeme]) -> Option<&str> {
        self.entries
            .iter()
            .filter(|m| m.matches(normalized))
            .find(|m| !m.call(lexemes))
            .map(Middleware::pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LexemeKind;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_duplicate_pattern() {
        let mut stack = MiddlewareStack::new();
        stack.push(Middleware::new(r"\bhelp\b", |_| true).unwrap()).unwrap();
        let err = stack
            .push(Middleware::new(r"\bhelp\b", |_| false).unwrap())
            .unwrap_err();
        assert!(matches!(err, BuildError::DuplicateMiddleware(p) if p == r"\bhelp\b"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = Middleware::new("(", |_| true).unwrap_err();
        assert!(matches!(err, BuildError::InvalidPattern(_)));
    }

    #[test]
    fn test_stops_at_first_rejection() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut stack = MiddlewareStack::new();
        let counter = calls.clone();
        stack
            .push(
                Middleware::new("send", move |_| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    false
                })
                .unwrap(),
            )
            .unwrap();
        let counter = calls.clone();
        stack
            .push(
                Middleware::new(".*", move |_| {
                    counter.fetch_add(1, Ordering::SeqCst);
                    true
                })
                .unwrap(),
            )
            .unwrap();

        let lexemes = [Lexeme::new(LexemeKind::Command, "list")];
        assert_eq!(stack.run("email list", &lexemes), None);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        assert_eq!(stack.run("email send", &lexemes), Some("send"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
