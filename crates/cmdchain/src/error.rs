//! Error types for building command trees and parsing input.

use thiserror::Error;

/// Errors raised while declaring commands or registering them with a [`Cli`](crate::Cli).
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("command name is required")]
    MissingName,
    #[error("no handler for command <{0}>")]
    MissingHandler(String),
    #[error("argument <{0}> is optional and must require its option name")]
    OptionalPositional(String),
    #[error("argument <{0}> is declared twice")]
    DuplicateArgument(String),
    #[error("command \"{0}\" already exists")]
    DuplicateCommand(String),
    #[error("middleware with pattern \"{0}\" already exists")]
    DuplicateMiddleware(String),
    #[error("invalid middleware pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Errors raised while lexing, resolving or parsing one invocation.
///
/// Every variant describes the first offending token or condition; parsing
/// stops there.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid source")]
    InvalidSource,
    #[error("no commands found")]
    NoCommandFound,
    #[error("unknown main command <{0}>, use \"help\" to see available commands")]
    UnknownMainCommand(String),
    #[error("commands must come before arguments")]
    CommandNotOnStart,
    #[error("no command at path \"{0}\"")]
    UnknownCommandPath(String),
    #[error("option <{0}> requires a value")]
    MissingValue(String),
    #[error("unknown option {0}")]
    UnknownOption(String),
    #[error("unknown flag {0}")]
    UnknownFlag(String),
    #[error(
        "invalid value \"{value}\" for <{argument}>, expected {value_type}{}",
        format_examples(.examples)
    )]
    InvalidValue {
        value: String,
        argument: String,
        value_type: String,
        examples: Option<Vec<String>>,
    },
    #[error("no validator found for type {0}")]
    NoValidator(String),
    #[error("too many arguments for command <{command}>, expected {expected}, received {received}")]
    TooManyArguments {
        command: String,
        expected: usize,
        received: usize,
    },
    #[error("command \"{0}\" does not accept arguments")]
    ExtraArgument(String),
    #[error(
        "expected {expected} arguments for command <{command}>, received {received}, missing <{}>",
        .missing.join(",")
    )]
    MissingRequiredArgs {
        command: String,
        missing: Vec<String>,
        expected: usize,
        received: usize,
    },
}

fn format_examples(examples: &Option<Vec<String>>) -> String {
    match examples {
        Some(list) if !list.is_empty() => format!(" (examples: {})", list.join(", ")),
        _ => String::new(),
    }
}

/// Either kind of error, for callers that build and run in one place.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_lists_examples() {
        let err = ParseError::InvalidValue {
            value: "nope".to_string(),
            argument: "to".to_string(),
            value_type: "email".to_string(),
            examples: Some(vec!["user@example.com".to_string()]),
        };
        assert_eq!(
            err.to_string(),
            "invalid value \"nope\" for <to>, expected email (examples: user@example.com)"
        );
    }

    #[test]
    fn test_invalid_value_without_examples() {
        let err = ParseError::InvalidValue {
            value: "x".to_string(),
            argument: "count".to_string(),
            value_type: "number".to_string(),
            examples: None,
        };
        assert_eq!(
            err.to_string(),
            "invalid value \"x\" for <count>, expected number"
        );
    }

    #[test]
    fn test_both_kinds_convert() {
        fn run() -> Result<()> {
            let mut cli = crate::Cli::new();
            cli.add_command(crate::CommandBuilder::new().name("ping").handler(|_| {}).build()?)?;
            cli.parse("pong")?;
            Ok(())
        }
        assert!(matches!(run(), Err(Error::Parse(ParseError::NoCommandFound))));
    }

    #[test]
    fn test_missing_required_names_arguments() {
        let err = ParseError::MissingRequiredArgs {
            command: "send".to_string(),
            missing: vec!["to".to_string(), "msg".to_string()],
            expected: 2,
            received: 0,
        };
        assert!(err.to_string().contains("<to,msg>"));
    }
}
