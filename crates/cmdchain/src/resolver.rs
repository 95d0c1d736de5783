//! Command-chain resolution.
//!
//! The command lexemes of an invocation are walked from the roots: the first
//! must name a root, each later one must name a child of the previous match.
//! The walk is greedy and stops at the first lexeme that is not a child; it
//! never backtracks.

use crate::{Command, Lexeme, LexemeKind, ParseError, Registry};

/// The commands matched for one invocation.
#[derive(Debug, Clone)]
pub struct Chain<'r> {
    commands: Vec<&'r Command>,
}

impl<'r> Chain<'r> {
    /// Matched commands, outermost first.
    pub fn commands(&self) -> &[&'r Command] {
        &self.commands
    }

    /// The command to execute.
    pub fn target(&self) -> &'r Command {
        // A chain is only constructed with at least its root.
        self.commands[self.commands.len() - 1]
    }

    pub fn names(&self) -> Vec<&'r str> {
        self.commands.iter().map(|c| c.name()).collect()
    }

    /// Space-separated command path, e.g. "email send".
    pub fn path(&self) -> String {
        self.names().join(" ")
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Resolve the command chain named by `lexemes`.
pub fn resolve_chain<'r>(lexemes: &[Lexeme], registry: &'r Registry) -> Result<Chain<'r>, ParseError> {
    let mut candidates = lexemes
        .iter()
        .filter(|l| l.kind == LexemeKind::Command)
        .map(|l| l.content.as_str());

    let first = candidates.next().ok_or(ParseError::NoCommandFound)?;
    let root = registry
        .root(first)
        .ok_or_else(|| ParseError::UnknownMainCommand(first.to_string()))?;

    let mut commands = vec![root];
    let mut tail = root;
    for name in candidates {
        match tail.subcommand(name) {
            Some(child) => {
                commands.push(child);
                tail = child;
            }
            None => break,
        }
    }

    Ok(Chain { commands })
}

/// Check that the chain's names are the leading tokens of the input.
pub fn check_commands_first(chain: &Chain<'_>, lexemes: &[Lexeme]) -> Result<(), ParseError> {
    let leading = lexemes.iter().take(chain.len()).map(|l| l.content.as_str());
    if chain.names().into_iter().eq(leading) {
        Ok(())
    } else {
        Err(ParseError::CommandNotOnStart)
    }
}
