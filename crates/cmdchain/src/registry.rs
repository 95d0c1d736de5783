//! Registered root commands and the index the lexer classifies tokens with.

use crate::{ArgumentKind, BuildError, Command};
use std::collections::HashSet;

/// Every command name, option token and flag token found anywhere in the
/// registered trees.
#[derive(Debug, Clone, Default)]
pub struct KnownLexemes {
    pub commands: HashSet<String>,
    pub options: HashSet<String>,
    pub flags: HashSet<String>,
}

impl KnownLexemes {
    /// Fold a whole command tree into the index.
    pub fn collect(&mut self, root: &Command) {
        for command in root.walk() {
            self.commands.insert(command.name().to_string());
            for argument in command.arguments() {
                match argument.kind {
                    ArgumentKind::Option => self.options.insert(argument.token.clone()),
                    ArgumentKind::Flag => self.flags.insert(argument.token.clone()),
                };
            }
        }
    }

    pub fn is_command(&self, token: &str) -> bool {
        self.commands.contains(token)
    }

    pub fn is_option(&self, token: &str) -> bool {
        self.options.contains(token)
    }

    pub fn is_flag(&self, token: &str) -> bool {
        self.flags.contains(token)
    }
}

/// Root commands plus their derived [`KnownLexemes`].
///
/// Commands cannot be changed after registration, so the index never needs
/// invalidating.
#[derive(Debug, Default)]
pub struct Registry {
    roots: Vec<Command>,
    known: KnownLexemes,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a root command. Root names must be unique.
    pub fn register(&mut self, command: Command) -> Result<(), BuildError> {
        if self.root(command.name()).is_some() {
            return Err(BuildError::DuplicateCommand(command.name().to_string()));
        }
        self.known.collect(&command);
        tracing::debug!(
            command = command.name(),
            subcommands = command.walk().len() - 1,
            "registered command"
        );
        self.roots.push(command);
        Ok(())
    }

    pub fn roots(&self) -> &[Command] {
        &self.roots
    }

    pub fn root(&self, name: &str) -> Option<&Command> {
        self.roots.iter().find(|c| c.name() == name)
    }

    pub fn known(&self) -> &KnownLexemes {
        &self.known
    }

    /// Follow a path of names from the roots.
    pub fn find_path(&self, path: &[&str]) -> Option<&Command> {
        let (first, rest) = path.split_first()?;
        rest.iter()
            .try_fold(self.root(first)?, |command, name| command.subcommand(name))
    }
}
