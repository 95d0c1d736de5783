//! Command tree nodes and their builder.

use crate::{ArgMap, Argument, BuildError};
use std::collections::HashSet;
use std::fmt;

/// Callback run with the parsed arguments of a matched command.
pub type Handler = Box<dyn Fn(&ArgMap) + Send + Sync>;

/// A node in the command tree.
///
/// Built with [`CommandBuilder`]; immutable afterwards. Children are owned, so
/// a tree can never contain a cycle.
pub struct Command {
    name: String,
    description: String,
    arguments: Vec<Argument>,
    subcommands: Vec<Command>,
    handler: Handler,
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("arguments", &self.arguments)
            .field("subcommands", &self.subcommands)
            .finish_non_exhaustive()
    }
}

impl Command {
    pub fn builder() -> CommandBuilder {
        CommandBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn subcommands(&self) -> &[Command] {
        &self.subcommands
    }

    /// Direct child with the given name.
    pub fn subcommand(&self, name: &str) -> Option<&Command> {
        self.subcommands.iter().find(|c| c.name == name)
    }

    /// Declared argument addressed by a command-line token.
    pub fn argument_by_token(&self, token: &str) -> Option<&Argument> {
        self.arguments.iter().find(|a| a.token == token)
    }

    /// Run the handler.
    pub fn call(&self, args: &ArgMap) {
        (self.handler)(args)
    }

    /// Every command in this subtree, this one first.
    ///
    /// Preorder, children in declaration order. Uses an explicit stack so deep
    /// trees do not recurse.
    pub fn walk(&self) -> Vec<&Command> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(command) = stack.pop() {
            out.push(command);
            stack.extend(command.subcommands.iter().rev());
        }
        out
    }
}

/// Fluent builder for [`Command`].
///
/// ```ignore
/// let send = CommandBuilder::new()
///     .name("send")
///     .argument(Argument::option("to").value_type(ValueType::Email))?
///     .handler(|args| println!("{args}"))
///     .build()?;
/// ```
#[derive(Default)]
pub struct CommandBuilder {
    name: String,
    description: String,
    arguments: Vec<Argument>,
    subcommands: Vec<Command>,
    handler: Option<Handler>,
}

impl CommandBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add an argument.
    ///
    /// Fails if an optional option could be given positionally, since there
    /// would be no way to tell it apart from required values, or if the name
    /// or token is already taken on this command.
    pub fn argument(mut self, argument: Argument) -> Result<Self, BuildError> {
        if argument.is_option() && !argument.required && !argument.option_name_required {
            return Err(BuildError::OptionalPositional(argument.name));
        }
        if self
            .arguments
            .iter()
            .any(|a| a.name == argument.name || a.token == argument.token)
        {
            return Err(BuildError::DuplicateArgument(argument.name));
        }
        self.arguments.push(argument);
        Ok(self)
    }

    pub fn subcommand(mut self, subcommand: Command) -> Self {
        self.subcommands.push(subcommand);
        self
    }

    pub fn handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&ArgMap) + Send + Sync + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }

    pub fn build(self) -> Result<Command, BuildError> {
        if self.name.is_empty() {
            return Err(BuildError::MissingName);
        }
        let Some(handler) = self.handler else {
            return Err(BuildError::MissingHandler(self.name));
        };

        let mut seen = HashSet::new();
        for sub in &self.subcommands {
            if !seen.insert(sub.name.as_str()) {
                return Err(BuildError::DuplicateCommand(sub.name.clone()));
            }
        }

        Ok(Command {
            name: self.name,
            description: self.description,
            arguments: self.arguments,
            subcommands: self.subcommands,
            handler,
        })
    }
}
