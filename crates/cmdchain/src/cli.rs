//! The entry point tying lexer, resolver and parser together.

use crate::help::{render_help, render_overview};
use crate::resolver::{Chain, check_commands_first, resolve_chain};
use crate::{
    ArgMap, BuildError, CliConfig, Command, Lexeme, Middleware, MiddlewareStack, ParseError,
    Registry, Source, Validators, lex, parse_args,
};
use std::borrow::Cow;

/// Result of a successful parse: the matched chain and its arguments.
#[derive(Debug)]
pub struct Invocation<'c> {
    pub chain: Chain<'c>,
    pub args: ArgMap,
}

impl<'c> Invocation<'c> {
    pub fn command(&self) -> &'c Command {
        self.chain.target()
    }
}

/// What [`Cli::execute`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The handler of the command at this path ran.
    Handled(String),
    /// A middleware with this pattern returned `false`.
    Intercepted(String),
}

/// A set of root commands with the validators and middleware used to run them.
///
/// ```ignore
/// let mut cli = Cli::new();
/// cli.add_command(email)?;
/// cli.execute("email send a@mail.ru \"Hello there\"")?;
/// ```
#[derive(Debug, Default)]
pub struct Cli {
    registry: Registry,
    validators: Validators,
    middleware: MiddlewareStack,
    config: CliConfig,
}

impl Cli {
    /// A Cli with the built-in validators and default config.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_validators(mut self, validators: Validators) -> Self {
        self.validators = validators;
        self
    }

    pub fn with_config(mut self, config: CliConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &CliConfig {
        &self.config
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn validators(&self) -> &Validators {
        &self.validators
    }

    pub fn validators_mut(&mut self) -> &mut Validators {
        &mut self.validators
    }

    /// Register a root command. Fails if a root with the same name exists.
    pub fn add_command(&mut self, command: Command) -> Result<&mut Self, BuildError> {
        self.registry.register(command)?;
        Ok(self)
    }

    /// Register a middleware; see [`crate::middleware`].
    pub fn middleware<F>(&mut self, pattern: &str, handler: F) -> Result<&mut Self, BuildError>
    where
        F: Fn(&[Lexeme]) -> bool + Send + Sync + 'static,
    {
        self.middleware.push(Middleware::new(pattern, handler)?)?;
        Ok(self)
    }

    /// Split and classify input against the registered commands.
    pub fn lex(&self, source: impl Into<Source>) -> Result<Vec<Lexeme>, ParseError> {
        lex(&source.into(), self.registry.known())
    }

    /// Resolve the command and parse its arguments without running anything.
    pub fn parse(&self, source: impl Into<Source>) -> Result<Invocation<'_>, ParseError> {
        let lexemes = self.lex(source)?;
        self.parse_lexemes(&lexemes)
    }

    fn parse_lexemes(&self, lexemes: &[Lexeme]) -> Result<Invocation<'_>, ParseError> {
        let chain = resolve_chain(lexemes, &self.registry)?;
        if self.config.require_commands_first {
            check_commands_first(&chain, lexemes)?;
        }
        let rest = self.argument_lexemes(&chain, lexemes);
        let args = parse_args(&rest, chain.target(), &self.validators)?;
        tracing::debug!(command = %chain.path(), args = %args, "parsed invocation");
        Ok(Invocation { chain, args })
    }

    /// Lexemes after the command chain. Without the commands-first check the
    /// chain's names are removed wherever they occur.
    fn argument_lexemes<'l>(&self, chain: &Chain<'_>, lexemes: &'l [Lexeme]) -> Cow<'l, [Lexeme]> {
        if self.config.require_commands_first {
            return Cow::Borrowed(&lexemes[chain.len()..]);
        }
        let mut names = chain.names().into_iter().peekable();
        let mut rest = Vec::with_capacity(lexemes.len());
        for lexeme in lexemes {
            if names.peek() == Some(&lexeme.content.as_str()) {
                names.next();
            } else {
                rest.push(lexeme.clone());
            }
        }
        Cow::Owned(rest)
    }

    /// Lex, run middleware, parse and call the matched command's handler.
    ///
    /// Nothing is dispatched unless every stage succeeds.
    pub fn execute(&self, source: impl Into<Source>) -> Result<Dispatch, ParseError> {
        let lexemes = self.lex(source)?;
        let normalized = normalize(&lexemes);
        if let Some(pattern) = self.middleware.run(&normalized, &lexemes) {
            tracing::debug!(pattern, source = %normalized, "middleware stopped execution");
            return Ok(Dispatch::Intercepted(pattern.to_string()));
        }

        let invocation = self.parse_lexemes(&lexemes)?;
        let path = invocation.chain.path();
        tracing::debug!(command = %path, "dispatching");
        invocation.command().call(&invocation.args);
        Ok(Dispatch::Handled(path))
    }

    /// Help for the command at `path`, or an overview of all roots when
    /// `path` is empty.
    pub fn help(&self, path: &[&str]) -> Result<String, ParseError> {
        if path.is_empty() {
            return Ok(self.overview());
        }
        let command = self
            .registry
            .find_path(path)
            .ok_or_else(|| ParseError::UnknownCommandPath(path.join(" ")))?;
        Ok(render_help(command, path, self.config.program.as_deref()))
    }

    /// Usage line plus one row per root command.
    pub fn overview(&self) -> String {
        render_overview(self.registry.roots(), self.config.program.as_deref())
    }
}

/// Tokens joined by single spaces; what middleware patterns are matched against.
pub fn normalize(lexemes: &[Lexeme]) -> String {
    lexemes
        .iter()
        .map(|l| l.content.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
