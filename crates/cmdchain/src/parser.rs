//! Argument parsing for a resolved command.
//!
//! One left-to-right pass over the lexemes that follow the command chain.
//! Options take the next value; flags record `true`; bare values fill the
//! next required option that may be given positionally, in declaration order.
//! Only the target command's own arguments are considered.

use crate::{
    ArgMap, ArgValue, Argument, ArgumentKind, Command, Lexeme, LexemeKind, ParseError, Validators,
};

/// Parse `lexemes` (everything after the command chain) against `command`.
pub fn parse_args(
    lexemes: &[Lexeme],
    command: &Command,
    validators: &Validators,
) -> Result<ArgMap, ParseError> {
    let mut state = ArgState::new(command, validators);
    for lexeme in lexemes {
        match lexeme.kind {
            LexemeKind::Option | LexemeKind::Flag => state.named(lexeme)?,
            // Command names past the chain are ordinary values here.
            LexemeKind::MaybeValue | LexemeKind::Command => state.value(&lexeme.content)?,
        }
    }
    state.finish()
}

struct ArgState<'a> {
    command: &'a Command,
    validators: &'a Validators,
    /// Required arguments not yet filled, declaration order.
    required_remaining: Vec<&'a Argument>,
    /// Option waiting for its value.
    pending: Option<&'a Argument>,
    /// Bare values seen so far.
    positional: usize,
    args: ArgMap,
}

impl<'a> ArgState<'a> {
    fn new(command: &'a Command, validators: &'a Validators) -> Self {
        Self {
            command,
            validators,
            required_remaining: command.arguments().iter().filter(|a| a.required).collect(),
            pending: None,
            positional: 0,
            args: ArgMap::new(),
        }
    }

    /// An option or flag token. The lexer's kind comes from the index shared
    /// by every command, so the command's own declaration decides; the kind
    /// only picks the error for an undeclared token.
    fn named(&mut self, lexeme: &Lexeme) -> Result<(), ParseError> {
        self.expect_no_pending()?;
        let token = lexeme.content.as_str();
        let Some(argument) = self.command.argument_by_token(token) else {
            return Err(match lexeme.kind {
                LexemeKind::Flag => ParseError::UnknownFlag(token.to_string()),
                _ => ParseError::UnknownOption(token.to_string()),
            });
        };
        match argument.kind {
            ArgumentKind::Option => self.pending = Some(argument),
            ArgumentKind::Flag => {
                self.args.insert(&argument.name, ArgValue::Switch(true));
                self.filled(argument);
            }
        }
        Ok(())
    }

    fn value(&mut self, value: &str) -> Result<(), ParseError> {
        if let Some(option) = self.pending.take() {
            return self.assign(option, value);
        }
        if looks_like_option(value) {
            return Err(ParseError::UnknownOption(value.to_string()));
        }

        self.positional += 1;
        let target = self
            .required_remaining
            .iter()
            .copied()
            .find(|a| a.accepts_positional());
        match target {
            Some(argument) => self.assign(argument, value),
            None if self.command.arguments().is_empty() => {
                Err(ParseError::ExtraArgument(self.command.name().to_string()))
            }
            None => Err(ParseError::TooManyArguments {
                command: self.command.name().to_string(),
                expected: self.positional_capacity(),
                received: self.positional,
            }),
        }
    }

    fn assign(&mut self, argument: &'a Argument, value: &str) -> Result<(), ParseError> {
        if !self.validators.validate(&argument.value_type, value)? {
            return Err(ParseError::InvalidValue {
                value: value.to_string(),
                argument: argument.name.clone(),
                value_type: argument.value_type.to_string(),
                examples: self
                    .validators
                    .examples(&argument.value_type)?
                    .map(<[String]>::to_vec),
            });
        }
        self.args.insert(&argument.name, ArgValue::Text(value.to_string()));
        self.filled(argument);
        Ok(())
    }

    fn filled(&mut self, argument: &Argument) {
        self.required_remaining.retain(|a| a.name != argument.name);
    }

    fn expect_no_pending(&self) -> Result<(), ParseError> {
        match self.pending {
            Some(option) => Err(ParseError::MissingValue(option.name.clone())),
            None => Ok(()),
        }
    }

    /// How many bare values the command could take in total.
    fn positional_capacity(&self) -> usize {
        self.command
            .arguments()
            .iter()
            .filter(|a| a.accepts_positional())
            .count()
    }

    fn finish(self) -> Result<ArgMap, ParseError> {
        self.expect_no_pending()?;
        if !self.required_remaining.is_empty() {
            let expected = self.command.arguments().iter().filter(|a| a.required).count();
            return Err(ParseError::MissingRequiredArgs {
                command: self.command.name().to_string(),
                missing: self.required_remaining.iter().map(|a| a.name.clone()).collect(),
                expected,
                received: expected - self.required_remaining.len(),
            });
        }
        Ok(self.args)
    }
}

/// `--name` shaped tokens that nothing declared. Single-dash tokens such as
/// negative numbers stay values.
fn looks_like_option(token: &str) -> bool {
    token.len() > 2 && token.starts_with("--")
}
