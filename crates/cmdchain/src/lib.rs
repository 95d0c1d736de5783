//! Declarative command trees for small CLI tools.
//!
//! # Architecture
//!
//! Input goes through three stages, each a plain function over an immutable
//! [`Registry`]:
//!
//! 1. [`lex`] splits the source and classifies every token as a command,
//!    option, flag or possible value by looking it up in [`KnownLexemes`].
//! 2. [`resolve_chain`] walks the command tree along the command tokens and
//!    picks the deepest matching subcommand.
//! 3. [`parse_args`] fills the target command's declared arguments, checking
//!    every value with the [`Validators`] registry.
//!
//! [`Cli`] owns the registry, validators and middleware and runs the stages in
//! order, then calls the handler.
//!
//! # Example
//!
//! ```ignore
//! use cmdchain::{Argument, Cli, CommandBuilder, ValueType};
//!
//! let send = CommandBuilder::new()
//!     .name("send")
//!     .argument(Argument::option("to").value_type(ValueType::Email))?
//!     .argument(Argument::option("msg"))?
//!     .argument(Argument::flag("noResponse"))?
//!     .handler(|args| println!("Sent {:?} to {:?}", args.get_str("msg"), args.get_str("to")))
//!     .build()?;
//! let email = CommandBuilder::new()
//!     .name("email")
//!     .subcommand(send)
//!     .handler(|_| {})
//!     .build()?;
//!
//! let mut cli = Cli::new();
//! cli.add_command(email)?;
//! cli.execute("email send a@mail.ru \"Hello there\" --noResponse")?;
//! ```

mod argument;
mod cli;
mod command;
mod config;
mod error;
pub mod help;
mod lexer;
pub mod middleware;
mod parser;
mod registry;
mod resolver;
mod validator;
mod value;

pub use argument::{Argument, ArgumentKind};
pub use cli::{Cli, Dispatch, Invocation, normalize};
pub use command::{Command, CommandBuilder, Handler};
pub use config::CliConfig;
pub use error::{BuildError, Error, ParseError, Result};
pub use lexer::{Lexeme, LexemeKind, Source, classify, lex, split_line};
pub use middleware::{Middleware, MiddlewareStack};
pub use parser::parse_args;
pub use registry::{KnownLexemes, Registry};
pub use resolver::{Chain, check_commands_first, resolve_chain};
pub use validator::{ValueType, Validators};
pub use value::{ArgMap, ArgValue};
