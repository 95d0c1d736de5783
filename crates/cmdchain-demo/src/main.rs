//! Example CLI: `mailer email send a@mail.ru "Hello"`, `mailer commit generate --short`.
//!
//! Set `RUST_LOG=cmdchain=debug` to see resolution and dispatch events.

use anyhow::Result;
use cmdchain::{Argument, Cli, CliConfig, Command, CommandBuilder, Dispatch, ValueType};

fn email() -> Result<Command> {
    let send = CommandBuilder::new()
        .name("send")
        .description("Send a message")
        .argument(
            Argument::option("to")
                .value_type(ValueType::Email)
                .description("Recipient email"),
        )?
        .argument(Argument::option("msg").description("Message to send"))?
        .argument(Argument::flag("noResponse").description("Do not wait for a reply"))?
        .handler(|args| {
            let to = args.get_str("to").unwrap_or_default();
            let msg = args.get_str("msg").unwrap_or_default();
            if args.is_set("noResponse") {
                println!("Sent {msg:?} to {to} (no reply expected)");
            } else {
                println!("Sent {msg:?} to {to}");
            }
        })
        .build()?;

    let list = CommandBuilder::new()
        .name("list")
        .description("List received emails")
        .argument(
            Argument::option("from")
                .value_type(ValueType::Email)
                .named_only()
                .optional()
                .description("Only show mail from this sender"),
        )?
        .handler(|args| match args.get_str("from") {
            Some(from) => println!("Listing emails from {from}"),
            None => println!("Listing all emails"),
        })
        .build()?;

    Ok(CommandBuilder::new()
        .name("email")
        .description("Email commands")
        .subcommand(send)
        .subcommand(list)
        .handler(|_| println!("Use `mailer help email` to list email commands"))
        .build()?)
}

fn commit() -> Result<Command> {
    let generate = CommandBuilder::new()
        .name("generate")
        .description("Draft a commit message")
        .argument(
            Argument::option("maxTokens")
                .value_type(ValueType::Number)
                .named_only()
                .optional()
                .description("Upper bound for the message length"),
        )?
        .argument(Argument::flag("short").description("Keep it to one line"))?
        .handler(|args| {
            let limit = if args.is_set("short") {
                "20"
            } else {
                args.get_str("maxTokens").unwrap_or("50")
            };
            println!("Would draft a commit message of at most {limit} tokens");
        })
        .build()?;

    Ok(CommandBuilder::new()
        .name("commit")
        .description("Commit helpers")
        .subcommand(generate)
        .handler(|_| println!("Use `mailer help commit` to list commit commands"))
        .build()?)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut cli = Cli::new().with_config(CliConfig::default().program("mailer"));
    cli.add_command(email()?)?.add_command(commit()?)?;
    cli.middleware(r"^help\b", |_| false)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        print!("{}", cli.overview());
        return Ok(());
    }

    match cli.execute(args.clone()) {
        Ok(Dispatch::Handled(path)) => tracing::debug!(command = %path, "done"),
        Ok(Dispatch::Intercepted(_)) => {
            let path: Vec<&str> = args.iter().skip(1).map(String::as_str).collect();
            print!("{}", cli.help(&path)?);
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    }
    Ok(())
}
