//! End-to-end parsing against a small mail CLI.

use cmdchain::{
    Argument, Cli, CommandBuilder, Dispatch, LexemeKind, ParseError, ValueType, Validators,
};
use serde_json::json;
use std::sync::{Arc, Mutex};

fn email_cli() -> Cli {
    let send = CommandBuilder::new()
        .name("send")
        .description("Send a message")
        .argument(
            Argument::option("to")
                .value_type(ValueType::Email)
                .description("Recipient email"),
        )
        .unwrap()
        .argument(Argument::option("msg").description("Message to send"))
        .unwrap()
        .argument(Argument::flag("noResponse").description("Do not wait for a reply"))
        .unwrap()
        .handler(|_| {})
        .build()
        .unwrap();
    let list = CommandBuilder::new()
        .name("list")
        .argument(Argument::option("from").value_type(ValueType::Email))
        .unwrap()
        .handler(|_| {})
        .build()
        .unwrap();
    let email = CommandBuilder::new()
        .name("email")
        .description("Email commands")
        .subcommand(send)
        .subcommand(list)
        .handler(|_| {})
        .build()
        .unwrap();

    let mut cli = Cli::new();
    cli.add_command(email).unwrap();
    cli
}

#[test]
fn test_options_and_flag_by_name() {
    let cli = email_cli();
    let invocation = cli
        .parse(["email", "send", "--to", "a@mail.ru", "--msg", "Hello", "--noResponse"])
        .unwrap();
    assert_eq!(invocation.chain.path(), "email send");
    assert_eq!(
        invocation.args.to_json(),
        json!({"to": "a@mail.ru", "msg": "Hello", "noResponse": true})
    );
}

#[test]
fn test_positional_fallback() {
    let cli = email_cli();
    let invocation = cli.parse(["email", "send", "a@mail.ru", "Hello"]).unwrap();
    assert_eq!(invocation.args.to_json(), json!({"to": "a@mail.ru", "msg": "Hello"}));
}

#[test]
fn test_quoted_line() {
    let cli = email_cli();
    let invocation = cli
        .parse(r#"email send a@mail.ru "Hello there" --noResponse"#)
        .unwrap();
    assert_eq!(invocation.args.get_str("msg"), Some("Hello there"));
    assert!(invocation.args.is_set("noResponse"));
}

#[test]
fn test_missing_required_names_both() {
    let cli = email_cli();
    let err = cli.parse(["email", "send"]).unwrap_err();
    assert_eq!(
        err,
        ParseError::MissingRequiredArgs {
            command: "send".to_string(),
            missing: vec!["to".to_string(), "msg".to_string()],
            expected: 2,
            received: 0,
        }
    );
}

#[test]
fn test_one_value_is_not_enough() {
    let cli = email_cli();
    let err = cli.parse(["email", "send", "a@mail.ru"]).unwrap_err();
    assert!(matches!(
        err,
        ParseError::MissingRequiredArgs { ref missing, received: 1, .. } if missing == &["msg"]
    ));
}

#[test]
fn test_invalid_value_carries_examples() {
    let cli = email_cli();
    let err = cli
        .parse(["email", "send", "--to", "not-an-email", "--msg", "Hello"])
        .unwrap_err();
    match err {
        ParseError::InvalidValue {
            value,
            argument,
            value_type,
            examples,
        } => {
            assert_eq!(value, "not-an-email");
            assert_eq!(argument, "to");
            assert_eq!(value_type, "email");
            assert!(examples.unwrap().contains(&"user@example.com".to_string()));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_invalid_value_without_registered_examples() {
    let mut validators = Validators::new();
    validators.register("email", |v| v.contains('@'));
    validators.register("data", |_| true);
    let send = CommandBuilder::new()
        .name("send")
        .argument(Argument::option("to").value_type(ValueType::Email))
        .unwrap()
        .handler(|_| {})
        .build()
        .unwrap();
    let mut cli = Cli::new().with_validators(validators);
    cli.add_command(send).unwrap();

    let err = cli.parse("send nobody").unwrap_err();
    assert!(matches!(err, ParseError::InvalidValue { examples: None, .. }));
}

#[test]
fn test_unknown_option() {
    let cli = email_cli();
    // "--from" is known to the lexer (declared on `list`), but not on `send`.
    let err = cli
        .parse(["email", "send", "--from", "a@mail.ru"])
        .unwrap_err();
    assert_eq!(err, ParseError::UnknownOption("--from".to_string()));
}

#[test]
fn test_undeclared_option() {
    let cli = email_cli();
    let lexemes = cli.lex(["email", "send", "--bogus"]).unwrap();
    assert_eq!(lexemes[2].kind, LexemeKind::MaybeValue);

    let err = cli
        .parse(["email", "send", "a@mail.ru", "Hello", "--bogus"])
        .unwrap_err();
    assert_eq!(err, ParseError::UnknownOption("--bogus".to_string()));
}

#[test]
fn test_excess_positional() {
    let cli = email_cli();
    let err = cli
        .parse(["email", "send", "a@mail.ru", "Hello", "again"])
        .unwrap_err();
    assert_eq!(
        err,
        ParseError::TooManyArguments {
            command: "send".to_string(),
            expected: 2,
            received: 3,
        }
    );
}

#[test]
fn test_no_command_found() {
    let cli = email_cli();
    assert_eq!(
        cli.parse(["send", "a@mail.ru"]).unwrap_err(),
        ParseError::UnknownMainCommand("send".to_string())
    );
    assert_eq!(
        cli.parse(["post", "a@mail.ru"]).unwrap_err(),
        ParseError::NoCommandFound
    );
}

#[test]
fn test_empty_source() {
    let cli = email_cli();
    assert_eq!(cli.parse("").unwrap_err(), ParseError::InvalidSource);
}

#[test]
fn test_arguments_before_commands() {
    let cli = email_cli();
    assert_eq!(
        cli.parse(["--to", "a@mail.ru", "email", "send"]).unwrap_err(),
        ParseError::CommandNotOnStart
    );
}

#[test]
fn test_parent_arguments_are_not_merged() {
    let cli = email_cli();
    let err = cli.parse(["email", "list", "--to", "a@mail.ru"]).unwrap_err();
    assert_eq!(err, ParseError::UnknownOption("--to".to_string()));
}

#[test]
fn test_resolution_is_repeatable() {
    let cli = email_cli();
    let tokens = ["email", "send", "a@mail.ru", "Hello"];
    let first = cli.parse(tokens).unwrap();
    let second = cli.parse(tokens).unwrap();
    assert_eq!(first.chain.names(), second.chain.names());
    assert_eq!(first.args, second.args);
}

#[test]
fn test_execute_dispatches_once() {
    let received = Arc::new(Mutex::new(Vec::new()));
    let sink = received.clone();
    let send = CommandBuilder::new()
        .name("send")
        .argument(Argument::option("to").value_type(ValueType::Email))
        .unwrap()
        .handler(move |args| {
            sink.lock()
                .unwrap()
                .push(args.get_str("to").unwrap_or_default().to_string())
        })
        .build()
        .unwrap();
    let email = CommandBuilder::new()
        .name("email")
        .subcommand(send)
        .handler(|_| {})
        .build()
        .unwrap();
    let mut cli = Cli::new();
    cli.add_command(email).unwrap();
    cli.middleware(r"\bdry-run\b", |_| false).unwrap();

    assert_eq!(
        cli.execute("email send a@mail.ru").unwrap(),
        Dispatch::Handled("email send".to_string())
    );
    assert_eq!(
        cli.execute("email send dry-run").unwrap(),
        Dispatch::Intercepted(r"\bdry-run\b".to_string())
    );
    assert!(cli.execute("email send nobody").is_err());
    assert_eq!(*received.lock().unwrap(), ["a@mail.ru"]);
}

#[test]
fn test_token_shared_across_commands() {
    let fetch = CommandBuilder::new()
        .name("fetch")
        .argument(Argument::option("all").named_only().optional())
        .unwrap()
        .handler(|_| {})
        .build()
        .unwrap();
    let list = CommandBuilder::new()
        .name("list")
        .argument(Argument::flag("all"))
        .unwrap()
        .handler(|_| {})
        .build()
        .unwrap();
    let mut cli = Cli::new();
    cli.add_command(fetch).unwrap().add_command(list).unwrap();

    // The shared index lexes "--all" as an option for both commands.
    assert_eq!(cli.lex(["list", "--all"]).unwrap()[1].kind, LexemeKind::Option);
    assert_eq!(cli.parse(["list", "--all"]).unwrap().args.to_json(), json!({"all": true}));
    assert_eq!(
        cli.parse(["fetch", "--all", "everything"]).unwrap().args.to_json(),
        json!({"all": "everything"})
    );
}
