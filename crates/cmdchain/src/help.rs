//! Plain-text help for commands.

use crate::{Argument, ArgumentKind, Command};

/// Render help for `command`, reached through `path` (names of its ancestors
/// and itself, outermost first). `program` prefixes the usage line.
pub fn render_help(command: &Command, path: &[&str], program: Option<&str>) -> String {
    let mut usage: Vec<&str> = program.into_iter().collect();
    usage.extend_from_slice(path);

    let mut out = format!("Usage: {}", usage.join(" "));
    for argument in command.arguments() {
        out.push(' ');
        out.push_str(&usage_fragment(argument));
    }
    if !command.subcommands().is_empty() {
        out.push_str(" <COMMAND>");
    }
    out.push('\n');

    if !command.description().is_empty() {
        out.push('\n');
        out.push_str(command.description());
        out.push('\n');
    }

    if !command.arguments().is_empty() {
        out.push_str("\nArguments:\n");
        let rows: Vec<_> = command
            .arguments()
            .iter()
            .map(|a| (argument_label(a), a.description.as_str()))
            .collect();
        write_rows(&mut out, &rows);
    }

    if !command.subcommands().is_empty() {
        out.push_str("\nCommands:\n");
        let rows: Vec<_> = command
            .subcommands()
            .iter()
            .map(|c| (c.name().to_string(), c.description()))
            .collect();
        write_rows(&mut out, &rows);
    }

    out
}

/// One line per root command.
pub fn render_overview(roots: &[Command], program: Option<&str>) -> String {
    let mut out = format!("Usage: {} <COMMAND>\n", program.unwrap_or("<program>"));
    out.push_str("\nCommands:\n");
    let rows: Vec<_> = roots
        .iter()
        .map(|c| (c.name().to_string(), c.description()))
        .collect();
    write_rows(&mut out, &rows);
    out
}

fn usage_fragment(argument: &Argument) -> String {
    let inner = match argument.kind {
        ArgumentKind::Flag => argument.token.clone(),
        ArgumentKind::Option if argument.option_name_required => {
            format!("{} <{}>", argument.token, argument.name)
        }
        ArgumentKind::Option => format!("<{}>", argument.name),
    };
    if argument.required {
        inner
    } else {
        format!("[{inner}]")
    }
}

fn argument_label(argument: &Argument) -> String {
    match argument.kind {
        ArgumentKind::Flag => argument.token.clone(),
        ArgumentKind::Option => {
            let mut label = format!("{} <{}>", argument.token, argument.value_type);
            if argument.required {
                label.push_str(" (required)");
            }
            label
        }
    }
}

fn write_rows(out: &mut String, rows: &[(String, &str)]) {
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, description) in rows {
        let line = format!("  {label:<width$}  {description}");
        out.push_str(line.trim_end());
        out.push('\n');
    }
}
