//! `GetDesign` argument validation
//!
//! The library tool takes a fixed positional layout followed by exactly one
//! value for each of six flags. Validation finishes before anything touches the
//! engine.

use crate::config::secret_string;
use crate::domain::{Command, FileType, ValidationError};
use std::collections::HashMap;
use std::io::{self, Write};
use std::path::PathBuf;

/// The one recognized command keyword
pub const COMMAND_NAME: &str = "GetDesign";

/// Required flags, in the order they are checked
pub const REQUIRED_FLAGS: [&str; 6] = ["-d", "-u", "-p", "-x", "-f", "-s"];

/// Validate raw arguments (program name excluded) into a [`Command`]
///
/// # Errors
///
/// Returns the first [`ValidationError`] found, checking in this order:
/// argument count, command keyword, server name, flag token count, unknown
/// flags, missing or blank flags, file type.
pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Command, ValidationError> {
    if args.len() < 2 {
        return Err(ValidationError::Usage);
    }

    let command = args[0].as_ref();
    let server_name = args[1].as_ref();

    if !command.eq_ignore_ascii_case(COMMAND_NAME) {
        return Err(ValidationError::UnknownCommand(command.to_string()));
    }
    if server_name.trim().is_empty() {
        return Err(ValidationError::MissingArgument("ServerName"));
    }

    let flag_args = &args[2..];
    let expected = REQUIRED_FLAGS.len() * 2;
    if flag_args.len() != expected {
        return Err(ValidationError::FlagCount {
            expected,
            actual: flag_args.len(),
        });
    }

    // A repeated flag keeps its last value.
    let mut values: HashMap<&'static str, &str> = HashMap::new();
    for pair in flag_args.chunks_exact(2) {
        let flag = pair[0].as_ref();
        let canonical = REQUIRED_FLAGS
            .iter()
            .copied()
            .find(|known| known.eq_ignore_ascii_case(flag))
            .ok_or_else(|| ValidationError::UnknownFlag(flag.to_string()))?;
        values.insert(canonical, pair[1].as_ref());
    }

    let mut resolved = [""; REQUIRED_FLAGS.len()];
    for (slot, flag) in resolved.iter_mut().zip(REQUIRED_FLAGS) {
        *slot = values
            .get(flag)
            .copied()
            .filter(|value| !value.trim().is_empty())
            .ok_or(ValidationError::MissingFlag(flag))?;
    }
    let [database, user, password, export_path, file_type, design_pattern] = resolved;

    let file_type: FileType = file_type.to_lowercase().parse()?;

    Ok(Command::new(
        server_name.to_string(),
        database.to_string(),
        user.to_string(),
        secret_string(password.to_string()),
        PathBuf::from(export_path),
        file_type,
        design_pattern.to_uppercase(),
    ))
}

/// Usage text shown after every validation failure
pub fn usage() -> String {
    [
        "Usage:",
        "  librarian-util <Command> <ServerName> -d <DatabaseName> -u <UserName> -p <Password> -x <ExportPath> -f <FileType> -s <Design>",
        "",
        "Commands:",
        "  GetDesign       Export designs matching a pattern from a library server",
        "",
        "Arguments:",
        "  ServerName      Name of the library server",
        "",
        "Flags (all required, any order):",
        "  -d    Database name",
        "  -u    User name",
        "  -p    Password",
        "  -x    Export path",
        "  -f    File type (pxf, pcf, png)",
        "  -s    Design id fragment to search for",
    ]
    .join("\n")
}

/// Validate `args` and report the outcome on `out`
///
/// On failure the error and the usage text are written and `None` is returned.
/// On success the resolved parameters are echoed.
pub fn dispatch<S, W>(args: &[S], out: &mut W) -> io::Result<Option<Command>>
where
    S: AsRef<str>,
    W: Write,
{
    match parse(args) {
        Ok(command) => {
            let token = args[0].as_ref();
            for line in command.echo_lines(token) {
                writeln!(out, "{line}")?;
            }
            Ok(Some(command))
        }
        Err(e) => {
            tracing::debug!(error = %e, "Rejected command line");
            writeln!(out, "{e}")?;
            writeln!(out)?;
            writeln!(out, "{}", usage())?;
            Ok(None)
        }
    }
}
