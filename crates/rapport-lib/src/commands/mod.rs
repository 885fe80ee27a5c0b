use std::fmt::Display;
use std::io::Write;

use crate::cli::message_args;
use crate::errors::{Exit, RapportError, Result};
use crate::output::color::ColorTag;
use crate::output::Reporter;

/// Maps a level subcommand name to its color tag.
pub fn level_tag(name: &str) -> Option<ColorTag> {
    match name {
        "success" => Some(ColorTag::Success),
        "info" => Some(ColorTag::Info),
        "warning" => Some(ColorTag::Warning),
        "error" => Some(ColorTag::Error),
        _ => None,
    }
}

/// Runs a parsed subcommand against `reporter`.
///
/// Returns `Ok(Some(exit))` when the command asks the process to terminate;
/// the caller decides when to act on it.
pub fn dispatch_command<W: Write>(
    name: &str,
    matches: &clap::ArgMatches,
    reporter: &mut Reporter<W>,
) -> Result<Option<Exit>> {
    let words = message_args(matches);
    let args: Vec<&dyn Display> = words.iter().map(|w| w as &dyn Display).collect();

    if let Some(tag) = level_tag(name) {
        tracing::debug!(command = name, count = args.len(), "Reporting message");
        reporter.print_color(&args, tag)?;
        return Ok(None);
    }

    match name {
        "fail" => {
            let code = matches
                .get_one::<i32>("code")
                .copied()
                .unwrap_or(Exit::FAILURE.code());
            Ok(Some(reporter.error_and_exit(&words.join(" "), code)))
        }
        _ => Err(RapportError::Application(format!("Unknown command: {name}"))),
    }
}
