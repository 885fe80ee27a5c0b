use rapport_lib::cli::{color_choice, create_root_command, is_verbose};
use rapport_lib::config::ConsoleConfig;
use rapport_lib::errors::{handle_fatal, RapportError};
use rapport_lib::output::{color, Reporter};
use rapport_lib::platform::{current_platform, has_blocking_toggle};

fn main() {
    // Step 1: Parse arguments (clap exits with its own usage code on error)
    let matches = create_root_command().get_matches();

    // Step 2: Initialize logger
    rapport_lib::logger::init(is_verbose(&matches));
    tracing::debug!(
        platform = %current_platform(),
        blocking_toggle = has_blocking_toggle(),
        "Starting rapport"
    );

    // Step 3: Select color support once; --color overrides the environment
    let choice = color_choice(&matches).unwrap_or(ConsoleConfig::get().color);
    color::install(choice);

    // Step 4: Dispatch to the level handler
    let Some((name, sub_matches)) = matches.subcommand() else {
        handle_fatal(RapportError::Application("No command given".into()));
    };
    tracing::debug!(command = name, "Executing command");

    let mut reporter = Reporter::stdout();
    let result = rapport_lib::commands::dispatch_command(name, sub_matches, &mut reporter);
    drop(reporter);

    match result {
        Ok(Some(exit)) => exit.terminate(),
        Ok(None) => {}
        Err(e) => handle_fatal(e),
    }
}
