use crate::config::ColorChoice;

/// Creates the root clap Command with global `--verbose` and `--color` flags
/// and one subcommand per reporting level.
pub fn create_root_command() -> clap::Command {
    clap::Command::new("rapport")
        .about("Print colored, leveled console messages")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(clap::ArgAction::SetTrue)
                .help("Enable debug diagnostics on stderr"),
        )
        .arg(
            clap::Arg::new("color")
                .long("color")
                .global(true)
                .value_name("WHEN")
                .value_parser(clap::value_parser!(ColorChoice))
                .help("When to color output (overrides RAPPORT_COLOR, NO_COLOR, CLICOLOR_FORCE)"),
        )
        .subcommand(level_command("success", "Print a message in green"))
        .subcommand(level_command("info", "Print a message in blue"))
        .subcommand(level_command("warning", "Print a message in yellow"))
        .subcommand(level_command("error", "Print a message in red"))
        .subcommand(
            level_command("fail", "Print a message in red and exit with a status code").arg(
                clap::Arg::new("code")
                    .short('c')
                    .long("code")
                    .value_name("CODE")
                    .default_value("1")
                    .allow_negative_numbers(true)
                    .value_parser(clap::value_parser!(i32))
                    .help("Process exit code"),
            ),
        )
}

fn level_command(name: &'static str, about: &'static str) -> clap::Command {
    clap::Command::new(name).about(about).arg(
        clap::Arg::new("message")
            .num_args(0..)
            .value_name("MESSAGE")
            .help("Values to print, joined by single spaces"),
    )
}

/// Returns whether verbose diagnostics were requested.
pub fn is_verbose(matches: &clap::ArgMatches) -> bool {
    matches.get_flag("verbose")
}

/// Returns the `--color` choice, if one was given.
pub fn color_choice(matches: &clap::ArgMatches) -> Option<ColorChoice> {
    matches.get_one::<ColorChoice>("color").copied()
}

/// Collects the positional message values of a level subcommand.
pub fn message_args(matches: &clap::ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("message")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}
