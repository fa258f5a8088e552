use std::io::IsTerminal;

use colored::Colorize;
use tracing_subscriber::EnvFilter;

use schemagen::cli::CommandLineInterface;

fn main() {
    let command_line_interface = CommandLineInterface::load();

    // Logs go to stderr so schemas on stdout stay pipeable.
    let default_filter = match command_line_interface.verbosity() {
        0 => "schemagen=warn",
        1 => "schemagen=info",
        2 => "schemagen=debug",
        _ => "schemagen=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(error) = command_line_interface.run() {
        colored::control::set_override(std::io::stderr().is_terminal());
        eprintln!("{} {error:#}", "Error:".red().bold());
        std::process::exit(1);
    }
}
