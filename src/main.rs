//! cfgtree: command-line front end for path-addressed JSON config documents.
//!
//! Parses arguments, dispatches to the command handler, and maps errors to
//! exit codes.

mod cli;
mod commands;

use cfgtree::exit_codes;
use cfgtree::logging;
use cfgtree::registry::ConfigRegistry;
use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    let mut registry = ConfigRegistry::new(cli.root);
    let mut stdout = std::io::stdout().lock();

    match commands::dispatch(&mut registry, cli.command, &mut stdout) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
