//! `iconkit` command-line entry point.
use anyhow::Result;
use clap::Parser;

use iconkit_cli::{cli, commands, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();

    if matches!(args.command, cli::Command::Version) {
        commands::version::run();
        return Ok(());
    }

    logging::init_subscriber(args.verbose, args.command.log_name());
    let log = logging::Logger::new(args.command.log_name());

    match &args.command {
        cli::Command::Resolve(opts) => {
            commands::resolve::run(opts, &log);
            Ok(())
        }
        cli::Command::Fonts(command) => commands::fonts::run(&args.global, command, &log),
        cli::Command::Version => Ok(()),
    }
}
