//! seekbar CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use seekbar::cli::{Cli, Commands, ConfigCommand};
use seekbar::logging::{init_logging, LogTarget};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match &cli.command {
        Commands::Demo(args) => {
            // The demo owns the terminal: log to a file or not at all
            let target = match args.log_file.as_deref() {
                Some(path) => LogTarget::File(path),
                None => LogTarget::Off,
            };
            init_logging(cli.verbose, target);
            let config = commands::config::load(config_path)?;
            commands::demo::handle(args, &config)
        }
        Commands::Range(args) => {
            init_logging(cli.verbose, LogTarget::Stderr);
            commands::range::handle(args.start, args.end, args.duration, args.json)
        }
        Commands::Config(command) => {
            init_logging(cli.verbose, LogTarget::Stderr);
            match command {
                ConfigCommand::Show => commands::config::handle_show(config_path),
                ConfigCommand::Path => commands::config::handle_path(config_path),
                ConfigCommand::Init { force } => {
                    commands::config::handle_init(config_path, *force)
                }
            }
        }
    }
}
