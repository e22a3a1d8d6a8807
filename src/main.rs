//! assetpipe - minimal asset bundler
//!
//! Concatenates vendor scripts, a small module loader and wrapped app modules
//! into one script, and style sheets into one style sheet. Runs either as a
//! one-shot build into `public/` or as a development server that rebuilds on
//! every request.

use clap::Parser;

mod bundle;
mod cli;
mod commands;
mod config;
mod encoder;
mod error;
mod logging;
mod module_id;
mod output;
mod runtime;
mod server;
mod stream;
mod styles;
mod walker;

use cli::{Cli, Commands, WatchArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Watch(WatchArgs::default()));

    let result = match command {
        Commands::Build => commands::build::run(cli.root),
        Commands::Watch(args) => commands::watch::run(cli.root, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(&args),
    };

    if let Err(e) = result {
        tracing::error!("{e}");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
