//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{DEFAULT_HOST, DEFAULT_PORT};

/// assetpipe - minimal script and style bundler
///
/// Bundles `vendor/scripts`, `app/scripts` and `app/styles` into `public/`, or
/// serves freshly built bundles on every request.
#[derive(Parser, Debug)]
#[command(
    name = "assetpipe",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Minimal script and style bundler with a development server",
    long_about = "assetpipe concatenates vendor scripts, a tiny module loader and app modules \
                  into one script, and style sheets into one style sheet. Without a command it \
                  starts the development server.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  assetpipe build\n    \
                  assetpipe watch --port 8080\n    \
                  assetpipe -C ./site build"
)]
pub struct Cli {
    /// Project root (defaults to current directory)
    #[arg(long, short = 'C', global = true)]
    pub root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write index.html, index.js and index.css into public/
    Build,

    /// Serve freshly built bundles on every request (default)
    Watch(WatchArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the watch command
#[derive(Args, Debug, Clone)]
pub struct WatchArgs {
    /// Port to listen on
    #[arg(long, short = 'p', default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,
}

impl Default for WatchArgs {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.to_string(),
        }
    }
}

/// Arguments for the completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_command_defaults_to_none() {
        let cli = Cli::try_parse_from(["assetpipe"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.root.is_none());
    }

    #[test]
    fn test_build_with_root() {
        let cli = Cli::try_parse_from(["assetpipe", "-C", "site", "build"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Build)));
        assert_eq!(cli.root, Some(PathBuf::from("site")));
    }

    #[test]
    fn test_watch_defaults() {
        let cli = Cli::try_parse_from(["assetpipe", "watch"]).unwrap();
        match cli.command {
            Some(Commands::Watch(args)) => {
                assert_eq!(args.port, DEFAULT_PORT);
                assert_eq!(args.host, DEFAULT_HOST);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_watch_port() {
        let cli = Cli::try_parse_from(["assetpipe", "watch", "--port", "8080"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Watch(WatchArgs { port: 8080, .. }))));
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(Cli::try_parse_from(["assetpipe", "deploy"]).is_err());
    }
}
