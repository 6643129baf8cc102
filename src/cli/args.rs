//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Band Roster - read-only API for musicians, bands and instruments
#[derive(Parser, Debug)]
#[command(name = "band-roster")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),
}

/// Arguments for the serve command.
///
/// Unset values fall back to the defaults in [`Config`](crate::config::Config).
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long, env = "SERVER_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "SERVER_PORT")]
    pub port: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_accepts_host_and_port() {
        let cli = Cli::try_parse_from(["band-roster", "-v", "serve", "-H", "127.0.0.1", "-p", "8080"])
            .unwrap();
        assert!(cli.verbose);
        let Commands::Serve(args) = cli.command;
        assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(args.port, Some(8080));
    }

    #[test]
    fn serve_flags_are_optional() {
        let cli = Cli::try_parse_from(["band-roster", "serve"]).unwrap();
        let Commands::Serve(args) = cli.command;
        assert!(args.host.is_none());
        assert!(args.port.is_none());
    }
}
