mod check_docs;
mod completions;
mod render;

use std::path::PathBuf;

use check_docs::CheckDocsCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use log::LevelFilter;
use render::RenderCommand;

use crate::config::{Config, ConfigError};

/// Extension trait for exiting on config errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for std::result::Result<T, Box<ConfigError>> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "wright")]
#[command(version)]
#[command(about = "Render Swift source from declarative syntax trees")]
pub(crate) struct Cli {
    /// Path to swiftwright.toml (defaults to ./swiftwright.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        self.init_logging();
        let config = Config::load(self.config.as_deref()).unwrap_or_exit();

        match &self.command {
            Commands::Render(cmd) => cmd.run(&config),
            Commands::CheckDocs(cmd) => cmd.run(&config),
            Commands::Completions(cmd) => cmd.run(),
        }
    }

    fn init_logging(&self) {
        let level = match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .init();
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON syntax tree to Swift
    Render(RenderCommand),

    /// Syntax-check Swift samples in documentation
    CheckDocs(CheckDocsCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
