//! FlowMind Control - CLI client for the FlowMindAI employee portal
//!
//! Resolves chat messages into proactive action suggestions and lets
//! the user dispatch them from the terminal.

use anyhow::Result;
use clap::{Parser, Subcommand};
use flowmind_common::{resolve, PortalConfig};
use flowmindctl::{display, logging, repl};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "flowmindctl")]
#[command(about = "FlowMindAI - proactive action client for the employee portal", long_about = None)]
#[command(version)]
struct Cli {
    /// Verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Explicit config file path
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a message into ranked action suggestions
    Suggest {
        /// The chat message to analyze
        message: Vec<String>,

        /// Show the full ranked list instead of the configured top-N
        #[arg(long)]
        all: bool,

        /// Machine-readable JSON output
        #[arg(long)]
        json: bool,
    },

    /// Interactive chat with proactive suggestions
    Chat,

    /// Print the static intent rule table
    Rules,

    /// Show the effective configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match &cli.config {
        Some(path) => PortalConfig::load_from(path)?,
        None => PortalConfig::load()?,
    };

    match cli.command {
        Commands::Suggest { message, all, json } => {
            let message = message.join(" ");
            let actions = resolve(&message);

            if json {
                println!("{}", serde_json::to_string_pretty(&actions)?);
            } else if actions.is_empty() {
                println!("No suggested actions.");
            } else {
                let limit = if all { actions.len() } else { config.max_suggestions };
                print!("{}", display::render_suggestions(&actions, limit));
            }
            Ok(())
        }
        Commands::Chat => repl::run(&config),
        Commands::Rules => {
            print!("{}", display::render_rules());
            Ok(())
        }
        Commands::Config => {
            match cli.config.or_else(PortalConfig::default_path) {
                Some(path) if path.exists() => println!("# {}", path.display()),
                Some(path) => println!("# defaults ({} not found)", path.display()),
                None => println!("# defaults (no config directory)"),
            }
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}
