//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use taskscribe::config::GlobalConfig;
use taskscribe::output::{self, OutputMode};

/// taskscribe - Turn meeting transcripts into a task board
#[derive(Parser, Debug)]
#[command(
    name = "taskscribe",
    version,
    about = "Turn meeting transcripts into a task board",
    long_about = "Extract actionable tasks from meeting transcripts.\n\n\
                  Sentences like \"Aman you take the landing page by 10pm tomorrow\" become\n\
                  tasks with an assignee, a description, a deadline and a priority."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract tasks from a transcript
    Parse {
        /// Transcript file ("-" or omitted reads stdin)
        file: Option<PathBuf>,

        /// Transcript text given inline instead of a file
        #[arg(short, long, conflicts_with = "file")]
        text: Option<String>,

        /// Show which pattern matched each task
        #[arg(long)]
        explain: bool,
    },

    /// Start an interactive task board session (commands read from stdin)
    Board {
        /// Transcript file to load onto the board first (not "-": stdin carries commands)
        file: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key: board.id_prefix, output.json, output.color
        key: String,

        /// New value
        value: String,
    },

    /// Print the config file path
    Path,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let config = GlobalConfig::load();
    if !config.output.color {
        output::set_color(false);
    }

    let output_mode = if cli.json || config.output.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Parse {
            file,
            text,
            explain,
        }) => commands::parse(file.as_deref(), text.as_deref(), explain, output_mode),
        Some(Command::Board { file }) => commands::board(file.as_deref(), &config, output_mode),
        Some(Command::Config { action }) => commands::config_cmd(action, config, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("taskscribe v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("taskscribe v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'taskscribe --help' for usage");
                println!("Run 'taskscribe parse meeting.txt' to get started");
            }
            Ok(())
        },
    }
}
