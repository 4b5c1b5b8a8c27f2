use crate::types::{LogLevel, ViewName};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fids")]
#[command(about = "Airport flight-information display board for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: <config dir>/fids/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    /// Log file (default: <data dir>/fids/fids.log)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the board until `q`, `Esc` or Ctrl-C
    Run {
        /// Server base URL, overriding the config file
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Render one frame from local JSON files to stdout
    Preview {
        /// `/api/flights` response body
        #[arg(long)]
        flights: PathBuf,

        /// `/api/weather` response body
        #[arg(long)]
        weather: Option<PathBuf>,

        #[arg(long, default_value = "departures")]
        view: ViewName,

        #[arg(long, default_value = "100")]
        width: u16,

        #[arg(long, default_value = "30")]
        height: u16,
    },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
