use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::logging;
use anyhow::Result;
use fids_runtime::BoardConfig;

pub fn run(cli: Cli) -> Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => BoardConfig::default_path()?,
    };

    let command = cli.command.unwrap_or(Commands::Run { base_url: None });

    match command {
        Commands::Run { base_url } => {
            let mut config = BoardConfig::load_from(&config_path)?;
            if let Some(url) = base_url {
                config.base_url = url;
            }
            let log_file = match cli.log_file {
                Some(path) => path,
                None => logging::default_log_path()?,
            };
            logging::init(&log_file, cli.log_level)?;
            handlers::run::handle(config)
        }

        Commands::Preview {
            flights,
            weather,
            view,
            width,
            height,
        } => {
            let config = BoardConfig::load_from(&config_path)?;
            handlers::preview::handle(
                &config,
                handlers::preview::PreviewOptions {
                    flights,
                    weather,
                    view: view.into(),
                    width,
                    height,
                },
            )
        }

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&config_path),
            ConfigCommand::Init { force } => handlers::config::init(&config_path, force),
        },
    }
}
