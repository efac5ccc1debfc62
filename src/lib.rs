pub mod cli;
pub mod core;
pub mod providers;

use crate::core::RateNormalizer;
use crate::core::config::AppConfig;
use crate::providers::HttpRateFetcher;
use anyhow::Result;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub enum AppCommand {
    List {
        filter: Option<String>,
        plain: bool,
    },
    Show {
        code: String,
    },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("fxrates starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let fetcher = HttpRateFetcher::from_config(&config)?;
    let normalizer = RateNormalizer;

    match command {
        AppCommand::List { filter, plain } => {
            cli::list::run(&fetcher, &normalizer, filter.as_deref(), plain).await
        }
        AppCommand::Show { code } => cli::show::run(&fetcher, &normalizer, &code).await,
    }
}
