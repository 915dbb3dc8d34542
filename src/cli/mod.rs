//! CLI interface for trend-alert
//!
//! Provides subcommands for:
//! - `run`: One fetch / evaluate / notify pass
//! - `heartbeat`: Send a liveness message
//! - `config`: Show the effective configuration

mod heartbeat;
mod run;

pub use heartbeat::HeartbeatArgs;
pub use run::RunArgs;

use crate::config::Config;
use crate::fetch::{CoinGeckoClient, CoinGeckoConfig};
use crate::notify::{LogNotifier, Notifier, TelegramConfig, TelegramNotifier};
use crate::runner::{Orchestrator, RunSettings};
use clap::{Parser, Subcommand};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "trend-alert")]
#[command(about = "RSI and EMA crossover alerts for a daily price series")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one analysis pass and notify
    Run(RunArgs),
    /// Send a liveness message
    Heartbeat(HeartbeatArgs),
    /// Show configuration
    Config,
}

/// Wire the production collaborators for a config
///
/// `dry_run` swaps the Telegram notifier for one that only logs, and skips
/// the token requirement.
pub fn build_orchestrator(config: &Config, dry_run: bool) -> anyhow::Result<Orchestrator> {
    config.validate(!dry_run)?;

    let settings = RunSettings::from_config(config)?;
    let fetcher = Arc::new(CoinGeckoClient::with_config(CoinGeckoConfig::from(
        &config.fetcher,
    ))?);

    let notifier: Arc<dyn Notifier> = if dry_run {
        Arc::new(LogNotifier::new())
    } else {
        Arc::new(TelegramNotifier::new(TelegramConfig::from_notifier(
            &config.notifier,
        )?)?)
    };

    Ok(Orchestrator::new(settings, fetcher, notifier))
}
