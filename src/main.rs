use clap::Parser;
use std::process::ExitCode;
use trend_alert::cli::{Cli, Commands};
use trend_alert::config::Config;

const DEFAULT_CONFIG: &str = include_str!("../config.toml.example");

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Load configuration
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
            eprintln!("Using default configuration");
            let mut config: Config = toml::from_str(DEFAULT_CONFIG)?;
            config.apply_overrides(|key| std::env::var(key).ok());
            config
        }
    };

    // Initialize telemetry
    let _telemetry = trend_alert::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Run(args) => {
            tracing::info!(asset = %config.asset.symbol, "Starting run");
            if !args.execute(&config).await? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Heartbeat(args) => {
            tracing::info!("Sending heartbeat");
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Asset: {} ({}/{}, {} days)",
                config.asset.symbol,
                config.asset.id,
                config.asset.vs_currency,
                config.asset.lookback_days
            );
            println!(
                "  Indicators: RSI({}) EMA({}/{})",
                config.indicators.rsi_period,
                config.indicators.ema_fast_period,
                config.indicators.ema_slow_period
            );
            println!(
                "  Thresholds: overbought={} oversold={}",
                config.alerts.thresholds.overbought, config.alerts.thresholds.oversold
            );
            println!("  Report mode: {:?}", config.alerts.report_mode);
            println!(
                "  Fetcher: {} (timeout {}s, {} attempts)",
                config.fetcher.base_url, config.fetcher.timeout_secs, config.fetcher.max_retries
            );
            println!(
                "  Notifier: chat {} token {}",
                config.notifier.chat_id,
                config.notifier.redacted_token()
            );
        }
    }

    Ok(ExitCode::SUCCESS)
}
