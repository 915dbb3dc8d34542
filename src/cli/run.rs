//! Run command implementation

use super::build_orchestrator;
use crate::config::{Config, ReportMode};
use clap::Args;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Override the zero-alert reporting mode
    #[arg(long, value_enum)]
    pub report_mode: Option<ReportMode>,

    /// Log messages instead of sending them
    #[arg(long)]
    pub dry_run: bool,
}

impl RunArgs {
    /// Returns whether the run succeeded
    pub async fn execute(&self, config: &Config) -> anyhow::Result<bool> {
        let mut config = config.clone();
        if let Some(mode) = self.report_mode {
            config.alerts.report_mode = mode;
        }

        let orchestrator = build_orchestrator(&config, self.dry_run)?;
        let report = orchestrator.run().await;

        match &report.outcome {
            Ok(outcome) => tracing::info!(?outcome, "Run complete"),
            Err(e) => tracing::error!(
                kind = e.kind(),
                error_reported = report.error_reported,
                "Run finished with error"
            ),
        }

        Ok(report.is_success())
    }
}
