//! Heartbeat command implementation

use super::build_orchestrator;
use crate::config::Config;
use clap::Args;

#[derive(Args, Debug)]
pub struct HeartbeatArgs {
    /// Log the message instead of sending it
    #[arg(long)]
    pub dry_run: bool,
}

impl HeartbeatArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let orchestrator = build_orchestrator(config, self.dry_run)?;
        orchestrator.heartbeat().await?;
        Ok(())
    }
}
