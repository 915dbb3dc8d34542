//! Orchestrator types

use crate::alert::{AlertEvent, Thresholds};
use crate::config::{Config, ConfigError, ReportMode};
use crate::error::BotError;
use crate::fetch::FetchRequest;
use crate::indicators::IndicatorPeriods;
use chrono::FixedOffset;
use serde::Serialize;

/// Pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunState {
    Fetching,
    Computing,
    Evaluating,
    Notifying,
    Done,
}

/// How a successful run ended
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// Alerts fired and the alert message was delivered
    Alerted(Vec<AlertEvent>),
    /// No alerts; routine status message delivered
    StatusReported,
    /// No alerts and silent mode; nothing sent
    Quiet,
}

/// Result of one run
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Success outcome or the error that ended the run
    pub outcome: Result<RunOutcome, BotError>,
    /// Stage in which the run failed
    pub failed_in: Option<RunState>,
    /// Whether the error notification was delivered
    pub error_reported: bool,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Everything the orchestrator needs besides its collaborators
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub symbol: String,
    pub request: FetchRequest,
    pub periods: IndicatorPeriods,
    pub thresholds: Thresholds,
    pub report_mode: ReportMode,
    pub display_offset: FixedOffset,
}

impl RunSettings {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let display_offset = config
            .alerts
            .display_offset()
            .ok_or(ConfigError::InvalidOffset(config.alerts.utc_offset_hours))?;

        Ok(Self {
            symbol: config.asset.symbol.clone(),
            request: FetchRequest::from(&config.asset),
            periods: config.indicators.periods(),
            thresholds: config.alerts.thresholds,
            report_mode: config.alerts.report_mode,
            display_offset,
        })
    }
}
