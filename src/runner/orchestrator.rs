//! Run state machine

use super::types::{RunOutcome, RunReport, RunSettings, RunState};
use crate::alert::{evaluate, Snapshot};
use crate::config::ReportMode;
use crate::error::BotError;
use crate::fetch::PriceFetcher;
use crate::indicators::compute_indicators;
use crate::message::MessageComposer;
use crate::notify::Notifier;
use crate::telemetry::{increment, record_failure, record_latency, CounterMetric, LatencyMetric};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

/// Glues fetcher, indicator engine, evaluator and notifier for one run
pub struct Orchestrator {
    settings: RunSettings,
    composer: MessageComposer,
    fetcher: Arc<dyn PriceFetcher>,
    notifier: Arc<dyn Notifier>,
}

impl Orchestrator {
    pub fn new(
        settings: RunSettings,
        fetcher: Arc<dyn PriceFetcher>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let composer = MessageComposer::new(
            settings.symbol.clone(),
            settings.periods,
            settings.display_offset,
        );

        Self {
            settings,
            composer,
            fetcher,
            notifier,
        }
    }

    pub fn settings(&self) -> &RunSettings {
        &self.settings
    }

    /// Execute one run stamped with the current time
    pub async fn run(&self) -> RunReport {
        self.run_at(Utc::now()).await
    }

    /// Execute one run, rendering messages with the given time
    pub async fn run_at(&self, now: DateTime<Utc>) -> RunReport {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("run", %run_id, asset = %self.settings.symbol);

        async move {
            let mut state = RunState::Fetching;

            match self.pipeline(&mut state, now).await {
                Ok(outcome) => {
                    enter(&mut state, RunState::Done);
                    RunReport {
                        outcome: Ok(outcome),
                        failed_in: None,
                        error_reported: false,
                    }
                }
                Err(error) => {
                    tracing::error!(
                        state = ?state,
                        kind = error.kind(),
                        error = %error,
                        "Run failed"
                    );
                    record_failure(error.kind());

                    let error_reported = error.is_reportable() && self.report_error(&error).await;

                    RunReport {
                        outcome: Err(error),
                        failed_in: Some(state),
                        error_reported,
                    }
                }
            }
        }
        .instrument(span)
        .await
    }

    async fn pipeline(
        &self,
        state: &mut RunState,
        now: DateTime<Utc>,
    ) -> Result<RunOutcome, BotError> {
        enter(state, RunState::Fetching);
        let series = self
            .fetcher
            .fetch_daily_series(&self.settings.request)
            .await
            .map_err(|e| BotError::DataUnavailable(e.to_string()))?;

        if series.is_empty() {
            return Err(BotError::DataUnavailable("fetch returned no rows".to_string()));
        }

        enter(state, RunState::Computing);
        let started = Instant::now();
        let table = compute_indicators(&series, self.settings.periods)?;

        enter(state, RunState::Evaluating);
        let snapshot = Snapshot::from_table(&table)?;
        let alerts = evaluate(&snapshot, &self.settings.thresholds);
        record_latency(LatencyMetric::Compute, started.elapsed());

        let last = snapshot.last;
        tracing::info!(
            price = last.close,
            rsi = last.rsi,
            ema_fast = last.ema_fast,
            ema_slow = last.ema_slow,
            alerts = alerts.len(),
            "Market snapshot"
        );
        increment(CounterMetric::AlertsEmitted, alerts.len() as u64);

        let (message, outcome) = if !alerts.is_empty() {
            (
                self.composer.alert(&alerts, &last, now),
                RunOutcome::Alerted(alerts),
            )
        } else {
            match self.settings.report_mode {
                ReportMode::Silent => {
                    tracing::info!("Market normal, no alerts, nothing sent");
                    return Ok(RunOutcome::Quiet);
                }
                ReportMode::Always => (self.composer.status(&last, now), RunOutcome::StatusReported),
            }
        };

        enter(state, RunState::Notifying);
        self.notifier
            .send(&message)
            .await
            .map_err(|e| BotError::DeliveryFailure(e.to_string()))?;

        Ok(outcome)
    }

    /// Best-effort error notification; failures are logged only
    async fn report_error(&self, error: &BotError) -> bool {
        let message = self.composer.error(error);
        match self.notifier.send(&message).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Could not deliver error notification");
                false
            }
        }
    }

    /// Send a liveness message without fetching data
    pub async fn heartbeat(&self) -> Result<(), BotError> {
        self.heartbeat_at(Utc::now()).await
    }

    pub async fn heartbeat_at(&self, now: DateTime<Utc>) -> Result<(), BotError> {
        let message = self.composer.heartbeat(now);
        self.notifier
            .send(&message)
            .await
            .map_err(|e| BotError::DeliveryFailure(e.to_string()))?;
        tracing::info!("Heartbeat sent");
        Ok(())
    }
}

fn enter(state: &mut RunState, next: RunState) {
    tracing::debug!(from = ?*state, to = ?next, "State transition");
    *state = next;
}
