//! Message templates

use super::format::{format_price, truncate_chars, ERROR_DETAIL_LIMIT};
use crate::alert::AlertEvent;
use crate::error::BotError;
use crate::indicators::{IndicatorPeriods, IndicatorRow};
use chrono::{DateTime, FixedOffset, Utc};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders every message the bot sends
#[derive(Debug, Clone)]
pub struct MessageComposer {
    symbol: String,
    periods: IndicatorPeriods,
    offset: FixedOffset,
}

impl MessageComposer {
    pub fn new(symbol: impl Into<String>, periods: IndicatorPeriods, offset: FixedOffset) -> Self {
        Self {
            symbol: symbol.into(),
            periods,
            offset,
        }
    }

    fn local_time(&self, now: DateTime<Utc>) -> String {
        now.with_timezone(&self.offset).format(TIME_FORMAT).to_string()
    }

    /// One numbered-list entry for an alert
    pub fn alert_line(&self, event: &AlertEvent) -> String {
        let IndicatorPeriods {
            ema_fast, ema_slow, ..
        } = self.periods;

        match event {
            AlertEvent::OverboughtRsi { rsi } => format!("🔥 *RSI OVERBOUGHT!* ({:.2})", rsi),
            AlertEvent::OversoldRsi { rsi } => format!("🥶 *RSI OVERSOLD!* ({:.2})", rsi),
            AlertEvent::GoldenCross { fast, slow } => format!(
                "✨ *GOLDEN CROSS!* EMA {} > EMA {} ({:.2} / {:.2})",
                ema_fast, ema_slow, fast, slow
            ),
            AlertEvent::DeathCross { fast, slow } => format!(
                "💀 *DEATH CROSS!* EMA {} < EMA {} ({:.2} / {:.2})",
                ema_fast, ema_slow, fast, slow
            ),
        }
    }

    fn market_block(&self, last: &IndicatorRow, now: DateTime<Utc>) -> String {
        format!(
            "📊 *Market Data:*\n\
             Price: `{}`\n\
             RSI({}): `{:.2}`\n\
             EMA {}: `{:.2}`\n\
             EMA {}: `{:.2}`\n\
             Time: `{}`",
            format_price(last.close),
            self.periods.rsi,
            last.rsi,
            self.periods.ema_fast,
            last.ema_fast,
            self.periods.ema_slow,
            last.ema_slow,
            self.local_time(now)
        )
    }

    /// Alert message listing every event, followed by the market values
    pub fn alert(&self, alerts: &[AlertEvent], last: &IndicatorRow, now: DateTime<Utc>) -> String {
        let mut message = format!("🚨 *{} TRADING ALERT!*\n\n", self.symbol);
        for (i, event) in alerts.iter().enumerate() {
            message.push_str(&format!("{}. {}\n", i + 1, self.alert_line(event)));
        }
        message.push('\n');
        message.push_str(&self.market_block(last, now));
        message
    }

    /// Routine status message for a run without alerts
    pub fn status(&self, last: &IndicatorRow, now: DateTime<Utc>) -> String {
        format!(
            "📈 *{} Market Update*\n\n➡️ No alerts, market normal\n\n{}",
            self.symbol,
            self.market_block(last, now)
        )
    }

    /// Failure report: kind label and a truncated diagnostic
    pub fn error(&self, error: &BotError) -> String {
        let detail = truncate_chars(&error.to_string(), ERROR_DETAIL_LIMIT).replace('`', "'");
        format!("⚠️ *Bot Error!*\n`{}: {}`", error.kind(), detail)
    }

    /// Liveness message, sent without touching market data
    pub fn heartbeat(&self, now: DateTime<Utc>) -> String {
        format!(
            "✅ *Bot Status Check - Still Running!*\n\n\
             ⏰ Check Time: `{}`\n\
             🤖 Status: HEALTHY ✅\n\
             🔄 Service: Monitoring {}\n\
             🚨 Alert System: Active & Ready",
            self.local_time(now),
            self.symbol
        )
    }
}
