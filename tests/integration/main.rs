//! Integration tests for trend-alert

mod config_test;
mod fetch_test;
mod notify_test;
mod pipeline_test;
