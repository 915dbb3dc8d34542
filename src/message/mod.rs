//! Message composition
//!
//! Turns alert events and market values into Markdown text for the
//! notifier. Detection lives in `alert`; nothing here decides what fires.

mod composer;
mod format;

pub use composer::MessageComposer;
pub use format::{format_price, truncate_chars, ERROR_DETAIL_LIMIT};
