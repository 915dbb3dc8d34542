//! Series store
//!
//! Ordered daily price observations for a single asset, with the derived
//! open/high/low fields filled in once at ingestion.

mod store;
mod types;

pub use store::Series;
pub use types::{PricePoint, SeriesError};
