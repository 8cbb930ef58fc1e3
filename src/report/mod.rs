//! Display formatting for estimate results.
//!
//! The engine works in exact decimals; this module turns them into the
//! strings a shell shows: whole-dollar money with space-grouped thousands,
//! one-decimal percentages, and the four headline metrics.

mod format;
mod metrics;

pub use format::{CURRENCY_SYMBOL, NO_RESULT, format_money, format_percent};
pub use metrics::{CoverageDisplayRow, HeadlineMetric, coverage_display, headline_metrics};
