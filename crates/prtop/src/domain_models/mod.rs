//! Domain models
//!
//! Check status vocabulary, pull request snapshots and the time helpers
//! used to display them.

pub mod check;
pub mod duration;
pub mod pull_request;

pub use check::{raw_status, sort_checks, Check, CheckStatus};
pub use duration::{format_elapsed, parse_timestamp, relative_time};
pub use pull_request::{PrData, PrSummary, PrTarget};
