//! Application services for summaries.

mod status;

pub use status::{StatusSummary, StatusSummaryService};
