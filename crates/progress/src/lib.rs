//! Progress aggregation.
//!
//! Per-entity and roll-up completion percentages over topic and company
//! snapshots, plus the text/difficulty filters the problem sheet applies
//! before rolling up.

#![warn(missing_docs)]

pub mod aggregator;
pub mod filter;

pub use aggregator::{
    combined_progress, entity_progress, overall_progress, recent_activity, totals,
    ActivityEntry, ActivityKind, ProgressSnapshot, ProgressTotals,
};
pub use filter::{filter_companies, filter_topics, title_matches, CompanyFilter};
