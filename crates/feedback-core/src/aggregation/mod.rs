//! Report aggregation - statistics and summary text derived from feedback

mod stats;
mod summary;

pub use stats::ReportStats;
pub use summary::format_fixed;
