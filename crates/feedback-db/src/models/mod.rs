//! Database models - SQLx-compatible structs for PostgreSQL tables

mod feedback;
mod report;

pub use feedback::FeedbackModel;
pub use report::ReportModel;
