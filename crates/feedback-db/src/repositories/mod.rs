//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in feedback-core.

mod error;
mod feedback;
mod report;

pub use feedback::PgFeedbackRepository;
pub use report::PgReportRepository;
