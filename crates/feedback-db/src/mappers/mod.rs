//! Entity to model mappers
//!
//! This module provides conversions between domain entities (feedback-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database operations

mod feedback;
mod report;

pub use feedback::{parse_sentiment, FeedbackInsert};
pub use report::ReportInsert;
