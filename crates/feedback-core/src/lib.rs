//! # feedback-core
//!
//! Domain layer containing feedback and report entities, the report aggregation
//! rules, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod aggregation;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use aggregation::{format_fixed, ReportStats};
pub use entities::{
    FeedbackRecord, NewFeedback, NewReport, Report, Sentiment, SentimentParseError,
    RATING_MAX, RATING_MIN,
};
pub use error::DomainError;
pub use traits::{
    ClassifierResult, FeedbackRepository, RepoResult, ReportRepository, SentimentClassifier,
};
pub use value_objects::{FeedbackId, IdParseError, ReportId};
