//! Business logic services
//!
//! This module contains the service layer that validates input, calls the
//! repository ports, and shapes results for the API layer.

pub mod context;
pub mod error;
pub mod feedback;
pub mod report;
pub mod sentiment;

// Re-export all services for convenience
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use feedback::FeedbackService;
pub use report::ReportService;
pub use sentiment::{KeywordClassifier, SentimentService};
