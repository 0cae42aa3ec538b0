//! Ports implemented by the infrastructure layer

mod classifier;
mod repositories;

pub use classifier::{ClassifierResult, SentimentClassifier};
pub use repositories::{FeedbackRepository, RepoResult, ReportRepository};
