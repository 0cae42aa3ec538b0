//! Sentiment classifier port

use async_trait::async_trait;

use crate::entities::Sentiment;
use crate::error::DomainError;

/// Result type for classifier calls
pub type ClassifierResult<T> = Result<T, DomainError>;

/// Assigns a sentiment label to a feedback comment
///
/// Called once per submission; the label is stored with the feedback and never
/// recomputed, so a classifier change only affects future submissions.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    async fn classify(&self, comment: &str) -> ClassifierResult<Sentiment>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}
