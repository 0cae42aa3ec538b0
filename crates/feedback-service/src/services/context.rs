//! Service context - dependency container for services
//!
//! Holds the repository ports and the sentiment classifier. Services borrow
//! the context; nothing here knows which backend sits behind the ports.

use std::sync::Arc;

use feedback_core::traits::{FeedbackRepository, ReportRepository, SentimentClassifier};

use super::error::{ServiceError, ServiceResult};
use super::sentiment::KeywordClassifier;

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    feedback_repo: Arc<dyn FeedbackRepository>,
    report_repo: Arc<dyn ReportRepository>,
    classifier: Arc<dyn SentimentClassifier>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        feedback_repo: Arc<dyn FeedbackRepository>,
        report_repo: Arc<dyn ReportRepository>,
        classifier: Arc<dyn SentimentClassifier>,
    ) -> Self {
        Self {
            feedback_repo,
            report_repo,
            classifier,
        }
    }

    /// Get the feedback repository
    pub fn feedback_repo(&self) -> &dyn FeedbackRepository {
        self.feedback_repo.as_ref()
    }

    /// Get the report repository
    pub fn report_repo(&self) -> &dyn ReportRepository {
        self.report_repo.as_ref()
    }

    /// Get the sentiment classifier
    pub fn classifier(&self) -> &dyn SentimentClassifier {
        self.classifier.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("classifier", &self.classifier.name())
            .finish()
    }
}

/// Builder for creating ServiceContext
///
/// The classifier defaults to [`KeywordClassifier`]; both repositories are required.
#[derive(Default)]
pub struct ServiceContextBuilder {
    feedback_repo: Option<Arc<dyn FeedbackRepository>>,
    report_repo: Option<Arc<dyn ReportRepository>>,
    classifier: Option<Arc<dyn SentimentClassifier>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feedback_repo(mut self, repo: Arc<dyn FeedbackRepository>) -> Self {
        self.feedback_repo = Some(repo);
        self
    }

    pub fn report_repo(mut self, repo: Arc<dyn ReportRepository>) -> Self {
        self.report_repo = Some(repo);
        self
    }

    pub fn classifier(mut self, classifier: Arc<dyn SentimentClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if a repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.feedback_repo
                .ok_or_else(|| ServiceError::validation("feedback_repo is required"))?,
            self.report_repo
                .ok_or_else(|| ServiceError::validation("report_repo is required"))?,
            self.classifier
                .unwrap_or_else(|| Arc::new(KeywordClassifier::new())),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedback_db::InMemoryStore;

    #[test]
    fn test_builder_requires_repositories() {
        let err = ServiceContextBuilder::new().build().unwrap_err();
        assert!(err.to_string().contains("feedback_repo is required"));

        let store = Arc::new(InMemoryStore::new());
        let err = ServiceContextBuilder::new()
            .feedback_repo(store)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("report_repo is required"));
    }

    #[test]
    fn test_builder_defaults_to_keyword_classifier() {
        let store = Arc::new(InMemoryStore::new());
        let ctx = ServiceContextBuilder::new()
            .feedback_repo(store.clone())
            .report_repo(store)
            .build()
            .unwrap();
        assert_eq!(ctx.classifier().name(), "keyword");
    }
}
