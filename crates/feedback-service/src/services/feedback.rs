//! Feedback service
//!
//! Accepts student submissions, labels their comments, and lists stored feedback.

use feedback_core::entities::{NewFeedback, Sentiment};
use feedback_core::DomainError;
use tracing::{info, instrument};

use crate::dto::{FeedbackRequest, FeedbackResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::sentiment::SentimentService;

/// Feedback service
pub struct FeedbackService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FeedbackService<'a> {
    /// Create a new FeedbackService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Store a submission
    ///
    /// The comment is classified once here; the label is stored with the
    /// record and never recomputed.
    #[instrument(skip(self, request), fields(faculty = %request.faculty_name))]
    pub async fn submit(&self, request: FeedbackRequest) -> ServiceResult<FeedbackResponse> {
        if request.faculty_name.trim().is_empty() {
            return Err(DomainError::ValidationError("Faculty name is required".to_string()).into());
        }
        if request.student_name.trim().is_empty() {
            return Err(DomainError::ValidationError("Student name is required".to_string()).into());
        }
        if !NewFeedback::is_valid_rating(request.teaching_quality) {
            return Err(DomainError::InvalidRating {
                field: "teachingQuality",
            }
            .into());
        }
        if !NewFeedback::is_valid_rating(request.communication_skill) {
            return Err(DomainError::InvalidRating {
                field: "communicationSkill",
            }
            .into());
        }

        let mut feedback = NewFeedback {
            faculty_name: request.faculty_name,
            student_name: request.student_name,
            teaching_quality: request.teaching_quality,
            communication_skill: request.communication_skill,
            comment: request.comment,
            sentiment: None,
        };

        let sentiment = match feedback.meaningful_comment() {
            Some(comment) => SentimentService::new(self.ctx).classify(comment).await?,
            None => Sentiment::Neutral,
        };
        feedback.sentiment = Some(sentiment);

        let record = self.ctx.feedback_repo().create(&feedback).await?;

        info!(feedback_id = %record.id, sentiment = %sentiment, "Feedback submitted");

        Ok(FeedbackResponse::from(&record))
    }

    /// List all feedback, newest first
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ServiceResult<Vec<FeedbackResponse>> {
        let records = self.ctx.feedback_repo().find_all().await?;
        Ok(records.iter().map(FeedbackResponse::from).collect())
    }

    /// List feedback for one faculty member (exact name match)
    #[instrument(skip(self))]
    pub async fn list_for_faculty(&self, faculty_name: &str) -> ServiceResult<Vec<FeedbackResponse>> {
        let records = self.ctx.feedback_repo().find_by_faculty(faculty_name).await?;
        Ok(records.iter().map(FeedbackResponse::from).collect())
    }

    /// List feedback submitted by one student (case-insensitive)
    #[instrument(skip(self))]
    pub async fn list_for_student(&self, student_name: &str) -> ServiceResult<Vec<FeedbackResponse>> {
        let records = self.ctx.feedback_repo().find_by_student(student_name).await?;
        Ok(records.iter().map(FeedbackResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use feedback_core::traits::{ClassifierResult, SentimentClassifier};
    use feedback_db::InMemoryStore;

    use crate::services::ServiceContextBuilder;

    fn context() -> ServiceContext {
        let store = Arc::new(InMemoryStore::new());
        ServiceContextBuilder::new()
            .feedback_repo(store.clone())
            .report_repo(store)
            .build()
            .unwrap()
    }

    fn request(faculty: &str, student: &str, comment: Option<&str>) -> FeedbackRequest {
        FeedbackRequest {
            faculty_name: faculty.to_string(),
            student_name: student.to_string(),
            teaching_quality: 4,
            communication_skill: 5,
            comment: comment.map(String::from),
        }
    }

    #[tokio::test]
    async fn test_submit_classifies_comment() {
        let ctx = context();
        let service = FeedbackService::new(&ctx);

        let positive = service
            .submit(request("Dr. Smith", "Alice", Some("Excellent teacher")))
            .await
            .unwrap();
        assert_eq!(positive.sentiment, Sentiment::Positive);

        let negative = service
            .submit(request("Dr. Smith", "Bob", Some("Terrible pacing")))
            .await
            .unwrap();
        assert_eq!(negative.sentiment, Sentiment::Negative);
    }

    #[tokio::test]
    async fn test_blank_or_missing_comment_is_neutral() {
        let ctx = context();
        let service = FeedbackService::new(&ctx);

        let missing = service.submit(request("Dr. Smith", "Alice", None)).await.unwrap();
        assert_eq!(missing.sentiment, Sentiment::Neutral);

        let blank = service
            .submit(request("Dr. Smith", "Bob", Some("  ")))
            .await
            .unwrap();
        assert_eq!(blank.sentiment, Sentiment::Neutral);
    }

    #[tokio::test]
    async fn test_submit_rejects_bad_input() {
        let ctx = context();
        let service = FeedbackService::new(&ctx);

        let err = service.submit(request(" ", "Alice", None)).await.unwrap_err();
        assert_eq!(err.status_code(), 400);

        let err = service.submit(request("Dr. Smith", "", None)).await.unwrap_err();
        assert_eq!(err.status_code(), 400);

        let mut out_of_range = request("Dr. Smith", "Alice", None);
        out_of_range.communication_skill = 6;
        let err = service.submit(out_of_range).await.unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "INVALID_RATING");
    }

    #[tokio::test]
    async fn test_listing_filters() {
        let ctx = context();
        let service = FeedbackService::new(&ctx);

        service.submit(request("Dr. Smith", "Alice", None)).await.unwrap();
        service.submit(request("Dr. Jones", "alice", None)).await.unwrap();
        service.submit(request("Dr. Smith", "Bob", None)).await.unwrap();

        assert_eq!(service.list_all().await.unwrap().len(), 3);
        assert_eq!(service.list_for_faculty("Dr. Smith").await.unwrap().len(), 2);
        assert_eq!(service.list_for_faculty("DR. SMITH").await.unwrap().len(), 0);

        let alice = service.list_for_student("ALICE").await.unwrap();
        assert_eq!(alice.len(), 2);
        assert_eq!(alice[0].faculty_name, "Dr. Jones");
    }

    struct OfflineClassifier;

    #[async_trait]
    impl SentimentClassifier for OfflineClassifier {
        async fn classify(&self, _comment: &str) -> ClassifierResult<Sentiment> {
            Err(DomainError::ClassifierError("model endpoint unreachable".to_string()))
        }

        fn name(&self) -> &'static str {
            "offline"
        }
    }

    #[tokio::test]
    async fn test_classifier_failure_is_server_error() {
        let store = Arc::new(InMemoryStore::new());
        let ctx = ServiceContextBuilder::new()
            .feedback_repo(store.clone())
            .report_repo(store.clone())
            .classifier(Arc::new(OfflineClassifier))
            .build()
            .unwrap();
        let service = FeedbackService::new(&ctx);

        let err = service
            .submit(request("Dr. Smith", "Alice", Some("Great course")))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.error_code(), "CLASSIFIER_ERROR");
        assert_eq!(store.feedback_count().await, 0);

        // No comment means the classifier is never consulted
        let neutral = service.submit(request("Dr. Smith", "Bob", None)).await.unwrap();
        assert_eq!(neutral.sentiment, Sentiment::Neutral);
    }
}
