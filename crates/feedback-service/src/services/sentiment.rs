//! Sentiment classification
//!
//! The keyword classifier is the default [`SentimentClassifier`]. It lowercases
//! the comment and looks for a fixed set of words; positive words win over
//! negative ones when both appear.

use async_trait::async_trait;
use tracing::instrument;

use feedback_core::entities::Sentiment;
use feedback_core::traits::{ClassifierResult, SentimentClassifier};

use crate::dto::{SentimentRequest, SentimentResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

const POSITIVE_WORDS: &[&str] = &[
    "excellent",
    "great",
    "amazing",
    "wonderful",
    "good",
    "helpful",
    "love",
    "best",
];

const NEGATIVE_WORDS: &[&str] = &[
    "terrible",
    "awful",
    "bad",
    "hate",
    "worst",
    "horrible",
    "disappointed",
];

/// Substring keyword classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify without going through the async trait
    pub fn label(comment: &str) -> Sentiment {
        let lower = comment.to_lowercase();
        if POSITIVE_WORDS.iter().any(|w| lower.contains(w)) {
            Sentiment::Positive
        } else if NEGATIVE_WORDS.iter().any(|w| lower.contains(w)) {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

#[async_trait]
impl SentimentClassifier for KeywordClassifier {
    async fn classify(&self, comment: &str) -> ClassifierResult<Sentiment> {
        Ok(Self::label(comment))
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}

/// Sentiment service
pub struct SentimentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SentimentService<'a> {
    /// Create a new SentimentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Label a comment; blank input is neutral without calling the classifier
    #[instrument(skip(self, comment), fields(classifier = self.ctx.classifier().name()))]
    pub async fn classify(&self, comment: &str) -> ServiceResult<Sentiment> {
        let comment = comment.trim();
        if comment.is_empty() {
            return Ok(Sentiment::Neutral);
        }
        Ok(self.ctx.classifier().classify(comment).await?)
    }

    /// Handle an analyze request
    pub async fn analyze(&self, request: SentimentRequest) -> ServiceResult<SentimentResponse> {
        let sentiment = self.classify(&request.comment).await?;
        Ok(SentimentResponse { sentiment })
    }
}
