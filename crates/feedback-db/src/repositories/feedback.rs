//! PostgreSQL implementation of FeedbackRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use feedback_core::entities::{FeedbackRecord, NewFeedback};
use feedback_core::traits::{FeedbackRepository, RepoResult};

use crate::mappers::FeedbackInsert;
use crate::models::FeedbackModel;

use super::error::map_db_error;

/// PostgreSQL implementation of FeedbackRepository
#[derive(Clone)]
pub struct PgFeedbackRepository {
    pool: PgPool,
}

impl PgFeedbackRepository {
    /// Create a new PgFeedbackRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackRepository for PgFeedbackRepository {
    #[instrument(skip(self))]
    async fn find_by_faculty(&self, faculty_name: &str) -> RepoResult<Vec<FeedbackRecord>> {
        let results = sqlx::query_as::<_, FeedbackModel>(
            r"
            SELECT id, faculty_name, student_name, teaching_quality, communication_skill,
                   comment, sentiment, created_at
            FROM feedback
            WHERE faculty_name = $1
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(faculty_name)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(FeedbackRecord::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<FeedbackRecord>> {
        let results = sqlx::query_as::<_, FeedbackModel>(
            r"
            SELECT id, faculty_name, student_name, teaching_quality, communication_skill,
                   comment, sentiment, created_at
            FROM feedback
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(FeedbackRecord::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_student(&self, student_name: &str) -> RepoResult<Vec<FeedbackRecord>> {
        let results = sqlx::query_as::<_, FeedbackModel>(
            r"
            SELECT id, faculty_name, student_name, teaching_quality, communication_skill,
                   comment, sentiment, created_at
            FROM feedback
            WHERE LOWER(student_name) = LOWER($1)
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(student_name)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(FeedbackRecord::from).collect())
    }

    #[instrument(skip(self, feedback), fields(faculty = %feedback.faculty_name))]
    async fn create(&self, feedback: &NewFeedback) -> RepoResult<FeedbackRecord> {
        let insert = FeedbackInsert::new(feedback);

        let model = sqlx::query_as::<_, FeedbackModel>(
            r"
            INSERT INTO feedback (faculty_name, student_name, teaching_quality, communication_skill, comment, sentiment)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, faculty_name, student_name, teaching_quality, communication_skill,
                      comment, sentiment, created_at
            ",
        )
        .bind(insert.faculty_name)
        .bind(insert.student_name)
        .bind(insert.teaching_quality)
        .bind(insert.communication_skill)
        .bind(insert.comment)
        .bind(insert.sentiment)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(FeedbackRecord::from(model))
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}
