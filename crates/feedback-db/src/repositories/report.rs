//! PostgreSQL implementation of ReportRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use feedback_core::entities::{NewReport, Report};
use feedback_core::traits::{RepoResult, ReportRepository};

use crate::mappers::ReportInsert;
use crate::models::ReportModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReportRepository
#[derive(Clone)]
pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    /// Create a new PgReportRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    /// Single-statement insert; the row is either fully written or absent
    #[instrument(skip(self, report), fields(faculty = %report.faculty_name))]
    async fn insert(&self, report: &NewReport) -> RepoResult<Report> {
        let insert = ReportInsert::new(report);

        let model = sqlx::query_as::<_, ReportModel>(
            r"
            INSERT INTO reports (
                faculty_name, avg_teaching_quality, avg_communication_skill, sentiment_summary,
                total_feedback_count, positive_count, negative_count, neutral_count
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, faculty_name, avg_teaching_quality, avg_communication_skill,
                      sentiment_summary, total_feedback_count, positive_count,
                      negative_count, neutral_count, created_at
            ",
        )
        .bind(insert.faculty_name)
        .bind(insert.avg_teaching_quality)
        .bind(insert.avg_communication_skill)
        .bind(insert.sentiment_summary)
        .bind(insert.total_feedback_count)
        .bind(insert.positive_count)
        .bind(insert.negative_count)
        .bind(insert.neutral_count)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Report::from(model))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Report>> {
        let results = sqlx::query_as::<_, ReportModel>(
            r"
            SELECT id, faculty_name, avg_teaching_quality, avg_communication_skill,
                   sentiment_summary, total_feedback_count, positive_count,
                   negative_count, neutral_count, created_at
            FROM reports
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Report::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_faculty(&self, faculty_name: &str) -> RepoResult<Vec<Report>> {
        let results = sqlx::query_as::<_, ReportModel>(
            r"
            SELECT id, faculty_name, avg_teaching_quality, avg_communication_skill,
                   sentiment_summary, total_feedback_count, positive_count,
                   negative_count, neutral_count, created_at
            FROM reports
            WHERE faculty_name = $1
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(faculty_name)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Report::from).collect())
    }
}
