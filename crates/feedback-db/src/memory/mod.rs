//! In-memory store
//!
//! Implements both repository traits over process-local tables. Used for
//! `STORE_BACKEND=memory` and for tests that do not need PostgreSQL.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::instrument;

use feedback_core::entities::{FeedbackRecord, NewFeedback, NewReport, Report};
use feedback_core::traits::{FeedbackRepository, RepoResult, ReportRepository};
use feedback_core::value_objects::{FeedbackId, ReportId};

#[derive(Debug, Default)]
struct Tables {
    feedback: Vec<FeedbackRecord>,
    reports: Vec<Report>,
    last_feedback_id: i64,
    last_report_id: i64,
    last_timestamp: Option<DateTime<Utc>>,
}

impl Tables {
    /// Timestamps handed out are strictly increasing so newest-first ordering
    /// stays deterministic even when the clock does not advance between writes.
    fn next_timestamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let ts = match self.last_timestamp {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_timestamp = Some(ts);
        ts
    }
}

/// Process-local store; contents are lost on restart
///
/// Cloning is cheap and every clone shares the same tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored feedback records
    pub async fn feedback_count(&self) -> usize {
        self.tables.read().await.feedback.len()
    }

    /// Number of stored reports
    pub async fn report_count(&self) -> usize {
        self.tables.read().await.reports.len()
    }
}

fn newest_first<T, F>(mut rows: Vec<T>, key: F) -> Vec<T>
where
    F: Fn(&T) -> (DateTime<Utc>, i64),
{
    rows.sort_by(|a, b| key(b).cmp(&key(a)));
    rows
}

fn feedback_key(record: &FeedbackRecord) -> (DateTime<Utc>, i64) {
    (record.created_at, record.id.into_inner())
}

fn report_key(report: &Report) -> (DateTime<Utc>, i64) {
    (report.created_at, report.id.into_inner())
}

#[async_trait]
impl FeedbackRepository for InMemoryStore {
    #[instrument(skip(self))]
    async fn find_by_faculty(&self, faculty_name: &str) -> RepoResult<Vec<FeedbackRecord>> {
        let tables = self.tables.read().await;
        let rows = tables
            .feedback
            .iter()
            .filter(|f| f.is_for_faculty(faculty_name))
            .cloned()
            .collect();
        Ok(newest_first(rows, feedback_key))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<FeedbackRecord>> {
        let tables = self.tables.read().await;
        Ok(newest_first(tables.feedback.clone(), feedback_key))
    }

    #[instrument(skip(self))]
    async fn find_by_student(&self, student_name: &str) -> RepoResult<Vec<FeedbackRecord>> {
        let tables = self.tables.read().await;
        let rows = tables
            .feedback
            .iter()
            .filter(|f| f.is_by_student(student_name))
            .cloned()
            .collect();
        Ok(newest_first(rows, feedback_key))
    }

    #[instrument(skip(self, feedback), fields(faculty = %feedback.faculty_name))]
    async fn create(&self, feedback: &NewFeedback) -> RepoResult<FeedbackRecord> {
        let mut tables = self.tables.write().await;
        tables.last_feedback_id += 1;
        let id = FeedbackId::new(tables.last_feedback_id);
        let created_at = tables.next_timestamp();

        let record = feedback.clone().into_record(id, created_at);
        tables.feedback.push(record.clone());
        Ok(record)
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}

#[async_trait]
impl ReportRepository for InMemoryStore {
    #[instrument(skip(self, report), fields(faculty = %report.faculty_name))]
    async fn insert(&self, report: &NewReport) -> RepoResult<Report> {
        let mut tables = self.tables.write().await;
        tables.last_report_id += 1;
        let id = ReportId::new(tables.last_report_id);
        let created_at = tables.next_timestamp();

        let stored = report.clone().into_report(id, created_at);
        tables.reports.push(stored.clone());
        Ok(stored)
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Report>> {
        let tables = self.tables.read().await;
        Ok(newest_first(tables.reports.clone(), report_key))
    }

    #[instrument(skip(self))]
    async fn find_by_faculty(&self, faculty_name: &str) -> RepoResult<Vec<Report>> {
        let tables = self.tables.read().await;
        let rows = tables
            .reports
            .iter()
            .filter(|r| r.faculty_name == faculty_name)
            .cloned()
            .collect();
        Ok(newest_first(rows, report_key))
    }
}
