//! API Integration Tests
//!
//! Most tests boot the server on the in-memory store and need no external
//! services. Tests marked as PostgreSQL tests skip unless DATABASE_URL is set.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, fixtures::*, postgres_config, TestServer,
};
use reqwest::StatusCode;

async fn submit(server: &TestServer, request: &FeedbackRequest) -> FeedbackResponse {
    let response = server.post("/api/v1/feedback", request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn generate(server: &TestServer, faculty: &str) -> reqwest::Response {
    server
        .post("/api/v1/reports/generate", &GenerateReportRequest::new(faculty))
        .await
        .unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Feedback Tests
// ============================================================================

#[tokio::test]
async fn test_submit_feedback_labels_comment() {
    let server = TestServer::start().await.expect("Failed to start server");
    let faculty = unique_faculty();

    let positive = submit(&server, &FeedbackRequest::new(&faculty, 5, 5, "Amazing course")).await;
    assert_eq!(positive.sentiment, "Positive");
    assert_eq!(positive.faculty_name, faculty);

    let negative = submit(&server, &FeedbackRequest::new(&faculty, 1, 1, "Awful slides")).await;
    assert_eq!(negative.sentiment, "Negative");

    let neutral = submit(&server, &FeedbackRequest::new(&faculty, 3, 3, "")).await;
    assert_eq!(neutral.sentiment, "Neutral");
    assert!(negative.id > positive.id);
}

#[tokio::test]
async fn test_submit_feedback_rejects_out_of_range_rating() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = FeedbackRequest::new(&unique_faculty(), 0, 3, "fine");

    let response = server.post("/api/v1/feedback", &request).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(error.code, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_list_feedback_filters() {
    let server = TestServer::start().await.expect("Failed to start server");
    let faculty = unique_faculty();

    submit(&server, &FeedbackRequest::new(&faculty, 4, 4, "good").by_student("Priya")).await;
    submit(&server, &FeedbackRequest::new(&faculty, 2, 2, "bad").by_student("Omar")).await;
    submit(&server, &FeedbackRequest::new("Dr. Elsewhere", 3, 3, "ok").by_student("PRIYA")).await;

    let response = server
        .get(&format!("/api/v1/feedback/faculty/{}", faculty.replace(' ', "%20")))
        .await
        .unwrap();
    let for_faculty: Vec<FeedbackResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(for_faculty.len(), 2);

    let response = server.get("/api/v1/feedback/student/priya").await.unwrap();
    let for_student: Vec<FeedbackResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(for_student.len(), 2);
    // newest first
    assert_eq!(for_student[0].faculty_name, "Dr. Elsewhere");

    let response = server.get("/api/v1/feedback").await.unwrap();
    let all: Vec<FeedbackResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(all.len(), 3);
}

// ============================================================================
// Report Tests
// ============================================================================

#[tokio::test]
async fn test_generate_report() {
    let server = TestServer::start().await.expect("Failed to start server");
    let faculty = unique_faculty();

    submit(&server, &FeedbackRequest::new(&faculty, 5, 4, "Great explanations")).await;
    submit(&server, &FeedbackRequest::new(&faculty, 3, 3, "Average")).await;
    submit(&server, &FeedbackRequest::new(&faculty, 1, 2, "Horrible grading")).await;

    let body: GenerateReportResponse = assert_json(generate(&server, &faculty).await, StatusCode::OK)
        .await
        .unwrap();
    let report = body.report;

    assert_eq!(report.faculty_name, faculty);
    assert!((report.avg_teaching_quality - 3.0).abs() < 1e-9);
    assert!((report.avg_communication_skill - 3.0).abs() < 1e-9);
    assert_eq!(report.total_feedback_count, 3);
    assert_eq!(
        (report.positive_count, report.negative_count, report.neutral_count),
        (1, 1, 1)
    );
    assert_eq!(
        report.sentiment_summary,
        "Based on 3 feedback submissions: 33.3% Positive, 33.3% Negative, 33.3% Neutral. \
         Overall teaching quality: 3.00/5, Communication skill: 3.00/5."
    );
}

#[tokio::test]
async fn test_generate_report_without_feedback() {
    let server = TestServer::start().await.expect("Failed to start server");

    let error: ErrorResponse = assert_json(generate(&server, &unique_faculty()).await, StatusCode::NOT_FOUND)
        .await
        .unwrap();
    assert_eq!(error.error, "No feedback found for this faculty");

    let response = server.get("/api/v1/reports").await.unwrap();
    let reports: Vec<ReportResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(reports.is_empty());
}

#[tokio::test]
async fn test_generate_report_name_is_case_sensitive() {
    let server = TestServer::start().await.expect("Failed to start server");
    submit(&server, &FeedbackRequest::new("Dr. Smith", 5, 5, "Helpful")).await;

    let response = generate(&server, "dr. smith").await;
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = generate(&server, "Dr. Smith").await;
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_report_history_is_cumulative() {
    let server = TestServer::start().await.expect("Failed to start server");
    let faculty = unique_faculty();
    submit(&server, &FeedbackRequest::new(&faculty, 4, 5, "Best teacher")).await;

    let first: GenerateReportResponse = assert_json(generate(&server, &faculty).await, StatusCode::OK)
        .await
        .unwrap();
    let second: GenerateReportResponse = assert_json(generate(&server, &faculty).await, StatusCode::OK)
        .await
        .unwrap();

    assert_ne!(first.report.id, second.report.id);
    assert_eq!(first.report.sentiment_summary, second.report.sentiment_summary);

    let response = server
        .get(&format!("/api/v1/reports/faculty/{}", faculty.replace(' ', "%20")))
        .await
        .unwrap();
    let history: Vec<ReportResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, second.report.id);
    assert_eq!(history[1].id, first.report.id);
}

// ============================================================================
// Sentiment Tests
// ============================================================================

#[tokio::test]
async fn test_analyze_sentiment() {
    let server = TestServer::start().await.expect("Failed to start server");

    for (comment, expected) in [
        ("Wonderful seminar", "Positive"),
        ("I hate the homework", "Negative"),
        ("Room 204", "Neutral"),
    ] {
        let response = server
            .post("/api/v1/sentiment/analyze", &serde_json::json!({ "comment": comment }))
            .await
            .unwrap();
        let body: SentimentResponse = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(body.sentiment, expected, "comment: {comment}");
    }
}

// ============================================================================
// PostgreSQL Tests
// ============================================================================

#[tokio::test]
async fn test_generate_report_on_postgres() {
    let Some(config) = postgres_config() else {
        return;
    };

    let server = TestServer::start_with_config(config)
        .await
        .expect("Failed to start server");
    let faculty = unique_faculty();

    submit(&server, &FeedbackRequest::new(&faculty, 5, 5, "Excellent")).await;

    let body: GenerateReportResponse = assert_json(generate(&server, &faculty).await, StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(body.report.total_feedback_count, 1);
    assert_eq!(body.report.positive_count, 1);
    assert_eq!(
        body.report.sentiment_summary,
        "Based on 1 feedback submissions: 100.0% Positive, 0.0% Negative, 0.0% Neutral. \
         Overall teaching quality: 5.00/5, Communication skill: 5.00/5."
    );

    let response = server.get("/health/ready").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}
