//! # feedback-service
//!
//! Application layer containing report generation, feedback intake, the
//! keyword sentiment classifier, and the DTOs exchanged over HTTP.

pub mod dto;
pub mod services;

pub use dto::{
    FeedbackRequest, FeedbackResponse, GenerateReportRequest, GenerateReportResponse,
    HealthChecks, HealthResponse, ReadinessResponse, ReportResponse, SentimentRequest,
    SentimentResponse,
};
pub use services::{
    FeedbackService, KeywordClassifier, ReportService, SentimentService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
