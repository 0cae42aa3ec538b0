//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs (camelCase JSON)
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{FeedbackRequest, GenerateReportRequest, SentimentRequest};
pub use responses::{
    FeedbackResponse, GenerateReportResponse, HealthChecks, HealthResponse, ReadinessResponse,
    ReportResponse, SentimentResponse,
};
