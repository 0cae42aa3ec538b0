//! # feedback-db
//!
//! Storage layer implementing the repository traits from `feedback-core`.
//!
//! ## Overview
//!
//! - PostgreSQL connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - PostgreSQL repository implementations
//! - An in-memory store implementing the same traits
//!
//! ## Usage
//!
//! ```rust,ignore
//! use feedback_db::{create_pool, PgReportRepository, PoolConfig};
//! use feedback_core::ReportRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::from_env()).await?;
//!     let reports = PgReportRepository::new(pool);
//!     let latest = reports.find_by_faculty("Dr. Smith").await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod memory;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use memory::InMemoryStore;
pub use pool::{create_pool, create_pool_from_env, run_migrations, PgPool, PoolConfig};
pub use repositories::{PgFeedbackRepository, PgReportRepository};
