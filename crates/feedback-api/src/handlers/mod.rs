//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod feedback;
pub mod health;
pub mod reports;
pub mod sentiment;
