//! Domain entities - core business objects

mod feedback;
mod report;
mod sentiment;

pub use feedback::{FeedbackRecord, NewFeedback, RATING_MAX, RATING_MIN};
pub use report::{NewReport, Report};
pub use sentiment::{Sentiment, SentimentParseError};
