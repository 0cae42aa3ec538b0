//! Value objects - immutable types that represent domain concepts

mod record_id;

pub use record_id::{FeedbackId, IdParseError, ReportId};
