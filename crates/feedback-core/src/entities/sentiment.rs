//! Sentiment label attached to a feedback comment

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentiment classification of a feedback comment
///
/// Labels are produced by a classifier at submission time and stored with the
/// feedback record. Records without a recognized label resolve to `Neutral`
/// everywhere they are counted or displayed (see [`Sentiment::resolve`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

/// Error when a stored or submitted label is not one of the known sentiments
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sentiment label: {0}")]
pub struct SentimentParseError(pub String);

impl Sentiment {
    /// All labels in report order
    pub const ALL: [Sentiment; 3] = [Self::Positive, Self::Negative, Self::Neutral];

    /// Canonical label as stored and rendered
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }

    /// Resolve an optional label, treating a missing one as `Neutral`
    #[inline]
    pub fn resolve(label: Option<Self>) -> Self {
        label.unwrap_or_default()
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Accepts "Positive" as well as "POSITIVE"; older rows were written upper-cased.
impl FromStr for Sentiment {
    type Err = SentimentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SentimentParseError(s.to_string()))
    }
}
