use std::num::ParseIntError;
use thiserror::Error;

/// Failures that point at a bug rather than bad input.
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored or routed id was not a valid `u64`. Answered with a generic 500.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        value: String,
        #[source]
        source: ParseIntError,
    },
}
