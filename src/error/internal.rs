use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues indicating unexpected input or possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse a Discord snowflake from String
    ///
    /// Domain models carry Discord IDs as opaque strings; this occurs when one of
    /// them has to be turned back into a snowflake and is not a valid `u64`.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },
}
