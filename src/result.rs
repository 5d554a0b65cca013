use crate::error::Error as HnErr;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, HnErr>;
