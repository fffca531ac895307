//! Result type aliases for LinkMe.

use crate::LinkMeError;

/// A specialized `Result` type for LinkMe operations.
pub type LinkMeResult<T> = Result<T, LinkMeError>;
