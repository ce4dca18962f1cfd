//! Record Number Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A record number error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for record number operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input is not shaped like a record number. Fix the input.
    #[display("record number is invalid: {_0}")]
    InvalidRecordNumber(#[error(not(source))] String),
    /// The record number already ends in a check digit (or a stray character
    /// where one would go). Use it as-is, or strip the last character of the
    /// numeric body first.
    #[display("record number already has a check digit: {_0}")]
    AlreadyHasCheckDigit(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // Formatting is a pure function of its input, the same
        // record number will always fail the same way.
        false
    }
}
