//! Search-specific error types
//!
//! Validation failures for search queries. Both errors are raised before any
//! photo is inspected; a query that validates cleanly cannot fail.

use chrono::NaiveDate;
use thiserror::Error;

/// Search-specific errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// A tag constraint has a type without a value, or a value without a type
    #[error("Tag constraint {ordinal} is missing its {missing}")]
    IncompleteTagConstraint {
        /// Which constraint (1 or 2)
        ordinal: u8,
        /// The missing half, "type" or "value"
        missing: &'static str,
    },

    /// The 'from' date falls after the 'to' date
    #[error("Invalid date range: {from} is after {to}")]
    InvalidDateRange { from: NaiveDate, to: NaiveDate },
}
