//! Error taxonomy for the search and comparison operations.
//!
//! Empty results are never errors: filtering to zero matches or requesting a
//! page past the end of the data are normal, successful outcomes. The
//! variants here are caller contract violations, surfaced immediately and
//! never silently coerced.

use thiserror::Error;

/// Errors returned by the filter pipeline, orchestrator, and comparison
/// scorer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// A page number below 1 was requested.
    #[error("page must be at least 1, got {page}")]
    InvalidPage {
        /// The rejected page number.
        page: usize,
    },
    /// A page size below 1 was requested.
    #[error("page size must be at least 1, got {page_size}")]
    InvalidPageSize {
        /// The rejected page size.
        page_size: usize,
    },
    /// A comparison was requested over an empty listing set.
    #[error("comparison requires at least one listing")]
    EmptyComparisonSet,
    /// A filter carried a `NaN` or infinite numeric bound.
    #[error("filter value for {field} must be finite")]
    NonFiniteFilter {
        /// Name of the offending filter field.
        field: &'static str,
    },
}
