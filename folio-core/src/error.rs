//! Error types for chart selection state.

use thiserror::Error;

/// Rejected inputs to the selection state manager.
///
/// Both variants are local validation failures: the operation that returns
/// them leaves all state untouched, and the UI glue decides whether to log,
/// ignore, or display them. Neither should occur while callers stick to the
/// page's fixed button set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FolioError {
    /// Project id is not a key in the dataset store
    #[error("Unknown project: {0}")]
    UnknownProject(String),

    /// Series name is not one of the recognized series
    #[error("Unknown series: {0}")]
    UnknownSeries(String),
}

/// Type alias for Results using FolioError
pub type Result<T> = std::result::Result<T, FolioError>;
