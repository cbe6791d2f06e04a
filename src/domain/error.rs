//! Error taxonomy for visitor operations.

use thiserror::Error;

/// First violated field of a visitor record.
///
/// Display strings match the messages callers have historically matched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid 'name': must be a non-empty string of letters only.")]
    InvalidName,
    #[error("Invalid 'age': must be a number.")]
    InvalidAge,
    #[error("Invalid 'dateOfVisit': must be nonempty.")]
    InvalidDateOfVisit,
    #[error("Invalid 'timeOfVisit': must be nonempty.")]
    InvalidTimeOfVisit,
    #[error("Invalid 'assistant': must be a non-empty string.")]
    InvalidAssistant,
    #[error("Invalid 'comments': must be a string.")]
    InvalidComments,
}

/// Every failure a repository operation can surface.
#[derive(Debug, Error)]
pub enum VisitorError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Visitor with {id} not found.")]
    VisitorNotFound { id: i32 },

    /// Bulk delete against an empty table.
    #[error("No visitors to delete.")]
    NoVisitors,

    /// Most-recent lookup against an empty table.
    #[error("No visitors found.")]
    NoVisitorsFound,

    #[error("Invalid column name: {column}")]
    InvalidColumn { column: String },

    /// Whatever the query executor reported, untouched.
    #[error(transparent)]
    Executor(#[from] anyhow::Error),

    #[error("unexpected row shape: {0}")]
    InvalidRow(String),
}

pub type VisitorResult<T> = Result<T, VisitorError>;
