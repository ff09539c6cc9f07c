//! Error types for the movie-store crate.
//!
//! Every failure that can happen below the handler ends up as a
//! [`StoreError`]. The handler never inspects SDK error types directly;
//! it only needs a kind and a message to put in the 500 body.

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while reading movie or cast records
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Point lookup on the movie table failed
    #[error("GetItem on table {table} failed: {message}")]
    GetItem { table: String, message: String },

    /// Range query on the cast table failed
    #[error("Query on table {table} failed: {message}")]
    Query { table: String, message: String },

    /// An attribute came back in a shape we cannot turn into JSON
    #[error("Malformed attribute {attribute}: {reason}")]
    Malformed { attribute: String, reason: String },

    /// Local fixture file could not be read or had the wrong shape
    #[error("Invalid fixture {path}: {reason}")]
    Fixture { path: String, reason: String },
}

impl StoreError {
    /// Short, stable name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::GetItem { .. } => "GetItem",
            StoreError::Query { .. } => "Query",
            StoreError::Malformed { .. } => "Malformed",
            StoreError::Fixture { .. } => "Fixture",
        }
    }

    /// Structured detail used as the `error` field of a failure response.
    pub fn detail(&self) -> ErrorDetail {
        ErrorDetail {
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

/// Serializable view of a [`StoreError`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDetail {
    pub kind: &'static str,
    pub message: String,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, StoreError>;
