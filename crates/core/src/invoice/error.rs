//! Invoice error taxonomy.
//!
//! Every failure the engine can raise is one of these kinds; the engine
//! never wraps them in a generic failure. Collaborator failures outside
//! the taxonomy surface as [`InvoiceError::Store`], distinct from the
//! domain kinds and never silently swallowed.

use thiserror::Error;

use super::types::Operation;
use super::validation::Violation;

/// Errors raised by the invoice lifecycle and validation engine.
#[derive(Debug, Error)]
pub enum InvoiceError {
    /// Requested invoice number does not exist.
    #[error("Invoice {0} not found")]
    NotFound(i32),

    /// One or more validation rules failed; carries every violation, in
    /// rule order.
    #[error("Invoice is invalid")]
    Invalid(Vec<Violation>),

    /// Requested transition is illegal for the invoice's current status.
    #[error("Invalid operation {operation} for invoice {number}")]
    InvalidOperation {
        /// Business number of the invoice.
        number: i32,
        /// The operation that was attempted.
        operation: Operation,
    },

    /// A create targeted a number that already exists.
    #[error("Invoice number {0} already exists")]
    Duplicate(i32),

    /// Concurrent modification detected: the update was based on a stale
    /// version of the invoice.
    #[error("Invoice {number} was modified concurrently, please retry")]
    Conflict {
        /// Business number of the invoice.
        number: i32,
    },

    /// Unclassified persistence collaborator failure.
    #[error("Store error: {0}")]
    Store(String),
}

impl InvoiceError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "INVOICE_NOT_FOUND",
            Self::Invalid(_) => "INVALID_INVOICE",
            Self::InvalidOperation { .. } => "INVALID_OPERATION",
            Self::Duplicate(_) => "DUPLICATE_INVOICE",
            Self::Conflict { .. } => "CONCURRENT_MODIFICATION",
            Self::Store(_) => "STORE_ERROR",
        }
    }

    /// Returns the HTTP status code a request-handling collaborator
    /// should map this error to.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - validation and illegal-transition errors
            Self::Invalid(_) | Self::InvalidOperation { .. } => 400,

            // 404 Not Found
            Self::NotFound(_) => 404,

            // 409 Conflict - duplicates and concurrency errors
            Self::Duplicate(_) | Self::Conflict { .. } => 409,

            // 500 Internal Server Error
            Self::Store(_) => 500,
        }
    }

    /// Returns true if this error is retryable.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    /// The validation violations, if this is an [`InvoiceError::Invalid`].
    #[must_use]
    pub fn violations(&self) -> Option<&[Violation]> {
        match self {
            Self::Invalid(violations) => Some(violations),
            _ => None,
        }
    }
}
