//! Invoice lifecycle and validation engine.
//!
//! This module implements the business rules governing commercial invoices:
//! which candidate documents are well-formed, and which status transitions
//! are legal for a stored invoice.
//!
//! # Modules
//!
//! - `types` - Invoice aggregate, line items, statuses and operations
//! - `validation` - Rule engine producing ordered violation lists
//! - `lifecycle` - Status transition state machine
//! - `error` - Error taxonomy exposed to collaborators

pub mod error;
pub mod lifecycle;
pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use error::InvoiceError;
pub use lifecycle::Lifecycle;
pub use types::{Invoice, InvoiceDraft, InvoiceStatus, LineItem, Operation};
pub use validation::{InvoiceValidator, ValidationMode, Violation};
