//! Core business logic for Fatura.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and the lifecycle state machine live here.
//!
//! # Modules
//!
//! - `invoice` - Invoice aggregate, validation engine and lifecycle state machine

pub mod invoice;

pub use invoice::error::InvoiceError;
pub use invoice::lifecycle::Lifecycle;
pub use invoice::types::{Invoice, InvoiceDraft, InvoiceStatus, LineItem, Operation};
pub use invoice::validation::{InvoiceValidator, ValidationMode, Violation};
