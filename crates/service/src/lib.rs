//! Use-case orchestration for Fatura.
//!
//! Each operation is a thin sequencer: (optional read) → validate →
//! lifecycle check → (optional write). Failures short-circuit before any
//! persistence call; the persistence collaborator is the only await
//! point.

pub mod dispatch;
pub mod service;

pub use dispatch::{InvoiceRequest, InvoiceResponse};
pub use service::InvoiceService;
