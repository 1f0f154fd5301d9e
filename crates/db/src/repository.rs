//! Repository contract for invoice persistence.
//!
//! The engine only ever asks a store for these four operations. There is
//! deliberately no delete: an invoice leaves circulation by moving to the
//! `Cancelled` status, never by physical removal.

use async_trait::async_trait;
use fatura_core::Invoice;
use thiserror::Error;

/// Hard cap on the number of invoices a single listing may return.
pub const MAX_PAGE_SIZE: u64 = 50;

/// Default page size when a caller does not specify one.
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Errors raised by a persistence collaborator.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An insert targeted a business number that already exists.
    #[error("Invoice number {0} already exists")]
    Duplicate(i32),

    /// An update targeted a business number that does not exist.
    #[error("Invoice {0} not found")]
    NotFound(i32),

    /// An update was based on a stale version of the invoice.
    #[error("Version mismatch for invoice {number}: expected {expected}, got {actual}")]
    VersionMismatch {
        /// Business number of the invoice.
        number: i32,
        /// The version currently stored.
        expected: u64,
        /// The version the caller read.
        actual: u64,
    },

    /// Backend failure outside the engine's error taxonomy.
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Filters and paging for invoice listings.
///
/// Listings always exclude `Cancelled` invoices and are ordered by date
/// descending; `take` is clamped to [`MAX_PAGE_SIZE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceQuery {
    /// Customer-name prefix filter; `None` or blank matches everyone.
    pub customer: Option<String>,
    /// Number of matching records to skip.
    pub skip: u64,
    /// Number of records to return, clamped to [`MAX_PAGE_SIZE`].
    pub take: u64,
}

impl Default for InvoiceQuery {
    fn default() -> Self {
        Self {
            customer: None,
            skip: 0,
            take: DEFAULT_PAGE_SIZE,
        }
    }
}

impl InvoiceQuery {
    /// The effective page size after clamping.
    #[must_use]
    pub fn effective_take(&self) -> u64 {
        self.take.min(MAX_PAGE_SIZE)
    }

    /// The customer prefix filter, if it is non-blank.
    #[must_use]
    pub fn customer_prefix(&self) -> Option<&str> {
        self.customer
            .as_deref()
            .map(str::trim)
            .filter(|prefix| !prefix.is_empty())
    }
}

/// Contract the engine requires from a persistence collaborator.
///
/// Implementations must make `insert` and `update` atomic with respect to
/// their own duplicate and version checks.
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
    /// Find an invoice by its business number.
    async fn find_by_number(&self, number: i32) -> Result<Option<Invoice>, StoreError>;

    /// Insert a new invoice, rejecting duplicate business numbers.
    async fn insert(&self, invoice: &Invoice) -> Result<(), StoreError>;

    /// Persist an updated invoice.
    ///
    /// The invoice's `version` must match the stored one; the store
    /// persists with `version + 1` and returns the stored copy.
    async fn update(&self, invoice: &Invoice) -> Result<Invoice, StoreError>;

    /// List non-cancelled invoices matching the query, newest first.
    async fn list(&self, query: &InvoiceQuery) -> Result<Vec<Invoice>, StoreError>;
}
