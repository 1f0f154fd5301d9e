//! In-memory reference implementation of the invoice store.
//!
//! Keyed by business number behind a single `RwLock`, so each mutation is
//! atomic: insert's duplicate check and update's version check happen
//! under one write-lock acquisition. Suitable for tests and as the
//! reference semantics a real backend has to match.

use std::collections::HashMap;

use async_trait::async_trait;
use fatura_core::{Invoice, InvoiceStatus};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::repository::{InvoiceQuery, InvoiceRepository, StoreError};

/// Invoice store backed by a process-local map.
#[derive(Debug, Default)]
pub struct MemoryInvoiceStore {
    invoices: RwLock<HashMap<i32, Invoice>>,
}

impl MemoryInvoiceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of invoices currently stored, cancelled ones included.
    pub async fn len(&self) -> usize {
        self.invoices.read().await.len()
    }

    /// Returns true if the store holds no invoices.
    pub async fn is_empty(&self) -> bool {
        self.invoices.read().await.is_empty()
    }
}

#[async_trait]
impl InvoiceRepository for MemoryInvoiceStore {
    async fn find_by_number(&self, number: i32) -> Result<Option<Invoice>, StoreError> {
        let invoices = self.invoices.read().await;
        Ok(invoices.get(&number).cloned())
    }

    async fn insert(&self, invoice: &Invoice) -> Result<(), StoreError> {
        let mut invoices = self.invoices.write().await;

        if invoices.contains_key(&invoice.number) {
            warn!(number = invoice.number, "rejected duplicate insert");
            return Err(StoreError::Duplicate(invoice.number));
        }

        invoices.insert(invoice.number, invoice.clone());
        info!(number = invoice.number, customer = %invoice.customer, "invoice stored");
        Ok(())
    }

    async fn update(&self, invoice: &Invoice) -> Result<Invoice, StoreError> {
        let mut invoices = self.invoices.write().await;

        let stored = invoices
            .get_mut(&invoice.number)
            .ok_or(StoreError::NotFound(invoice.number))?;

        if stored.version != invoice.version {
            warn!(
                number = invoice.number,
                expected = stored.version,
                actual = invoice.version,
                "rejected stale update"
            );
            return Err(StoreError::VersionMismatch {
                number: invoice.number,
                expected: stored.version,
                actual: invoice.version,
            });
        }

        let mut updated = invoice.clone();
        updated.version += 1;
        *stored = updated.clone();
        info!(
            number = invoice.number,
            status = stored.status.as_str(),
            version = stored.version,
            "invoice updated"
        );
        Ok(updated)
    }

    async fn list(&self, query: &InvoiceQuery) -> Result<Vec<Invoice>, StoreError> {
        let invoices = self.invoices.read().await;

        let mut matching: Vec<Invoice> = invoices
            .values()
            .filter(|invoice| invoice.status != InvoiceStatus::Cancelled)
            .filter(|invoice| {
                query
                    .customer_prefix()
                    .is_none_or(|prefix| invoice.customer.starts_with(prefix))
            })
            .cloned()
            .collect();

        // Newest first; ties broken by number so paging is deterministic.
        matching.sort_by(|a, b| b.date.cmp(&a.date).then(b.number.cmp(&a.number)));

        let skip = usize::try_from(query.skip).unwrap_or(usize::MAX);
        let take = usize::try_from(query.effective_take()).unwrap_or(usize::MAX);
        let page: Vec<Invoice> = matching.into_iter().skip(skip).take(take).collect();

        debug!(returned = page.len(), "listed invoices");
        Ok(page)
    }
}
