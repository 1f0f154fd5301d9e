//! Invoice use-case orchestrators.
//!
//! `InvoiceService` sequences the validation engine, the lifecycle state
//! machine and the persistence collaborator for the five operations:
//! create, change, submit, cancel and read (single and list). It holds
//! no mutable state of its own; every call is a self-contained sequence.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{info, instrument, warn};

use fatura_core::{Invoice, InvoiceDraft, InvoiceError, InvoiceValidator, Lifecycle};
use fatura_db::{InvoiceQuery, InvoiceRepository, StoreError};

/// Orchestrates invoice operations against a persistence collaborator.
pub struct InvoiceService<R> {
    repository: Arc<R>,
}

impl<R> Clone for InvoiceService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: InvoiceRepository> InvoiceService<R> {
    /// Creates a service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a new invoice from a candidate draft.
    ///
    /// Validation failures and duplicate numbers short-circuit before the
    /// insert; the stored aggregate is returned on success.
    #[instrument(skip(self, draft), fields(number = draft.number))]
    pub async fn create(&self, draft: &InvoiceDraft) -> Result<Invoice, InvoiceError> {
        let violations = InvoiceValidator::validate_creation(draft, Self::today());
        if !violations.is_empty() {
            warn!(count = violations.len(), "rejected invalid invoice");
            return Err(InvoiceError::Invalid(violations));
        }

        if let Some(existing) = self.find(draft.number).await? {
            return Err(InvoiceError::Duplicate(existing.number));
        }

        let invoice = Invoice::from_draft(draft);
        // The store's atomic insert backstops the lookup-then-insert window.
        self.repository
            .insert(&invoice)
            .await
            .map_err(map_store_error)?;

        info!(customer = %invoice.customer, "invoice created");
        Ok(invoice)
    }

    /// Amend an existing invoice with the mutable fields of a draft.
    ///
    /// Only invoices still in `Created` may change; the draft itself is
    /// what gets validated, and nothing is persisted on any failure path.
    #[instrument(skip(self, draft), fields(number = draft.number))]
    pub async fn change(&self, draft: &InvoiceDraft) -> Result<Invoice, InvoiceError> {
        let mut existing = self
            .find(draft.number)
            .await?
            .ok_or(InvoiceError::NotFound(draft.number))?;

        Lifecycle::ensure_changeable(existing.status)
            .map_err(|operation| Lifecycle::illegal(existing.number, operation))?;

        let violations = InvoiceValidator::validate_amendment(draft, Self::today());
        if !violations.is_empty() {
            warn!(count = violations.len(), "rejected invalid amendment");
            return Err(InvoiceError::Invalid(violations));
        }

        existing.apply_draft(draft);
        let updated = self
            .repository
            .update(&existing)
            .await
            .map_err(map_store_error)?;

        info!("invoice changed");
        Ok(updated)
    }

    /// Submit an invoice.
    ///
    /// Submitting an already-submitted invoice succeeds without change;
    /// submitting a cancelled one is an illegal operation.
    #[instrument(skip(self))]
    pub async fn submit(&self, number: i32) -> Result<Invoice, InvoiceError> {
        let mut invoice = self
            .find(number)
            .await?
            .ok_or(InvoiceError::NotFound(number))?;

        invoice.status = Lifecycle::submit(invoice.status)
            .map_err(|operation| Lifecycle::illegal(number, operation))?;

        let updated = self
            .repository
            .update(&invoice)
            .await
            .map_err(map_store_error)?;

        info!("invoice submitted");
        Ok(updated)
    }

    /// Cancel an invoice.
    ///
    /// Legal from `Created` and `Submitted`; cancelling an already
    /// cancelled invoice is an illegal operation.
    #[instrument(skip(self))]
    pub async fn cancel(&self, number: i32) -> Result<Invoice, InvoiceError> {
        let mut invoice = self
            .find(number)
            .await?
            .ok_or(InvoiceError::NotFound(number))?;

        invoice.status = Lifecycle::cancel(invoice.status)
            .map_err(|operation| Lifecycle::illegal(number, operation))?;

        let updated = self
            .repository
            .update(&invoice)
            .await
            .map_err(map_store_error)?;

        info!("invoice cancelled");
        Ok(updated)
    }

    /// Fetch a single invoice by business number.
    #[instrument(skip(self))]
    pub async fn get(&self, number: i32) -> Result<Invoice, InvoiceError> {
        self.find(number)
            .await?
            .ok_or(InvoiceError::NotFound(number))
    }

    /// List non-cancelled invoices matching the query, newest first.
    #[instrument(skip(self, query))]
    pub async fn list(&self, query: &InvoiceQuery) -> Result<Vec<Invoice>, InvoiceError> {
        self.repository.list(query).await.map_err(map_store_error)
    }

    async fn find(&self, number: i32) -> Result<Option<Invoice>, InvoiceError> {
        self.repository
            .find_by_number(number)
            .await
            .map_err(map_store_error)
    }

    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Translate collaborator failures into the engine taxonomy.
fn map_store_error(err: StoreError) -> InvoiceError {
    match err {
        StoreError::Duplicate(number) => InvoiceError::Duplicate(number),
        StoreError::NotFound(number) => InvoiceError::NotFound(number),
        StoreError::VersionMismatch { number, .. } => InvoiceError::Conflict { number },
        StoreError::Backend(message) => InvoiceError::Store(message),
    }
}
