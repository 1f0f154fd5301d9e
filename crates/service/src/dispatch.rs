//! Closed request dispatch.
//!
//! A request-handling collaborator hands the service one of these request
//! kinds; the mapping from request to handler is an exhaustive `match`,
//! so a missing handler is a compile error rather than a runtime lookup
//! failure.

use fatura_core::{Invoice, InvoiceDraft, InvoiceError};
use fatura_db::{InvoiceQuery, InvoiceRepository};

use crate::service::InvoiceService;

/// Every operation a caller can request from the invoice engine.
#[derive(Debug, Clone)]
pub enum InvoiceRequest {
    /// Create a new invoice from a candidate draft.
    Create(InvoiceDraft),
    /// Amend an existing invoice.
    Change(InvoiceDraft),
    /// Submit an invoice by number.
    Submit {
        /// Business number of the invoice.
        number: i32,
    },
    /// Cancel an invoice by number.
    Cancel {
        /// Business number of the invoice.
        number: i32,
    },
    /// Fetch a single invoice by number.
    Get {
        /// Business number of the invoice.
        number: i32,
    },
    /// List non-cancelled invoices matching a query.
    List(InvoiceQuery),
}

/// Successful outcome of a dispatched request.
#[derive(Debug, Clone)]
pub enum InvoiceResponse {
    /// A single invoice (create, change, submit, cancel, get).
    Invoice(Invoice),
    /// A page of invoices (list).
    Invoices(Vec<Invoice>),
}

impl InvoiceResponse {
    /// The single invoice, if this response carries one.
    #[must_use]
    pub fn invoice(&self) -> Option<&Invoice> {
        match self {
            Self::Invoice(invoice) => Some(invoice),
            Self::Invoices(_) => None,
        }
    }
}

impl<R: InvoiceRepository> InvoiceService<R> {
    /// Route a request to its handler.
    pub async fn dispatch(&self, request: InvoiceRequest) -> Result<InvoiceResponse, InvoiceError> {
        match request {
            InvoiceRequest::Create(draft) => {
                self.create(&draft).await.map(InvoiceResponse::Invoice)
            }
            InvoiceRequest::Change(draft) => {
                self.change(&draft).await.map(InvoiceResponse::Invoice)
            }
            InvoiceRequest::Submit { number } => {
                self.submit(number).await.map(InvoiceResponse::Invoice)
            }
            InvoiceRequest::Cancel { number } => {
                self.cancel(number).await.map(InvoiceResponse::Invoice)
            }
            InvoiceRequest::Get { number } => self.get(number).await.map(InvoiceResponse::Invoice),
            InvoiceRequest::List(query) => {
                self.list(&query).await.map(InvoiceResponse::Invoices)
            }
        }
    }
}
