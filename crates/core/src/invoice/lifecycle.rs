//! Invoice lifecycle state machine.
//!
//! Governs which status transitions are legal for a stored invoice.
//! Transitions are total over (status, operation): every combination is
//! explicitly decided, there is no unknown-transition case.
//!
//! Valid moves:
//! - Created → Submitted (submit)
//! - Submitted → Submitted (submit, idempotent)
//! - Created → Cancelled (cancel)
//! - Submitted → Cancelled (cancel)
//! - Created → Created (change, after re-validation)
//!
//! `Cancelled` is terminal: no operation moves an invoice out of it, and
//! cancelling an already-cancelled invoice is an error, not a no-op.

use super::error::InvoiceError;
use super::types::{InvoiceStatus, Operation};

/// Stateless state machine for invoice status transitions.
///
/// Methods take the current status and return the next status, or the
/// rejected [`Operation`] so the caller can attach the invoice number.
pub struct Lifecycle;

impl Lifecycle {
    /// Resolve a submit request.
    ///
    /// Submitting an already-submitted invoice succeeds idempotently.
    pub fn submit(current: InvoiceStatus) -> Result<InvoiceStatus, Operation> {
        match current {
            InvoiceStatus::Created | InvoiceStatus::Submitted => Ok(InvoiceStatus::Submitted),
            InvoiceStatus::Cancelled => Err(Operation::Submit),
        }
    }

    /// Resolve a cancel request.
    ///
    /// Cancelling an already-cancelled invoice is rejected.
    pub fn cancel(current: InvoiceStatus) -> Result<InvoiceStatus, Operation> {
        match current {
            InvoiceStatus::Created | InvoiceStatus::Submitted => Ok(InvoiceStatus::Cancelled),
            InvoiceStatus::Cancelled => Err(Operation::Cancel),
        }
    }

    /// Check whether an invoice in the given status may be amended.
    pub fn ensure_changeable(current: InvoiceStatus) -> Result<(), Operation> {
        match current {
            InvoiceStatus::Created => Ok(()),
            InvoiceStatus::Submitted | InvoiceStatus::Cancelled => Err(Operation::Change),
        }
    }

    /// Check if a status transition is valid, ignoring which operation
    /// requests it.
    #[must_use]
    pub fn is_valid_transition(from: InvoiceStatus, to: InvoiceStatus) -> bool {
        matches!(
            (from, to),
            (InvoiceStatus::Created, InvoiceStatus::Submitted)
                | (InvoiceStatus::Submitted, InvoiceStatus::Submitted)
                | (
                    InvoiceStatus::Created | InvoiceStatus::Submitted,
                    InvoiceStatus::Cancelled
                )
                | (InvoiceStatus::Created, InvoiceStatus::Created)
        )
    }

    /// Attach an invoice number to a rejected operation.
    #[must_use]
    pub fn illegal(number: i32, operation: Operation) -> InvoiceError {
        InvoiceError::InvalidOperation { number, operation }
    }
}
