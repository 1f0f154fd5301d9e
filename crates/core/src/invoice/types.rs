//! Invoice domain types.
//!
//! This module defines the invoice aggregate, its line items, the status
//! lifecycle and the operations a caller can request against an invoice.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Invoice status in the document lifecycle.
///
/// Invoices progress from `Created` through `Submitted`; `Cancelled`
/// is terminal. Wire representations use the ordinals 1, 2 and 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Invoice has been created and can still be amended.
    Created,
    /// Invoice has been submitted; amendments are no longer allowed.
    Submitted,
    /// Invoice has been cancelled (terminal, immutable).
    Cancelled,
}

impl InvoiceStatus {
    /// Returns the wire ordinal for this status (1, 2 or 3).
    #[must_use]
    pub fn ordinal(self) -> i32 {
        match self {
            Self::Created => 1,
            Self::Submitted => 2,
            Self::Cancelled => 3,
        }
    }

    /// Parse a status from its wire ordinal.
    ///
    /// Returns `None` for 0, negatives and anything above 3.
    #[must_use]
    pub fn from_ordinal(ordinal: i32) -> Option<Self> {
        match ordinal {
            1 => Some(Self::Created),
            2 => Some(Self::Submitted),
            3 => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Submitted => "submitted",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns true if no operation can move the invoice out of this status.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Returns true if the invoice can still be amended.
    #[must_use]
    pub fn is_editable(self) -> bool {
        matches!(self, Self::Created)
    }
}

/// Operations a caller can request against an invoice.
///
/// Used by the lifecycle state machine and carried in
/// [`InvoiceError::InvalidOperation`](super::error::InvoiceError) so a
/// rejection names the operation that was attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Create a new invoice.
    Create,
    /// Amend an existing invoice.
    Change,
    /// Submit an invoice.
    Submit,
    /// Cancel an invoice.
    Cancel,
}

impl Operation {
    /// Returns the operation name as used in error messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Change => "Change",
            Self::Submit => "Submit",
            Self::Cancel => "Cancel",
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A priced quantity line owned by exactly one invoice.
///
/// Line numbers must form the contiguous sequence `1..=N` within their
/// invoice; the validation engine enforces this together with the
/// `amount == quantity * unit_price` equality (exact, no rounding).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Position of the line within its invoice (1-based, contiguous).
    pub number: i32,
    /// Description of the billed goods or service.
    pub description: String,
    /// Billed quantity.
    pub quantity: Decimal,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Line total; must equal `quantity * unit_price` exactly.
    pub amount: Decimal,
}

/// A candidate invoice as submitted by a caller.
///
/// This is the input to the validation engine for both creation and
/// amendment. The declared `amount` is validated against the sum of the
/// item amounts but never stored; the declared `status` is only checked
/// at creation time (an amendment is governed by the *stored* status).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    /// Business number, unique across all invoices.
    pub number: i32,
    /// Document date.
    pub date: NaiveDate,
    /// Customer name.
    pub customer: String,
    /// Declared total; must equal the sum of item amounts.
    pub amount: Decimal,
    /// Declared status; must be `Created` when creating.
    pub status: InvoiceStatus,
    /// Line items.
    pub items: Vec<LineItem>,
}

impl InvoiceDraft {
    /// Sum of the item amounts.
    #[must_use]
    pub fn item_total(&self) -> Decimal {
        self.items.iter().map(|item| item.amount).sum()
    }
}

/// The stored invoice aggregate.
///
/// Identified by a surrogate `id` plus the business `number`. There is no
/// stored total: [`Invoice::amount`] always derives it from the items.
/// The `version` counter supports optimistic concurrency on updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Surrogate identifier, distinct from the business number.
    pub id: Uuid,
    /// Business number, unique across all invoices.
    pub number: i32,
    /// Document date.
    pub date: NaiveDate,
    /// Customer name.
    pub customer: String,
    /// Lifecycle status.
    pub status: InvoiceStatus,
    /// Line items, exclusively owned by this invoice.
    pub items: Vec<LineItem>,
    /// Optimistic concurrency version; incremented on every update.
    pub version: u64,
}

impl Invoice {
    /// Build a fresh aggregate from a validated creation draft.
    ///
    /// Status is forced to `Created` and the version starts at 0.
    #[must_use]
    pub fn from_draft(draft: &InvoiceDraft) -> Self {
        Self {
            id: Uuid::now_v7(),
            number: draft.number,
            date: draft.date,
            customer: draft.customer.clone(),
            status: InvoiceStatus::Created,
            items: draft.items.clone(),
            version: 0,
        }
    }

    /// Derived invoice total: the sum of the item amounts.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.items.iter().map(|item| item.amount).sum()
    }

    /// Merge the mutable fields of an amendment draft onto this aggregate.
    ///
    /// Copies date and customer, and for every existing item copies
    /// description, quantity, unit price and amount from the draft item
    /// with the same line number. Draft items with unknown numbers are
    /// ignored; existing items absent from the draft are left untouched.
    pub fn apply_draft(&mut self, draft: &InvoiceDraft) {
        self.date = draft.date;
        self.customer = draft.customer.clone();

        for existing in &mut self.items {
            if let Some(item) = draft.items.iter().find(|x| x.number == existing.number) {
                existing.description = item.description.clone();
                existing.quantity = item.quantity;
                existing.unit_price = item.unit_price;
                existing.amount = item.amount;
            }
        }
    }
}
