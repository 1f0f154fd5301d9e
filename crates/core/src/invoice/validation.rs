//! Invoice validation engine.
//!
//! Pure rule evaluation over a candidate invoice. Every rule is checked
//! independently and all violations are reported together, in rule order,
//! so a caller sees the full picture at once. The only internal
//! short-circuit is the line-number sequence walk, which stops at the
//! first gap.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::types::{InvoiceDraft, InvoiceStatus, LineItem};

/// A single human-readable description of a failed validation rule.
pub type Violation = String;

/// Which rule set applies to a candidate invoice.
///
/// Creation and amendment share most rules but differ on the date rule
/// (exactly today vs. not in the future), the declared-status rule
/// (creation only) and the item quantity bound (strictly positive vs.
/// non-negative).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// The candidate is being created.
    Creation,
    /// The candidate amends an existing invoice.
    Amendment,
}

/// Stateless validation engine for candidate invoices.
///
/// All methods are pure: the reference date is an explicit parameter so
/// callers control what "today" means.
pub struct InvoiceValidator;

impl InvoiceValidator {
    /// Validate a candidate for creation.
    #[must_use]
    pub fn validate_creation(draft: &InvoiceDraft, today: NaiveDate) -> Vec<Violation> {
        Self::validate(draft, today, ValidationMode::Creation)
    }

    /// Validate a candidate for amendment of an existing invoice.
    #[must_use]
    pub fn validate_amendment(draft: &InvoiceDraft, today: NaiveDate) -> Vec<Violation> {
        Self::validate(draft, today, ValidationMode::Amendment)
    }

    /// Run all rules over a candidate and return the violations in rule
    /// order. An empty vector means the candidate is valid.
    #[must_use]
    pub fn validate(draft: &InvoiceDraft, today: NaiveDate, mode: ValidationMode) -> Vec<Violation> {
        let mut violations = Vec::new();

        match mode {
            ValidationMode::Creation => {
                if draft.date != today {
                    violations.push("Invoice date must be today".to_string());
                }
            }
            ValidationMode::Amendment => {
                if draft.date > today {
                    violations.push("Invoice date must not be a future date".to_string());
                }
            }
        }

        if draft.number <= 0 {
            violations.push("Invoice number must be greater than 0".to_string());
        }

        if draft.amount < Decimal::ZERO {
            violations.push("Invoice amount must be greater than or equal to 0".to_string());
        } else if draft.amount != draft.item_total() {
            violations.push("Invoice amount must be equal to the sum of items amount".to_string());
        }

        if draft.customer.trim().is_empty() {
            violations.push("Invoice customer must not be empty".to_string());
        }

        if mode == ValidationMode::Creation && draft.status != InvoiceStatus::Created {
            violations.push("Invoice status must be created".to_string());
        }

        if draft.items.is_empty() {
            violations.push("Invoice must have at least one item".to_string());
        }

        Self::check_item_sequence(&draft.items, &mut violations);

        for (index, item) in draft.items.iter().enumerate() {
            Self::check_item(item, index, mode, &mut violations);
        }

        violations
    }

    /// Walk the items sorted by line number against the expected
    /// sequence `1..=N`, stopping at the first gap.
    fn check_item_sequence(items: &[LineItem], violations: &mut Vec<Violation>) {
        let mut sorted: Vec<i32> = items.iter().map(|item| item.number).collect();
        sorted.sort_unstable();

        for (position, number) in sorted.iter().enumerate() {
            let expected = i32::try_from(position).unwrap_or(i32::MAX).saturating_add(1);
            if *number != expected {
                violations.push(format!("expected item number {expected} not found"));
                break;
            }
        }
    }

    /// Per-item rules, reported against the item's original position.
    fn check_item(
        item: &LineItem,
        index: usize,
        mode: ValidationMode,
        violations: &mut Vec<Violation>,
    ) {
        if item.number <= 0 {
            violations.push(format!(
                "Item number at position {index} must be greater than 0"
            ));
        }

        if item.description.trim().is_empty() {
            violations.push(format!(
                "Item description at position {index} must not be empty"
            ));
        }

        match mode {
            ValidationMode::Creation => {
                if item.quantity <= Decimal::ZERO {
                    violations.push(format!(
                        "Item quantity at position {index} must be greater than 0"
                    ));
                }
            }
            ValidationMode::Amendment => {
                if item.quantity < Decimal::ZERO {
                    violations.push(format!(
                        "Item quantity at position {index} must be greater than or equal to 0"
                    ));
                }
            }
        }

        if item.unit_price < Decimal::ZERO {
            violations.push(format!(
                "Item unit price at position {index} must be greater than or equal to 0"
            ));
        }

        if item.amount < Decimal::ZERO {
            violations.push(format!(
                "Item amount at position {index} must be greater than or equal to 0"
            ));
        } else if item.amount != item.quantity * item.unit_price {
            violations.push(format!(
                "Item amount at position {index} must be equal to quantity x unit price"
            ));
        }
    }
}
