//! Property-based tests for invoice validation rules.
//!
//! Exercises the amount equalities, the contiguous line-number
//! requirement and the collect-all reporting behavior across generated
//! candidate invoices.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::types::{InvoiceDraft, InvoiceStatus, LineItem};
use super::validation::{InvoiceValidator, ValidationMode};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 29).unwrap()
}

/// Strategy to generate a positive quantity (0.01 to 10,000.00).
fn positive_quantity() -> impl Strategy<Value = Decimal> {
    (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a non-negative unit price (0.00 to 100,000.00).
fn unit_price() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a fully consistent creation draft with 1 to 8
/// items numbered `1..=N`.
fn valid_draft() -> impl Strategy<Value = InvoiceDraft> {
    (
        prop::collection::vec((positive_quantity(), unit_price()), 1..=8),
        1i32..10_000,
    )
        .prop_map(|(lines, number)| {
            let items: Vec<LineItem> = lines
                .into_iter()
                .enumerate()
                .map(|(position, (quantity, price))| {
                    let item_number = i32::try_from(position).unwrap() + 1;
                    LineItem {
                        number: item_number,
                        description: format!("line {item_number}"),
                        quantity,
                        unit_price: price,
                        amount: quantity * price,
                    }
                })
                .collect();
            let amount = items.iter().map(|item| item.amount).sum();
            InvoiceDraft {
                number,
                date: today(),
                customer: "Ana".to_string(),
                amount,
                status: InvoiceStatus::Created,
                items,
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// *For any* consistent draft, creation validation reports nothing.
    #[test]
    fn prop_consistent_draft_is_valid(draft in valid_draft()) {
        let violations = InvoiceValidator::validate_creation(&draft, today());
        prop_assert!(violations.is_empty(), "unexpected violations: {violations:?}");
    }

    /// *For any* draft whose declared amount diverges from the item sum,
    /// validation reports the amount-mismatch rule.
    #[test]
    fn prop_amount_mismatch_rejected(
        draft in valid_draft(),
        delta_cents in 1i64..1_000_000,
    ) {
        let mut draft = draft;
        draft.amount += Decimal::new(delta_cents, 2);

        let violations = InvoiceValidator::validate_creation(&draft, today());
        prop_assert!(violations.contains(
            &"Invoice amount must be equal to the sum of items amount".to_string()
        ));
    }

    /// *For any* item whose amount diverges from quantity x unit price
    /// (while staying non-negative), validation reports the product rule
    /// against the item's position.
    #[test]
    fn prop_item_product_mismatch_rejected(
        draft in valid_draft(),
        delta_cents in 1i64..1_000_000,
    ) {
        let mut draft = draft;
        let index = draft.items.len() - 1;
        draft.items[index].amount += Decimal::new(delta_cents, 2);
        // Keep the invoice-level sum consistent so only the item rule fires.
        draft.amount += Decimal::new(delta_cents, 2);

        let violations = InvoiceValidator::validate_creation(&draft, today());
        prop_assert_eq!(violations, vec![format!(
            "Item amount at position {index} must be equal to quantity x unit price"
        )]);
    }

    /// *For any* permutation of the item order, the sequence check only
    /// cares about the sorted numbers: a shuffled but gap-free draft is
    /// still valid.
    #[test]
    fn prop_item_order_is_irrelevant(draft in valid_draft(), seed in any::<u64>()) {
        let mut draft = draft;
        // Cheap deterministic shuffle.
        let len = draft.items.len();
        for i in 0..len {
            #[allow(clippy::cast_possible_truncation)]
            let j = (seed.wrapping_mul(31).wrapping_add(i as u64) % len as u64) as usize;
            draft.items.swap(i, j);
        }

        let violations = InvoiceValidator::validate_creation(&draft, today());
        prop_assert!(violations.is_empty());
    }

    /// *For any* draft with a line number bumped past the end, the
    /// sequence walk reports the first missing number and nothing later.
    #[test]
    fn prop_gap_reports_first_missing_number(draft in valid_draft()) {
        let mut draft = draft;
        let last = draft.items.len() - 1;
        let expected = draft.items[last].number;
        draft.items[last].number += 10;

        let violations = InvoiceValidator::validate_creation(&draft, today());
        let needle = format!("expected item number {expected} not found");
        prop_assert!(violations.contains(&needle));
        let hits = violations.iter().filter(|v| v.contains("not found")).count();
        prop_assert_eq!(hits, 1);
    }

    /// *For any* non-future date, amendment validation accepts it while
    /// creation validation only accepts today.
    #[test]
    fn prop_date_rules_creation_vs_amendment(
        draft in valid_draft(),
        days_back in 1i64..3650,
    ) {
        let mut draft = draft;
        draft.date = today() - chrono::Duration::days(days_back);

        let creation = InvoiceValidator::validate(&draft, today(), ValidationMode::Creation);
        prop_assert!(creation.contains(&"Invoice date must be today".to_string()));

        let amendment = InvoiceValidator::validate(&draft, today(), ValidationMode::Amendment);
        prop_assert!(amendment.is_empty(), "unexpected violations: {amendment:?}");
    }

    /// *For any* negative declared amount, the amount rule fires and the
    /// sum comparison is skipped.
    #[test]
    fn prop_negative_amount_skips_sum_rule(
        draft in valid_draft(),
        cents in 1i64..1_000_000,
    ) {
        let mut draft = draft;
        draft.amount = Decimal::new(-cents, 2);

        let violations = InvoiceValidator::validate_creation(&draft, today());
        prop_assert!(violations.contains(
            &"Invoice amount must be greater than or equal to 0".to_string()
        ));
        prop_assert!(!violations.contains(
            &"Invoice amount must be equal to the sum of items amount".to_string()
        ));
    }
}
