//! Reconciliation of per-person totals against the bill.
//!
//! An item with nobody assigned is counted in the bill subtotal but in no
//! person's subtotal, and a sharer id that matches no person leaves its
//! portion unallocated. Neither case is corrected here. Both are reported so
//! that callers can decide what to do about them.

use std::collections::HashSet;

use rust_decimal::Decimal;
use tracing::warn;

use crate::models::{BillSummary, Item, Person, PersonBreakdown, PersonId, SplitWarning};

/// How the per-person subtotals compare to the bill subtotal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Sum of every person's subtotal.
    pub allocated_subtotal: Decimal,
    /// Bill subtotal minus the allocated subtotal.
    pub unallocated_subtotal: Decimal,
    /// One warning per unassigned item and per unknown sharer.
    pub warnings: Vec<SplitWarning>,
}

/// Compares a breakdown with its summary and explains any gap.
pub fn reconcile(
    people: &[Person],
    items: &[Item],
    summary: &BillSummary,
    breakdown: &[PersonBreakdown],
) -> Reconciliation {
    let allocated_subtotal: Decimal = breakdown.iter().map(|b| b.subtotal).sum();
    let unallocated_subtotal = summary.subtotal - allocated_subtotal;

    let known: HashSet<PersonId> = people.iter().map(|p| p.id).collect();
    let mut warnings = Vec::new();

    for item in items {
        if item.is_unassigned() {
            warn!(item_id = %item.id, price = %item.price, "Item has no sharers");
            warnings.push(SplitWarning {
                code: SplitWarning::UNASSIGNED_ITEM.to_string(),
                message: format!(
                    "Item '{}' ({}) is not shared by anyone; its price is in the bill total but in no one's share",
                    item.name, item.price
                ),
                severity: "medium".to_string(),
            });
            continue;
        }

        for sharer in item.shared_by.iter().filter(|id| !known.contains(id)) {
            warn!(item_id = %item.id, sharer = %sharer, "Item names an unknown sharer");
            warnings.push(SplitWarning {
                code: SplitWarning::UNKNOWN_SHARER.to_string(),
                message: format!(
                    "Item '{}' is shared by unknown person '{}'; their share of {} is not allocated",
                    item.name,
                    sharer,
                    item.share_per_person()
                ),
                severity: "low".to_string(),
            });
        }
    }

    Reconciliation {
        allocated_subtotal,
        unallocated_subtotal,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{compute_overall_summary, compute_per_person_breakdown};
    use crate::models::ItemId;
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn run(people: &[Person], items: &[Item]) -> Reconciliation {
        let summary = compute_overall_summary(items, Decimal::ZERO, Decimal::ZERO);
        let breakdown = compute_per_person_breakdown(people, items, Decimal::ZERO, Decimal::ZERO);
        reconcile(people, items, &summary, &breakdown)
    }

    fn alice() -> Person {
        Person::new(PersonId(Uuid::from_u128(1)), "Alice")
    }

    #[test]
    fn test_fully_assigned_bill_has_no_gap() {
        let a = alice();
        let items = vec![Item::new(ItemId(Uuid::from_u128(10)), "Soup", dec("9"), 1, [a.id])];

        let result = run(&[a], &items);
        assert_eq!(result.allocated_subtotal, dec("9"));
        assert_eq!(result.unallocated_subtotal, Decimal::ZERO);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_unassigned_item_gap_equals_its_price() {
        let a = alice();
        let items = vec![
            Item::new(ItemId(Uuid::from_u128(10)), "Soup", dec("9"), 1, [a.id]),
            Item::new(ItemId(Uuid::from_u128(11)), "Bread", dec("4.25"), 1, []),
        ];

        let result = run(&[a], &items);
        assert_eq!(result.unallocated_subtotal, dec("4.25"));
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].code, SplitWarning::UNASSIGNED_ITEM);
        assert!(result.warnings[0].message.contains("Bread"));
        assert_eq!(result.warnings[0].severity, "medium");
    }

    #[test]
    fn test_unknown_sharer_is_flagged() {
        let a = alice();
        let ghost = PersonId(Uuid::from_u128(99));
        let items = vec![Item::new(
            ItemId(Uuid::from_u128(10)),
            "Cake",
            dec("12"),
            1,
            [a.id, ghost],
        )];

        let result = run(&[a], &items);
        assert_eq!(result.unallocated_subtotal, dec("6"));
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].code, SplitWarning::UNKNOWN_SHARER);
        assert!(result.warnings[0].message.contains(&ghost.to_string()));
    }
}
