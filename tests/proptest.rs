//! Property tests for the split arithmetic.
//!
//! Bills are generated from whole-cent prices, rates with up to three decimal
//! places, and random subsets of up to six people per item. Division by the
//! number of sharers is the only inexact step, so sums that pass through it
//! are compared with a small tolerance.

use std::str::FromStr;

use proptest::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use bill_splitter::calculation::{compute_overall_summary, compute_per_person_breakdown, split_bill};
use bill_splitter::models::{Item, ItemId, Person, PersonId};

fn tolerance() -> Decimal {
    Decimal::from_str("0.000000000001").unwrap()
}

fn people(count: usize) -> Vec<Person> {
    (0..count)
        .map(|i| Person::new(PersonId(Uuid::from_u128(i as u128 + 1)), format!("P{}", i)))
        .collect()
}

/// Builds items whose sharer sets are bit masks over `people`.
fn items(people: &[Person], drafts: &[(i64, u8)]) -> Vec<Item> {
    drafts
        .iter()
        .enumerate()
        .map(|(i, (cents, mask))| {
            let shared_by = people
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1u8 << *bit) != 0)
                .map(|(_, p)| p.id);
            Item::new(
                ItemId(Uuid::from_u128(1000 + i as u128)),
                format!("Item {}", i),
                Decimal::new(*cents, 2),
                1,
                shared_by,
            )
        })
        .collect()
}

fn rate() -> impl Strategy<Value = Decimal> {
    (0i64..30_000).prop_map(|r| Decimal::new(r, 3))
}

fn item_drafts() -> impl Strategy<Value = Vec<(i64, u8)>> {
    prop::collection::vec((0i64..100_000, any::<u8>()), 0..12)
}

proptest! {
    #[test]
    fn subtotal_is_sum_of_prices(
        count in 1usize..6,
        drafts in item_drafts(),
        tax in rate(),
        tip in rate(),
    ) {
        let people = people(count);
        let items = items(&people, &drafts);
        let summary = compute_overall_summary(&items, tax, tip);

        let expected: Decimal = items.iter().map(|i| i.price).sum();
        prop_assert_eq!(summary.subtotal, expected);
        prop_assert_eq!(summary.tax_amount, summary.subtotal * tax / Decimal::ONE_HUNDRED);
        prop_assert_eq!(
            summary.tip_amount,
            (summary.subtotal + summary.tax_amount) * tip / Decimal::ONE_HUNDRED
        );
        prop_assert_eq!(
            summary.total,
            summary.subtotal + summary.tax_amount + summary.tip_amount
        );
    }

    #[test]
    fn each_person_applies_the_same_formula(
        count in 1usize..6,
        drafts in item_drafts(),
        tax in rate(),
        tip in rate(),
    ) {
        let people = people(count);
        let items = items(&people, &drafts);

        for b in compute_per_person_breakdown(&people, &items, tax, tip) {
            let shares: Decimal = b.items.iter().map(|s| s.share).sum();
            prop_assert_eq!(b.subtotal, shares);
            prop_assert_eq!(b.tax, b.subtotal * tax / Decimal::ONE_HUNDRED);
            prop_assert_eq!(b.tip, (b.subtotal + b.tax) * tip / Decimal::ONE_HUNDRED);
            prop_assert_eq!(b.total, b.subtotal + b.tax + b.tip);
        }
    }

    #[test]
    fn shares_of_an_item_sum_to_its_price(
        count in 1usize..6,
        drafts in item_drafts(),
    ) {
        let people = people(count);
        let items = items(&people, &drafts);
        let breakdown = compute_per_person_breakdown(&people, &items, Decimal::ZERO, Decimal::ZERO);

        for item in items.iter().filter(|i| !i.is_unassigned()) {
            let shares: Decimal = breakdown
                .iter()
                .flat_map(|b| b.items.iter())
                .filter(|s| s.item.id == item.id)
                .map(|s| s.share)
                .sum();
            prop_assert!((shares - item.price).abs() <= tolerance());
        }
    }

    #[test]
    fn gap_equals_unassigned_prices(
        count in 1usize..6,
        drafts in item_drafts(),
        tax in rate(),
        tip in rate(),
    ) {
        let people = people(count);
        let items = items(&people, &drafts);
        let split = split_bill(&people, &items, tax, tip);

        let unassigned: Decimal = items
            .iter()
            .filter(|i| i.is_unassigned())
            .map(|i| i.price)
            .sum();
        let allocated: Decimal = split.people.iter().map(|b| b.subtotal).sum();

        prop_assert_eq!(split.allocated_subtotal, allocated);
        prop_assert!(
            (split.allocated_subtotal + split.unallocated_subtotal - split.summary.subtotal).abs()
                <= tolerance()
        );
        prop_assert!((split.unallocated_subtotal - unassigned).abs() <= tolerance());
    }

    #[test]
    fn people_are_ordered_by_total_descending(
        count in 1usize..6,
        drafts in item_drafts(),
        tax in rate(),
        tip in rate(),
    ) {
        let people = people(count);
        let items = items(&people, &drafts);
        let breakdown = compute_per_person_breakdown(&people, &items, tax, tip);

        prop_assert_eq!(breakdown.len(), people.len());
        for pair in breakdown.windows(2) {
            prop_assert!(pair[0].total >= pair[1].total);
        }
        for b in &breakdown {
            for pair in b.items.windows(2) {
                prop_assert!(pair[0].share >= pair[1].share);
            }
        }
    }
}
