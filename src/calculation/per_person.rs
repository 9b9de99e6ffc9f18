//! Per-person apportionment.
//!
//! Each item's price is divided equally among the people sharing it. A
//! person's subtotal is the sum of their shares, and tax and tip are then
//! applied to that subtotal exactly as they are to the whole bill.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{Item, ItemShare, Person, PersonBreakdown};

use super::apply_tax_and_tip;

/// Computes what each person owes.
///
/// For every person, each item whose `shared_by` contains them contributes
/// `item.price / |item.shared_by|`. Items with nobody assigned contribute to
/// nobody. Sharer ids that match no person still count toward the divisor,
/// so their portion is simply not allocated.
///
/// The result is ordered by total, highest first; people with equal totals
/// keep their input order. Within a person, item shares are ordered by
/// amount, largest first.
///
/// # Examples
///
/// ```
/// use bill_splitter::calculation::compute_per_person_breakdown;
/// use bill_splitter::models::{Item, ItemId, Person, PersonId};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
/// use uuid::Uuid;
///
/// let x = Person::new(PersonId(Uuid::from_u128(1)), "X");
/// let y = Person::new(PersonId(Uuid::from_u128(2)), "Y");
/// let items = vec![
///     Item::new(ItemId(Uuid::from_u128(10)), "Pizza", Decimal::new(30, 0), 1, [x.id, y.id]),
///     Item::new(ItemId(Uuid::from_u128(11)), "Wine", Decimal::new(20, 0), 1, [x.id]),
/// ];
///
/// let people = compute_per_person_breakdown(
///     &[y.clone(), x.clone()],
///     &items,
///     Decimal::new(10, 0),
///     Decimal::new(20, 0),
/// );
///
/// assert_eq!(people[0].person.name, "X");
/// assert_eq!(people[0].total, Decimal::from_str("46.2").unwrap());
/// assert_eq!(people[1].total, Decimal::from_str("19.8").unwrap());
/// ```
pub fn compute_per_person_breakdown(
    people: &[Person],
    items: &[Item],
    tax_rate: Decimal,
    tip_rate: Decimal,
) -> Vec<PersonBreakdown> {
    let mut breakdowns: Vec<PersonBreakdown> = people
        .iter()
        .map(|person| breakdown_for(person, items, tax_rate, tip_rate))
        .collect();

    breakdowns.sort_by(|a, b| b.total.cmp(&a.total));
    breakdowns
}

fn breakdown_for(
    person: &Person,
    items: &[Item],
    tax_rate: Decimal,
    tip_rate: Decimal,
) -> PersonBreakdown {
    let mut shares: Vec<ItemShare> = items
        .iter()
        .filter(|item| item.is_shared_by(person.id))
        .map(|item| ItemShare {
            item: item.clone(),
            unit_price: item.unit_price(),
            sharers: item.shared_by.len(),
            share: item.share_per_person(),
        })
        .collect();
    shares.sort_by(|a, b| b.share.cmp(&a.share));

    let subtotal: Decimal = shares.iter().map(|s| s.share).sum();
    let applied = apply_tax_and_tip(subtotal, tax_rate, tip_rate);

    debug!(
        person_id = %person.id,
        items = shares.len(),
        subtotal = %applied.subtotal,
        total = %applied.total,
        "Computed person breakdown"
    );

    PersonBreakdown {
        person: person.clone(),
        subtotal: applied.subtotal,
        tax: applied.tax,
        tip: applied.tip,
        total: applied.total,
        items: shares,
    }
}
