//! Bill apportionment logic.
//!
//! This module contains the pure functions that turn an event's people and
//! items, plus a tax rate and a tip rate, into an overall bill summary and
//! per-person breakdowns. Nothing here mutates its inputs, performs I/O or
//! fails: an item with nobody assigned simply contributes to nobody.

mod per_person;
mod reconciliation;
mod summary;
mod tax_tip;

use chrono::Utc;
use rust_decimal::Decimal;

use crate::models::{BillSplit, Item, Person};

pub use per_person::compute_per_person_breakdown;
pub use reconciliation::{Reconciliation, reconcile};
pub use summary::compute_overall_summary;
pub use tax_tip::{TaxTipResult, apply_tax_and_tip, percent_of};

/// Splits a bill: summary, per-person breakdown and reconciliation in one call.
///
/// # Examples
///
/// ```
/// use bill_splitter::calculation::split_bill;
/// use bill_splitter::models::{Item, ItemId, Person, PersonId};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let ann = Person::new(PersonId(Uuid::from_u128(1)), "Ann");
/// let items = vec![
///     Item::new(ItemId(Uuid::from_u128(10)), "Curry", Decimal::new(16, 0), 1, [ann.id]),
///     Item::new(ItemId(Uuid::from_u128(11)), "Naan", Decimal::new(4, 0), 1, []),
/// ];
///
/// let split = split_bill(&[ann], &items, Decimal::ZERO, Decimal::ZERO);
/// assert_eq!(split.summary.subtotal, Decimal::new(20, 0));
/// assert_eq!(split.unallocated_subtotal, Decimal::new(4, 0));
/// assert_eq!(split.warnings.len(), 1);
/// ```
pub fn split_bill(
    people: &[Person],
    items: &[Item],
    tax_rate: Decimal,
    tip_rate: Decimal,
) -> BillSplit {
    let summary = compute_overall_summary(items, tax_rate, tip_rate);
    let breakdown = compute_per_person_breakdown(people, items, tax_rate, tip_rate);
    let reconciliation = reconcile(people, items, &summary, &breakdown);

    BillSplit {
        tax_rate,
        tip_rate,
        summary,
        people: breakdown,
        allocated_subtotal: reconciliation.allocated_subtotal,
        unallocated_subtotal: reconciliation.unallocated_subtotal,
        warnings: reconciliation.warnings,
        computed_at: Utc::now(),
    }
}
