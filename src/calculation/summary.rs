//! Overall bill summary.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{BillSummary, Item};

use super::apply_tax_and_tip;

/// Computes the totals for the whole bill.
///
/// The subtotal is the sum of every item's price, whether or not anybody is
/// assigned to the item. Tax is applied to the subtotal and tip to the
/// tax-inclusive amount.
///
/// # Examples
///
/// ```
/// use bill_splitter::calculation::compute_overall_summary;
/// use bill_splitter::models::{Item, ItemId};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let items = vec![
///     Item::new(ItemId(Uuid::from_u128(1)), "Pizza", Decimal::new(30, 0), 1, []),
///     Item::new(ItemId(Uuid::from_u128(2)), "Salad", Decimal::new(20, 0), 1, []),
/// ];
///
/// let summary = compute_overall_summary(&items, Decimal::new(10, 0), Decimal::new(20, 0));
/// assert_eq!(summary.subtotal, Decimal::new(50, 0));
/// assert_eq!(summary.tax_amount, Decimal::new(5, 0));
/// assert_eq!(summary.tip_amount, Decimal::new(11, 0));
/// assert_eq!(summary.total, Decimal::new(66, 0));
/// ```
pub fn compute_overall_summary(items: &[Item], tax_rate: Decimal, tip_rate: Decimal) -> BillSummary {
    let subtotal: Decimal = items.iter().map(|item| item.price).sum();
    let applied = apply_tax_and_tip(subtotal, tax_rate, tip_rate);

    debug!(
        items = items.len(),
        subtotal = %applied.subtotal,
        total = %applied.total,
        "Computed bill summary"
    );

    BillSummary {
        subtotal: applied.subtotal,
        tax_amount: applied.tax,
        tip_amount: applied.tip,
        total: applied.total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemId, PersonId};
    use std::str::FromStr;
    use uuid::Uuid;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn item(n: u128, price: &str, shared_by: &[u128]) -> Item {
        Item::new(
            ItemId(Uuid::from_u128(n)),
            format!("item_{}", n),
            dec(price),
            1,
            shared_by.iter().map(|p| PersonId(Uuid::from_u128(*p))),
        )
    }

    #[test]
    fn test_empty_bill_is_all_zero() {
        let summary = compute_overall_summary(&[], dec("10"), dec("20"));
        assert_eq!(summary.subtotal, Decimal::ZERO);
        assert_eq!(summary.total, Decimal::ZERO);
    }

    #[test]
    fn test_unassigned_items_still_count_toward_subtotal() {
        let items = vec![item(1, "12.50", &[1]), item(2, "7.50", &[])];
        let summary = compute_overall_summary(&items, Decimal::ZERO, Decimal::ZERO);
        assert_eq!(summary.subtotal, dec("20.00"));
        assert_eq!(summary.total, dec("20.00"));
    }

    #[test]
    fn test_summary_matches_worked_example() {
        let items = vec![item(1, "30", &[1, 2]), item(2, "20", &[1])];
        let summary = compute_overall_summary(&items, dec("10"), dec("20"));
        assert_eq!(summary.subtotal, dec("50"));
        assert_eq!(summary.tax_amount, dec("5"));
        assert_eq!(summary.tip_amount, dec("11"));
        assert_eq!(summary.total, dec("66"));
    }

    #[test]
    fn test_summary_does_not_depend_on_sharers() {
        let shared = vec![item(1, "30", &[1, 2, 3])];
        let solo = vec![item(1, "30", &[1])];
        assert_eq!(
            compute_overall_summary(&shared, dec("8"), dec("15")),
            compute_overall_summary(&solo, dec("8"), dec("15"))
        );
    }
}
