//! Result models for a bill split.
//!
//! This module contains the [`BillSplit`] type and its associated structures
//! that capture all outputs of an apportionment: the overall summary, each
//! person's share, and warnings about cost that could not be allocated.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Item, Person};

/// Totals for the whole bill.
///
/// # Example
///
/// ```
/// use bill_splitter::models::BillSummary;
/// use rust_decimal::Decimal;
///
/// let summary = BillSummary {
///     subtotal: Decimal::new(50, 0),
///     tax_amount: Decimal::new(5, 0),
///     tip_amount: Decimal::new(11, 0),
///     total: Decimal::new(66, 0),
/// };
/// assert_eq!(summary.subtotal + summary.tax_amount + summary.tip_amount, summary.total);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillSummary {
    /// Sum of every item's price.
    pub subtotal: Decimal,
    /// Tax on the subtotal.
    pub tax_amount: Decimal,
    /// Tip on the tax-inclusive subtotal.
    pub tip_amount: Decimal,
    /// Subtotal plus tax plus tip.
    pub total: Decimal,
}

/// One item's contribution to a person's subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemShare {
    /// The item being shared.
    pub item: Item,
    /// Price of one unit of the item.
    pub unit_price: Decimal,
    /// How many people the item is split between.
    pub sharers: usize,
    /// This person's portion of the item's price.
    pub share: Decimal,
}

/// What one person owes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonBreakdown {
    /// The person this breakdown belongs to.
    pub person: Person,
    /// Sum of the person's item shares.
    pub subtotal: Decimal,
    /// Tax on the person's subtotal.
    pub tax: Decimal,
    /// Tip on the person's tax-inclusive subtotal.
    pub tip: Decimal,
    /// Subtotal plus tax plus tip.
    pub total: Decimal,
    /// Item shares, largest first.
    pub items: Vec<ItemShare>,
}

/// A warning raised while splitting a bill.
///
/// Warnings never change the computed figures; they explain why per-person
/// totals may not add up to the bill total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium", "high").
    pub severity: String,
}

impl SplitWarning {
    /// Item has nobody assigned; its price is in the bill but in nobody's share.
    pub const UNASSIGNED_ITEM: &'static str = "UNASSIGNED_ITEM";
    /// Item names a sharer that is not a person in the event.
    pub const UNKNOWN_SHARER: &'static str = "UNKNOWN_SHARER";
}

/// The complete result of splitting a bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillSplit {
    /// The tax rate used, as a percentage.
    pub tax_rate: Decimal,
    /// The tip rate used, as a percentage.
    pub tip_rate: Decimal,
    /// Totals for the whole bill.
    pub summary: BillSummary,
    /// Per-person breakdowns, highest total first.
    pub people: Vec<PersonBreakdown>,
    /// Sum of every person's subtotal.
    pub allocated_subtotal: Decimal,
    /// Part of the bill subtotal that no person is paying for.
    pub unallocated_subtotal: Decimal,
    /// Reconciliation warnings.
    #[serde(default)]
    pub warnings: Vec<SplitWarning>,
    /// When the split was computed.
    pub computed_at: DateTime<Utc>,
}

impl BillSplit {
    /// Returns true if every cent of the bill subtotal is assigned to someone.
    pub fn is_fully_allocated(&self) -> bool {
        self.unallocated_subtotal.is_zero()
    }
}
