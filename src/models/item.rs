//! Item model.
//!
//! An item is one line on the bill. Its price is the line total, with the
//! unit price and quantity already multiplied together.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ItemId, PersonId};

/// Represents a line on the bill shared by zero or more people.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier for the item.
    pub id: ItemId,
    /// The display name.
    pub name: String,
    /// The line total (unit price x quantity).
    pub price: Decimal,
    /// Number of units. Informational only; already folded into `price`.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// The people sharing this item equally.
    ///
    /// May be empty while an item is being edited. Ids that do not match any
    /// person in the event are tolerated and simply receive nothing.
    #[serde(default)]
    pub shared_by: BTreeSet<PersonId>,
}

fn default_quantity() -> u32 {
    1
}

impl Item {
    /// Creates an item from its line total.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        price: Decimal,
        quantity: u32,
        shared_by: impl IntoIterator<Item = PersonId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
            shared_by: shared_by.into_iter().collect(),
        }
    }

    /// Creates an item from a unit price, folding the quantity into `price`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bill_splitter::models::{Item, ItemId};
    /// use rust_decimal::Decimal;
    /// use uuid::Uuid;
    ///
    /// let beers = Item::from_unit_price(
    ///     ItemId(Uuid::from_u128(1)),
    ///     "Beer",
    ///     Decimal::new(650, 2),
    ///     4,
    ///     [],
    /// );
    /// assert_eq!(beers.price, Decimal::new(2600, 2));
    /// assert_eq!(beers.quantity, 4);
    /// ```
    pub fn from_unit_price(
        id: ItemId,
        name: impl Into<String>,
        unit_price: Decimal,
        quantity: u32,
        shared_by: impl IntoIterator<Item = PersonId>,
    ) -> Self {
        Self::new(
            id,
            name,
            unit_price * Decimal::from(quantity),
            quantity,
            shared_by,
        )
    }

    /// Returns the price of one unit, or the full price when quantity is zero.
    pub fn unit_price(&self) -> Decimal {
        if self.quantity == 0 {
            self.price
        } else {
            self.price / Decimal::from(self.quantity)
        }
    }

    /// Returns true if nobody is assigned to this item.
    pub fn is_unassigned(&self) -> bool {
        self.shared_by.is_empty()
    }

    /// Returns the amount each sharer owes for this item.
    ///
    /// An unassigned item yields zero rather than dividing by zero.
    pub fn share_per_person(&self) -> Decimal {
        match self.shared_by.len() {
            0 => Decimal::ZERO,
            n => self.price / Decimal::from(n),
        }
    }

    /// Returns true if `person` is one of the sharers.
    pub fn is_shared_by(&self, person: PersonId) -> bool {
        self.shared_by.contains(&person)
    }
}
