//! Event storage.
//!
//! The [`EventStore`] trait is the create/read/update/delete surface for
//! events, their people and their items. Handlers and other callers depend
//! on the trait; [`InMemoryEventStore`] is the implementation used by the
//! service, holding everything in memory for the lifetime of the process.

mod memory;
pub(crate) mod validation;

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{Event, EventId, Item, ItemId, Person, PersonId};

pub use memory::InMemoryEventStore;
pub use validation::MAX_LINE_PRICE;

/// The fields needed to create or replace an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    /// The display name.
    pub name: String,
    /// Price of a single unit.
    pub unit_price: Decimal,
    /// Number of units.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// People sharing the item. May be empty.
    #[serde(default)]
    pub shared_by: BTreeSet<PersonId>,
}

fn default_quantity() -> u32 {
    1
}

/// Create/read/update/delete operations on events.
///
/// Every mutating operation validates its input and returns the updated
/// record. Names are trimmed before they are stored.
pub trait EventStore: Send + Sync {
    /// Creates an empty event held on `date`, or now when no date is given.
    fn create_event(&self, name: &str, date: Option<DateTime<Utc>>) -> EngineResult<Event>;

    /// Returns a snapshot of one event.
    fn get_event(&self, id: EventId) -> EngineResult<Event>;

    /// Returns snapshots of all events, oldest first.
    fn list_events(&self) -> Vec<Event>;

    /// Renames an event, moving it to `date` when one is given.
    fn update_event(
        &self,
        id: EventId,
        name: &str,
        date: Option<DateTime<Utc>>,
    ) -> EngineResult<Event>;

    /// Deletes an event and everything in it.
    fn delete_event(&self, id: EventId) -> EngineResult<()>;

    /// Adds a person. Names must be unique within the event, ignoring case.
    fn add_person(&self, event_id: EventId, name: &str) -> EngineResult<Person>;

    /// Renames a person.
    fn rename_person(&self, event_id: EventId, person_id: PersonId, name: &str)
    -> EngineResult<Person>;

    /// Removes a person together with every item they were sharing.
    fn remove_person(&self, event_id: EventId, person_id: PersonId) -> EngineResult<()>;

    /// Adds an item. Every sharer must be a person in the event.
    fn add_item(&self, event_id: EventId, item: NewItem) -> EngineResult<Item>;

    /// Replaces an item's fields, keeping its id.
    fn update_item(&self, event_id: EventId, item_id: ItemId, item: NewItem)
    -> EngineResult<Item>;

    /// Removes an item.
    fn remove_item(&self, event_id: EventId, item_id: ItemId) -> EngineResult<()>;
}
