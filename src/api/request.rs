//! Request types for the bill splitter API.
//!
//! This module defines the JSON request bodies and query strings accepted by
//! the HTTP endpoints.

use std::collections::{BTreeSet, HashSet};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Item, ItemId, Person, PersonId};
use crate::store::{NewItem, validation};

/// Request body for the stateless `/split` endpoint.
///
/// The caller supplies ids for people and items; nothing is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitRequest {
    /// The people sharing the bill.
    #[serde(default)]
    pub people: Vec<PersonRequest>,
    /// The items on the bill.
    #[serde(default)]
    pub items: Vec<ItemRequest>,
    /// Tax rate in percent. Falls back to the configured default.
    #[serde(default)]
    pub tax_rate: Option<Decimal>,
    /// Tip rate in percent. Falls back to the configured default.
    #[serde(default)]
    pub tip_rate: Option<Decimal>,
}

/// A person in a split request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonRequest {
    /// Caller-chosen identifier.
    pub id: PersonId,
    /// The display name.
    pub name: String,
}

/// An item in a split request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRequest {
    /// Caller-chosen identifier.
    pub id: ItemId,
    /// The display name.
    pub name: String,
    /// Price of a single unit.
    pub unit_price: Decimal,
    /// Number of units.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    /// Ids of the people sharing the item.
    #[serde(default)]
    pub shared_by: BTreeSet<PersonId>,
}

fn default_quantity() -> u32 {
    1
}

/// Request body for creating or updating an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRequest {
    /// The event name.
    pub name: String,
    /// When the event takes place. Defaults to now on create and is left
    /// unchanged on update.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// Request body for endpoints that only take a name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameRequest {
    /// The new name.
    pub name: String,
}

/// Query string for `GET /events/:event_id/split`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RatesQuery {
    /// Tax rate in percent.
    #[serde(default)]
    pub tax_rate: Option<Decimal>,
    /// Tip rate in percent.
    #[serde(default)]
    pub tip_rate: Option<Decimal>,
}

impl SplitRequest {
    /// Checks the people and items the way the event store would and
    /// converts them for the engine.
    ///
    /// Person and item ids must be unique, person names must be non-blank
    /// and unique ignoring case, and every item must pass the store's item
    /// checks, including that each sharer is one of the listed people.
    pub fn into_bill(self) -> EngineResult<(Vec<Person>, Vec<Item>)> {
        let mut person_ids = HashSet::new();
        let mut person_names = HashSet::new();
        let mut people = Vec::with_capacity(self.people.len());

        for person in self.people {
            let name = validation::person_name(&person.name)?;
            if !person_ids.insert(person.id) {
                return Err(EngineError::InvalidPerson {
                    field: "id".to_string(),
                    message: format!("person '{}' is listed more than once", person.id),
                });
            }
            if !person_names.insert(name.to_lowercase()) {
                return Err(EngineError::DuplicatePerson { name });
            }
            people.push(Person::new(person.id, name));
        }

        let mut item_ids = HashSet::new();
        let mut items = Vec::with_capacity(self.items.len());

        for item in self.items {
            if !item_ids.insert(item.id) {
                return Err(EngineError::InvalidItem {
                    field: "id".to_string(),
                    message: format!("item '{}' is listed more than once", item.id),
                });
            }
            let draft = NewItem {
                name: item.name,
                unit_price: item.unit_price,
                quantity: item.quantity,
                shared_by: item.shared_by,
            };
            let name = validation::new_item(&draft, |id| person_ids.contains(&id))?;
            items.push(Item::from_unit_price(
                item.id,
                name,
                draft.unit_price,
                draft.quantity,
                draft.shared_by,
            ));
        }

        Ok((people, items))
    }
}
