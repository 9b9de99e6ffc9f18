//! Event model.
//!
//! An event is one shared bill: the people at the table and the items they
//! ordered.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EventId, Item, ItemId, Person, PersonId};

/// A named collection of people and items sharing one bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier for the event.
    pub id: EventId,
    /// The display name (e.g., "Friday dinner").
    pub name: String,
    /// When the event takes place, as chosen by the user.
    pub date: DateTime<Utc>,
    /// When the event was recorded.
    pub created_at: DateTime<Utc>,
    /// Participants, in the order they were added.
    #[serde(default)]
    pub people: Vec<Person>,
    /// Bill items, in the order they were added.
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Event {
    /// Creates an empty event.
    pub fn new(
        id: EventId,
        name: impl Into<String>,
        date: DateTime<Utc>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            date,
            created_at,
            people: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Looks up a person by id.
    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    /// Looks up an item by id.
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Returns true if some person other than `except` is called `name`,
    /// ignoring case and surrounding whitespace.
    pub fn has_person_named(&self, name: &str, except: Option<PersonId>) -> bool {
        let wanted = name.trim().to_lowercase();
        self.people
            .iter()
            .filter(|p| Some(p.id) != except)
            .any(|p| p.name.trim().to_lowercase() == wanted)
    }
}
