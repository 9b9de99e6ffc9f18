//! In-memory event store.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    ColorAssigner, Event, EventId, IdGenerator, Item, ItemId, PaletteColorAssigner, Person,
    PersonId, UuidGenerator,
};

use super::{EventStore, NewItem, validation};

#[derive(Debug, Default)]
struct Inner {
    events: HashMap<EventId, Event>,
    /// Event ids in creation order.
    order: Vec<EventId>,
}

impl Inner {
    fn event_mut(&mut self, id: EventId) -> EngineResult<&mut Event> {
        self.events
            .get_mut(&id)
            .ok_or(EngineError::EventNotFound { id })
    }
}

/// An [`EventStore`] that keeps everything in memory.
///
/// Cloning is cheap and clones share the same data.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use bill_splitter::models::{PaletteColorAssigner, SequentialIdGenerator};
/// use bill_splitter::store::{EventStore, InMemoryEventStore};
///
/// let store = InMemoryEventStore::new(
///     Arc::new(SequentialIdGenerator::new()),
///     Arc::new(PaletteColorAssigner::default()),
/// );
/// let event = store.create_event("Dinner", None)?;
/// let alice = store.add_person(event.id, "Alice")?;
/// assert_eq!(store.get_event(event.id)?.people, vec![alice]);
/// # Ok::<(), bill_splitter::error::EngineError>(())
/// ```
#[derive(Clone)]
pub struct InMemoryEventStore {
    inner: Arc<RwLock<Inner>>,
    ids: Arc<dyn IdGenerator>,
    colors: Arc<dyn ColorAssigner>,
}

impl InMemoryEventStore {
    /// Creates an empty store using the given id and colour sources.
    pub fn new(ids: Arc<dyn IdGenerator>, colors: Arc<dyn ColorAssigner>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner::default())),
            ids,
            colors,
        }
    }
}

impl Default for InMemoryEventStore {
    fn default() -> Self {
        Self::new(
            Arc::new(UuidGenerator),
            Arc::new(PaletteColorAssigner::default()),
        )
    }
}

impl EventStore for InMemoryEventStore {
    fn create_event(&self, name: &str, date: Option<DateTime<Utc>>) -> EngineResult<Event> {
        let name = validation::event_name(name)?;
        let now = Utc::now();
        let event = Event::new(self.ids.event_id(), name, date.unwrap_or(now), now);

        let mut inner = self.inner.write();
        inner.order.push(event.id);
        inner.events.insert(event.id, event.clone());

        info!(event_id = %event.id, name = %event.name, "Created event");
        Ok(event)
    }

    fn get_event(&self, id: EventId) -> EngineResult<Event> {
        self.inner
            .read()
            .events
            .get(&id)
            .cloned()
            .ok_or(EngineError::EventNotFound { id })
    }

    fn list_events(&self) -> Vec<Event> {
        let inner = self.inner.read();
        inner
            .order
            .iter()
            .filter_map(|id| inner.events.get(id).cloned())
            .collect()
    }

    fn update_event(
        &self,
        id: EventId,
        name: &str,
        date: Option<DateTime<Utc>>,
    ) -> EngineResult<Event> {
        let name = validation::event_name(name)?;
        let mut inner = self.inner.write();
        let event = inner.event_mut(id)?;
        event.name = name;
        if let Some(date) = date {
            event.date = date;
        }
        Ok(event.clone())
    }

    fn delete_event(&self, id: EventId) -> EngineResult<()> {
        let mut inner = self.inner.write();
        if inner.events.remove(&id).is_none() {
            return Err(EngineError::EventNotFound { id });
        }
        inner.order.retain(|existing| *existing != id);

        info!(event_id = %id, "Deleted event");
        Ok(())
    }

    fn add_person(&self, event_id: EventId, name: &str) -> EngineResult<Person> {
        let name = validation::person_name(name)?;
        let mut inner = self.inner.write();
        let event = inner.event_mut(event_id)?;

        if event.has_person_named(&name, None) {
            return Err(EngineError::DuplicatePerson { name });
        }

        let color = self.colors.assign(event.people.len());
        let person = Person::new(self.ids.person_id(), name).with_color(color);
        event.people.push(person.clone());

        info!(event_id = %event_id, person_id = %person.id, "Added person");
        Ok(person)
    }

    fn rename_person(
        &self,
        event_id: EventId,
        person_id: PersonId,
        name: &str,
    ) -> EngineResult<Person> {
        let name = validation::person_name(name)?;
        let mut inner = self.inner.write();
        let event = inner.event_mut(event_id)?;

        if event.has_person_named(&name, Some(person_id)) {
            return Err(EngineError::DuplicatePerson { name });
        }

        let person = event
            .people
            .iter_mut()
            .find(|p| p.id == person_id)
            .ok_or(EngineError::PersonNotFound {
                event_id,
                id: person_id,
            })?;
        person.name = name;
        Ok(person.clone())
    }

    fn remove_person(&self, event_id: EventId, person_id: PersonId) -> EngineResult<()> {
        let mut inner = self.inner.write();
        let event = inner.event_mut(event_id)?;

        let before = event.people.len();
        event.people.retain(|p| p.id != person_id);
        if event.people.len() == before {
            return Err(EngineError::PersonNotFound {
                event_id,
                id: person_id,
            });
        }

        let items_before = event.items.len();
        event.items.retain(|item| !item.is_shared_by(person_id));

        info!(
            event_id = %event_id,
            person_id = %person_id,
            items_removed = items_before - event.items.len(),
            "Removed person"
        );
        Ok(())
    }

    fn add_item(&self, event_id: EventId, item: NewItem) -> EngineResult<Item> {
        let mut inner = self.inner.write();
        let event = inner.event_mut(event_id)?;
        let name = validation::new_item(&item, |id| event.person(id).is_some())?;

        let item = Item::from_unit_price(
            self.ids.item_id(),
            name,
            item.unit_price,
            item.quantity,
            item.shared_by,
        );
        event.items.push(item.clone());

        info!(event_id = %event_id, item_id = %item.id, price = %item.price, "Added item");
        Ok(item)
    }

    fn update_item(&self, event_id: EventId, item_id: ItemId, item: NewItem) -> EngineResult<Item> {
        let mut inner = self.inner.write();
        let event = inner.event_mut(event_id)?;
        let name = validation::new_item(&item, |id| event.person(id).is_some())?;

        let existing = event
            .items
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or(EngineError::ItemNotFound {
                event_id,
                id: item_id,
            })?;
        *existing = Item::from_unit_price(
            item_id,
            name,
            item.unit_price,
            item.quantity,
            item.shared_by,
        );
        Ok(existing.clone())
    }

    fn remove_item(&self, event_id: EventId, item_id: ItemId) -> EngineResult<()> {
        let mut inner = self.inner.write();
        let event = inner.event_mut(event_id)?;

        let before = event.items.len();
        event.items.retain(|i| i.id != item_id);
        if event.items.len() == before {
            return Err(EngineError::ItemNotFound {
                event_id,
                id: item_id,
            });
        }
        Ok(())
    }
}
