//! Identifier types and id generation.
//!
//! Ids are plain newtypes over [`Uuid`]. They are never generated inside
//! the data model: whoever constructs a [`Person`](super::Person),
//! [`Item`](super::Item) or [`Event`](super::Event) supplies the id,
//! usually from an [`IdGenerator`].

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

uuid_id!(
    /// Unique identifier for a person taking part in an event.
    PersonId
);

uuid_id!(
    /// Unique identifier for an item on the bill.
    ItemId
);

uuid_id!(
    /// Unique identifier for an event (one shared bill).
    EventId
);

/// Source of fresh identifiers.
///
/// Implementations must be safe to share between request handlers.
pub trait IdGenerator: Send + Sync {
    /// Returns a UUID that has not been returned before by this generator.
    fn next_uuid(&self) -> Uuid;

    /// Returns a fresh person id.
    fn person_id(&self) -> PersonId {
        PersonId(self.next_uuid())
    }

    /// Returns a fresh item id.
    fn item_id(&self) -> ItemId {
        ItemId(self.next_uuid())
    }

    /// Returns a fresh event id.
    fn event_id(&self) -> EventId {
        EventId(self.next_uuid())
    }
}

/// Generates random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Generates `Uuid::from_u128(1)`, `Uuid::from_u128(2)`, ... in order.
///
/// Useful wherever ids must be predictable, such as tests.
///
/// ```
/// use bill_splitter::models::{IdGenerator, SequentialIdGenerator};
/// use uuid::Uuid;
///
/// let ids = SequentialIdGenerator::new();
/// assert_eq!(ids.next_uuid(), Uuid::from_u128(1));
/// assert_eq!(ids.next_uuid(), Uuid::from_u128(2));
/// ```
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator whose first id is `Uuid::from_u128(1)`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_uuid(&self) -> Uuid {
        let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        Uuid::from_u128(u128::from(n))
    }
}
