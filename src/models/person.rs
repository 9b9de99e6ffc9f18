//! Person model.
//!
//! A person is one participant sharing a bill.

use serde::{Deserialize, Serialize};

use super::{Color, PersonId};

/// Represents a participant in an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier for the person.
    pub id: PersonId,
    /// The display name.
    pub name: String,
    /// Display colour, if one has been assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Person {
    /// Creates a person without a display colour.
    ///
    /// # Examples
    ///
    /// ```
    /// use bill_splitter::models::{Person, PersonId};
    /// use uuid::Uuid;
    ///
    /// let alice = Person::new(PersonId(Uuid::from_u128(1)), "Alice");
    /// assert_eq!(alice.name, "Alice");
    /// assert!(alice.color.is_none());
    /// ```
    pub fn new(id: PersonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: None,
        }
    }

    /// Returns the person with `color` set.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}
