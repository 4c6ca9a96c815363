//! The `Category` aggregate root.
//!
//! A category validates its own name, records a [`CategoryEvent`] for every
//! effective state change, and serializes to a flat dictionary.
//!
//! There are two ways to obtain a category:
//!
//! * the *fresh* path ([`Category::new`], [`Category::create_with`], or a
//!   [`CategoryBuilder`] without an id) allocates a new id and records a
//!   `Created` event;
//! * the *reconstruction* path ([`Category::restore`],
//!   [`Category::from_dict`], or a builder with an id) takes an existing id
//!   and records nothing, since no new business fact occurred.
//!
//! ```rust
//! use categoria::Category;
//!
//! let mut category = Category::builder("Eletrônicos")
//!     .description("Produtos eletrônicos em geral")
//!     .build()
//!     .unwrap();
//!
//! category.update(Some("Eletrônicos e Informática"), None).unwrap();
//!
//! let events = category.clear_domain_events();
//! let types: Vec<_> = events.iter().map(|e| e.event_type()).collect();
//! assert_eq!(types, ["CategoryCreated", "CategoryUpdated"]);
//!
//! let restored = Category::from_dict(&category.to_dict()).unwrap();
//! assert_eq!(restored, category);
//! assert_eq!(restored.name(), "Eletrônicos e Informática");
//! ```

mod events;
mod name;
mod record;

pub use events::CategoryEvent;
pub use name::{CategoryName, CategoryNameError, MAX_NAME_LEN};
pub use record::{CLASS_NAME, CategoryRecord};

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::aggregate::AggregateRoot;
use crate::error::Error;
use crate::event::{DomainEvent, Event};
use crate::id::{CategoryId, IdGenerator, RandomIds};

/// A product category. Equality and hashing use the id only.
#[derive(Debug, Serialize, Deserialize)]
#[serde(into = "CategoryRecord", try_from = "CategoryRecord")]
pub struct Category {
    id: CategoryId,
    name: CategoryName,
    description: String,
    is_active: bool,
    pending_events: Vec<DomainEvent<CategoryEvent>>,
}

impl Category {
    /// Creates a new category with a random id and records `Created`.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        is_active: bool,
    ) -> Result<Self, Error> {
        Self::create_with(&mut RandomIds, name, description, is_active)
    }

    /// Creates a new category with an id drawn from `ids` and records
    /// `Created`.
    pub fn create_with<G: IdGenerator + ?Sized>(
        ids: &mut G,
        name: impl Into<String>,
        description: impl Into<String>,
        is_active: bool,
    ) -> Result<Self, Error> {
        let name = CategoryName::try_new(name.into())?;
        let mut category = Self {
            id: ids.next_id(),
            name,
            description: description.into(),
            is_active,
            pending_events: Vec::new(),
        };

        category.record(CategoryEvent::Created {
            category_id: category.id,
            name: category.name.to_string(),
            description: category.description.clone(),
            is_active: category.is_active,
        });

        Ok(category)
    }

    /// Rebuilds a category that already exists, e.g. one loaded from
    /// storage. No event is recorded.
    pub fn restore(
        id: CategoryId,
        name: impl Into<String>,
        description: impl Into<String>,
        is_active: bool,
    ) -> Result<Self, Error> {
        let name = CategoryName::try_new(name.into())?;
        tracing::trace!(category_id = %id, "restored category");

        Ok(Self {
            id,
            name,
            description: description.into(),
            is_active,
            pending_events: Vec::new(),
        })
    }

    pub fn builder(name: impl Into<String>) -> CategoryBuilder {
        CategoryBuilder::new(name)
    }

    /// Replays a sequence of events into the state they describe.
    ///
    /// The first event must be `Created` and every event must belong to the
    /// same category. The result has no pending events.
    pub fn from_history<I>(history: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = CategoryEvent>,
    {
        let mut history = history.into_iter();

        let mut category = match history.next() {
            Some(CategoryEvent::Created {
                category_id,
                name,
                description,
                is_active,
            }) => Self::restore(category_id, name, description, is_active)?,
            Some(other) => {
                return Err(Error::InvalidHistory {
                    reason: format!("expected CategoryCreated first, got {}", other.event_type()),
                });
            }
            None => {
                return Err(Error::InvalidHistory {
                    reason: "no events".to_string(),
                });
            }
        };

        let mut replayed = 1;
        for event in history {
            category.apply(event)?;
            replayed += 1;
        }

        tracing::trace!(category_id = %category.id, replayed, "replayed category history");
        Ok(category)
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Changes the name and/or description. `None` leaves a field as it is.
    ///
    /// A supplied value counts as a change when it differs from the current
    /// one as given, before trimming. The name is validated before anything
    /// is assigned, so an error leaves the category untouched. One `Updated`
    /// event is recorded if at least one field changed; it always carries old
    /// and new values for both fields.
    pub fn update(&mut self, name: Option<&str>, description: Option<&str>) -> Result<(), Error> {
        let new_name = name.map(CategoryName::try_new).transpose()?;

        let name_changed = name.is_some_and(|n| n != self.name());
        let description_changed = description.is_some_and(|d| d != self.description);

        if !name_changed && !description_changed {
            return Ok(());
        }

        let old_name = self.name.to_string();
        let old_description = self.description.clone();

        if let Some(new_name) = new_name.filter(|_| name_changed) {
            self.name = new_name;
        }
        if let Some(description) = description.filter(|_| description_changed) {
            self.description = description.to_string();
        }

        self.record(CategoryEvent::Updated {
            category_id: self.id,
            old_name,
            new_name: self.name.to_string(),
            old_description,
            new_description: self.description.clone(),
        });

        Ok(())
    }

    pub fn activate(&mut self) {
        if !self.is_active {
            self.is_active = true;
            self.record(CategoryEvent::Activated {
                category_id: self.id,
            });
        }
    }

    pub fn deactivate(&mut self) {
        if self.is_active {
            self.is_active = false;
            self.record(CategoryEvent::Deactivated {
                category_id: self.id,
            });
        }
    }

    /// Events recorded since the last drain, oldest first.
    pub fn domain_events(&self) -> &[DomainEvent<CategoryEvent>] {
        &self.pending_events
    }

    /// Hands over every pending event in recording order and empties the
    /// buffer.
    pub fn clear_domain_events(&mut self) -> Vec<DomainEvent<CategoryEvent>> {
        let events = std::mem::take(&mut self.pending_events);
        tracing::trace!(category_id = %self.id, count = events.len(), "drained domain events");
        events
    }

    fn record(&mut self, event: CategoryEvent) {
        tracing::debug!(
            category_id = %self.id,
            event_type = %event.event_type(),
            "recorded domain event"
        );
        self.pending_events.push(DomainEvent::new(event));
    }

    fn apply(&mut self, event: CategoryEvent) -> Result<(), Error> {
        if event.category_id() != self.id {
            return Err(Error::InvalidHistory {
                reason: format!(
                    "{} belongs to category {}, not {}",
                    event.event_type(),
                    event.category_id(),
                    self.id
                ),
            });
        }

        match event {
            CategoryEvent::Created { .. } => {
                return Err(Error::InvalidHistory {
                    reason: "category created twice".to_string(),
                });
            }
            CategoryEvent::Updated {
                new_name,
                new_description,
                ..
            } => {
                self.name = CategoryName::try_new(new_name)?;
                self.description = new_description;
            }
            CategoryEvent::Activated { .. } => self.is_active = true,
            CategoryEvent::Deactivated { .. } => self.is_active = false,
        }

        Ok(())
    }
}

impl AggregateRoot for Category {
    type Id = CategoryId;
    type Event = CategoryEvent;

    fn id(&self) -> &CategoryId {
        &self.id
    }

    fn domain_events(&self) -> &[DomainEvent<CategoryEvent>] {
        Category::domain_events(self)
    }

    fn clear_domain_events(&mut self) -> Vec<DomainEvent<CategoryEvent>> {
        Category::clear_domain_events(self)
    }
}

/// Clones the state only. Pending events stay with the original, so a
/// dispatcher never sees the same event twice.
impl Clone for Category {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            is_active: self.is_active,
            pending_events: Vec::new(),
        }
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {} ({}) | ID: {}",
            self.name,
            self.description,
            if self.is_active { "Ativa" } else { "Inativa" },
            self.id
        )
    }
}

/// Collects the optional construction parameters of a [`Category`].
///
/// Defaults: empty description, active, no id. Without an id `build`
/// takes the fresh path; with one it takes the reconstruction path.
#[derive(Debug, Clone)]
pub struct CategoryBuilder {
    name: String,
    description: String,
    is_active: bool,
    id: Option<CategoryId>,
}

impl CategoryBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            is_active: true,
            id: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn id(mut self, id: CategoryId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn build(self) -> Result<Category, Error> {
        self.build_with(&mut RandomIds)
    }

    /// Like [`build`](Self::build), drawing a fresh id from `ids` when none
    /// was given.
    pub fn build_with<G: IdGenerator + ?Sized>(self, ids: &mut G) -> Result<Category, Error> {
        match self.id {
            Some(id) => Category::restore(id, self.name, self.description, self.is_active),
            None => Category::create_with(ids, self.name, self.description, self.is_active),
        }
    }
}
