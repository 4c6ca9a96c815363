//! Aggregate roots and their pending domain events.
//!
//! An aggregate root is the only way in to the state it owns. Every
//! successful state change is recorded as a [`DomainEvent`] in a buffer that
//! belongs to the aggregate instance. Once the unit of work is complete
//! (typically after the repository commits), the caller drains that buffer
//! with [`AggregateRoot::clear_domain_events`] and hands the events to a
//! publisher.
//!
//! # Examples
//!
//! Draining events after a unit of work:
//!
//! ```rust
//! use categoria::{AggregateRoot, Category};
//!
//! fn publish_pending<A: AggregateRoot>(aggregate: &mut A) -> Vec<String> {
//!     aggregate
//!         .clear_domain_events()
//!         .iter()
//!         .map(|event| event.event_type())
//!         .collect()
//! }
//!
//! let mut category = Category::new("Livros", "", true).unwrap();
//! category.deactivate();
//!
//! assert_eq!(
//!     publish_pending(&mut category),
//!     vec!["CategoryCreated", "CategoryDeactivated"]
//! );
//! assert!(category.domain_events().is_empty());
//! ```

use crate::event::{DomainEvent, Event};

/// An entity that guards its own invariants and records what happened to it.
pub trait AggregateRoot {
    /// The identity type of the aggregate
    type Id;

    /// The event payload type this aggregate records
    type Event: Event;

    /// Returns the aggregate's identity
    fn id(&self) -> &Self::Id;

    /// Returns the events recorded since the last drain, oldest first,
    /// without removing them
    fn domain_events(&self) -> &[DomainEvent<Self::Event>];

    /// Returns every pending event in recording order and empties the buffer
    fn clear_domain_events(&mut self) -> Vec<DomainEvent<Self::Event>>;
}
