//! Domain events recorded by aggregates.
//!
//! This module defines the [`Event`] trait that every event payload must
//! implement, and the [`DomainEvent`] envelope that stamps a payload with a
//! unique identifier and the moment it occurred. Events are immutable facts
//! about what has happened to an aggregate. They are queued on the aggregate
//! and handed to a dispatcher once the unit of work is done.
//!
//! # Examples
//!
//! Defining a payload and wrapping it in an envelope:
//!
//! ```rust
//! use categoria::{DomainEvent, Event};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! enum ShelfEvent {
//!     Stocked { sku: String, quantity: u32 },
//!     Emptied { sku: String },
//! }
//!
//! impl Event for ShelfEvent {
//!     fn event_type(&self) -> String {
//!         match self {
//!             ShelfEvent::Stocked { .. } => "ShelfStocked".to_string(),
//!             ShelfEvent::Emptied { .. } => "ShelfEmptied".to_string(),
//!         }
//!     }
//! }
//!
//! let event = DomainEvent::new(ShelfEvent::Emptied {
//!     sku: "A-100".to_string(),
//! });
//!
//! assert_eq!(event.event_type(), "ShelfEmptied");
//! assert!(event.occurred_on() <= chrono::Utc::now());
//!
//! let json = serde_json::to_string(&event).unwrap();
//! let decoded: DomainEvent<ShelfEvent> = serde_json::from_str(&json).unwrap();
//! assert_eq!(decoded, event);
//! ```
//!
//! # Naming
//!
//! Event types are named in the past tense after the aggregate they belong
//! to, e.g. `CategoryCreated` rather than `CreateCategory`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use uuid::Uuid;

/// Represents a domain event payload.
///
/// Payloads must be serializable so they can be handed to a publisher or
/// persisted by a collaborator, and they must report a stable type tag.
///
/// # Examples
///
/// ```rust
/// use categoria::Event;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Debug, Serialize, Deserialize)]
/// struct PriceChanged {
///     cents: u64,
/// }
///
/// impl Event for PriceChanged {
///     fn event_type(&self) -> String {
///         "PriceChanged".to_string()
///     }
/// }
///
/// assert_eq!(PriceChanged { cents: 499 }.event_type(), "PriceChanged");
/// ```
pub trait Event: Debug + for<'de> Deserialize<'de> + Serialize + Send + Sync + Sized {
    /// Returns a string identifier for the event type.
    fn event_type(&self) -> String;
}

/// An immutable envelope around an event payload.
///
/// The identifier and timestamp are assigned once, when the envelope is
/// built, and are only ever read afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainEvent<P> {
    event_id: Uuid,
    occurred_on: DateTime<Utc>,
    payload: P,
}

impl<P: Event> DomainEvent<P> {
    /// Stamps `payload` with a fresh identifier and the current time.
    pub fn new(payload: P) -> Self {
        Self::with_metadata(Uuid::new_v4(), Utc::now(), payload)
    }

    /// Builds an envelope with explicit metadata, e.g. when loading events
    /// that were stamped elsewhere.
    pub fn with_metadata(event_id: Uuid, occurred_on: DateTime<Utc>, payload: P) -> Self {
        Self {
            event_id,
            occurred_on,
            payload,
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn occurred_on(&self) -> DateTime<Utc> {
        self.occurred_on
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Consumes the envelope and returns the payload.
    pub fn into_payload(self) -> P {
        self.payload
    }

    /// Returns the payload's type tag.
    pub fn event_type(&self) -> String {
        self.payload.event_type()
    }
}
