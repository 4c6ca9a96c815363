use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::id::CategoryId;

/// Facts recorded by a [`Category`](super::Category).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type")]
pub enum CategoryEvent {
    /// A new category came into existence. Carries a full snapshot.
    #[serde(rename = "CategoryCreated")]
    Created {
        category_id: CategoryId,
        name: String,
        description: String,
        is_active: bool,
    },
    /// Name and/or description changed. Both fields are always reported,
    /// changed or not.
    #[serde(rename = "CategoryUpdated")]
    Updated {
        category_id: CategoryId,
        old_name: String,
        new_name: String,
        old_description: String,
        new_description: String,
    },
    #[serde(rename = "CategoryActivated")]
    Activated { category_id: CategoryId },
    #[serde(rename = "CategoryDeactivated")]
    Deactivated { category_id: CategoryId },
}

impl CategoryEvent {
    pub fn category_id(&self) -> CategoryId {
        match self {
            CategoryEvent::Created { category_id, .. }
            | CategoryEvent::Updated { category_id, .. }
            | CategoryEvent::Activated { category_id }
            | CategoryEvent::Deactivated { category_id } => *category_id,
        }
    }
}

impl Event for CategoryEvent {
    fn event_type(&self) -> String {
        match self {
            CategoryEvent::Created { .. } => "CategoryCreated".to_string(),
            CategoryEvent::Updated { .. } => "CategoryUpdated".to_string(),
            CategoryEvent::Activated { .. } => "CategoryActivated".to_string(),
            CategoryEvent::Deactivated { .. } => "CategoryDeactivated".to_string(),
        }
    }
}
