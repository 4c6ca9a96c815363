use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::error::Error;

/// Identity of a category. Assigned once and never reassigned.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(Uuid);

impl CategoryId {
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CategoryId {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|source| Error::InvalidId {
                value: value.to_string(),
                source,
            })
    }
}

impl From<Uuid> for CategoryId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// Source of identifiers for newly created aggregates.
///
/// Passing a generator into the constructor keeps id allocation out of the
/// entity, so tests can pin ids down with [`SeededIds`].
pub trait IdGenerator {
    fn next_id(&mut self) -> CategoryId;
}

/// Random (v4) identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> CategoryId {
        CategoryId(Uuid::new_v4())
    }
}

/// Reproducible identifiers drawn from a seeded RNG.
#[derive(Debug, Clone)]
pub struct SeededIds {
    rng: SmallRng,
}

impl SeededIds {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl IdGenerator for SeededIds {
    fn next_id(&mut self) -> CategoryId {
        let bytes: [u8; 16] = self.rng.random();
        CategoryId(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn random_ids_do_not_repeat() {
        let mut ids = RandomIds;
        let generated = (0..100).map(|_| ids.next_id()).collect::<HashSet<_>>();

        assert_eq!(generated.len(), 100);
    }

    #[test]
    fn seeded_ids_are_reproducible() {
        let mut first = SeededIds::new(42);
        let mut second = SeededIds::new(42);

        for _ in 0..10 {
            assert_eq!(first.next_id(), second.next_id());
        }
    }

    #[test]
    fn different_seeds_produce_different_ids() {
        assert_ne!(SeededIds::new(1).next_id(), SeededIds::new(2).next_id());
    }

    #[test]
    fn seeded_ids_are_valid_v4_uuids() {
        let id = SeededIds::new(7).next_id();

        assert_eq!(id.as_uuid().get_version_num(), 4);
    }

    #[test]
    fn parses_from_its_display_form() {
        let id = RandomIds.next_id();
        let parsed: CategoryId = id.to_string().parse().unwrap();

        assert_eq!(parsed, id);
    }

    #[test]
    fn rejects_malformed_ids() {
        let result = "not-a-uuid".parse::<CategoryId>();

        assert!(matches!(result, Err(Error::InvalidId { value, .. }) if value == "not-a-uuid"));
    }
}
