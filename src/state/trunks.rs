use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::models::{seed_trunks, NewTrunk, Trunk};

/// Session-scoped list of trunks. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrunkStore {
    trunks: Vec<Trunk>,
}

impl TrunkStore {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self {
            trunks: seed_trunks(),
        }
    }

    pub fn add(&mut self, draft: NewTrunk) -> &Trunk {
        self.add_at(draft, Utc::now())
    }

    /// Add with an id derived from `now`. The caller's status is discarded.
    pub fn add_at(&mut self, draft: NewTrunk, now: DateTime<Utc>) -> &Trunk {
        let mut millis = now.timestamp_millis();
        while self.get(&format!("trunk-{}", millis)).is_some() {
            millis += 1;
        }

        let trunk = draft.into_trunk(format!("trunk-{}", millis));
        tracing::info!("Added trunk {} ({})", trunk.id, trunk.name);
        self.trunks.push(trunk);
        &self.trunks[self.trunks.len() - 1]
    }

    /// Drop the trunk with `id`. Unknown ids are ignored.
    pub fn remove(&mut self, id: &str) {
        let before = self.trunks.len();
        self.trunks.retain(|t| t.id != id);
        if self.trunks.len() != before {
            tracing::info!("Removed trunk {}", id);
        }
    }

    pub fn get(&self, id: &str) -> Option<&Trunk> {
        self.trunks.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trunk> {
        self.trunks.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.trunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trunks.is_empty()
    }
}

/// Install the store at the application root
pub fn provide_trunk_store() -> Signal<TrunkStore> {
    use_context_provider(|| Signal::new(TrunkStore::seeded()))
}

pub fn use_trunk_store() -> Signal<TrunkStore> {
    use_context::<Signal<TrunkStore>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Transport, TrunkMode, TrunkStatus};
    use chrono::TimeZone;

    fn draft(name: &str, status: TrunkStatus) -> NewTrunk {
        NewTrunk {
            name: name.to_string(),
            region: "eu2".to_string(),
            mode: TrunkMode::Static,
            transports: vec![Transport::Udp],
            endpoint_count: 1,
            status,
            options: true,
            acl: vec![],
        }
    }

    #[test]
    fn test_add_forces_pending_and_appends() {
        let mut store = TrunkStore::seeded();
        let now = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();

        let added = store.add_at(draft("Edge", TrunkStatus::Active), now).clone();
        assert_eq!(added.id, "trunk-1700000000123");
        assert_eq!(added.status, TrunkStatus::Pending);

        assert_eq!(store.len(), 4);
        assert_eq!(store.iter().last(), Some(&added));
    }

    #[test]
    fn test_add_every_status_becomes_pending() {
        let mut store = TrunkStore::new();
        for status in [
            TrunkStatus::Pending,
            TrunkStatus::Active,
            TrunkStatus::Suspended,
            TrunkStatus::Deleted,
        ] {
            let trunk = store.add(draft("T", status));
            assert_eq!(trunk.status, TrunkStatus::Pending);
        }
    }

    #[test]
    fn test_add_same_millisecond_gets_distinct_ids() {
        let mut store = TrunkStore::new();
        let now = Utc.timestamp_millis_opt(5_000).unwrap();

        let first = store.add_at(draft("A", TrunkStatus::Pending), now).id.clone();
        let second = store.add_at(draft("B", TrunkStatus::Pending), now).id.clone();

        assert_eq!(first, "trunk-5000");
        assert_eq!(second, "trunk-5001");
    }

    #[test]
    fn test_remove() {
        let mut store = TrunkStore::seeded();
        store.remove("trunk-002");

        let ids: Vec<&str> = store.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["trunk-001", "trunk-003"]);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut store = TrunkStore::seeded();
        let before = store.clone();

        store.remove("trunk-999");
        store.remove("");

        assert_eq!(store, before);
    }
}
