//! Quick-search form entries and the remembered last search.
use crate::form::{FormKind, Submission};
use crate::storage::{JsonStore, KeyValueStore};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const LAST_SEARCH_KEY: &str = "flexicars.last_search";

/// Form control names of the hero search form.
pub const SEARCH_FIELDS: [&str; 4] = ["location", "pickupDate", "returnDate", "carType"];

/// Every captured search field, keyed by control name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchQuery(BTreeMap<String, String>);

impl SearchQuery {
    /// Keep the hero search controls out of a form's entries; anything else is dropped.
    #[must_use]
    pub fn from_entries(mut entries: BTreeMap<String, String>) -> Self {
        entries.retain(|name, _| SEARCH_FIELDS.contains(&name.as_str()));
        Self(entries)
    }

    #[must_use]
    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).map_or("", String::as_str)
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.values().all(|value| value.trim().is_empty())
    }

    #[must_use]
    pub fn into_submission(self) -> Submission {
        Submission::new(FormKind::Search, self.0)
    }

    pub fn remember<S: KeyValueStore>(&self, store: &JsonStore<S>) {
        store.set(LAST_SEARCH_KEY, self);
    }

    #[must_use]
    pub fn recall<S: KeyValueStore>(store: &JsonStore<S>) -> Option<Self> {
        store.get(LAST_SEARCH_KEY)
    }

    pub fn forget<S: KeyValueStore>(store: &JsonStore<S>) {
        store.remove(LAST_SEARCH_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn query() -> SearchQuery {
        let mut entries = BTreeMap::new();
        entries.insert(String::from("location"), String::from("Bengaluru"));
        entries.insert(String::from("carType"), String::from("suv"));
        SearchQuery::from_entries(entries)
    }

    #[test]
    fn remembers_and_forgets_last_search() {
        let store = JsonStore::new(MemoryStore::new());
        assert_eq!(SearchQuery::recall(&store), None);
        query().remember(&store);
        let recalled = SearchQuery::recall(&store).expect("remembered");
        assert_eq!(recalled.get("location"), "Bengaluru");
        assert_eq!(recalled.get("pickupDate"), "");
        SearchQuery::forget(&store);
        assert_eq!(SearchQuery::recall(&store), None);
    }

    #[test]
    fn submission_carries_every_field() {
        let submission = query().into_submission();
        assert_eq!(submission.kind, FormKind::Search);
        assert_eq!(submission.fields.len(), 2);
    }

    #[test]
    fn blank_queries_are_detected() {
        let mut entries = BTreeMap::new();
        entries.insert(String::from("location"), String::from("  "));
        assert!(SearchQuery::from_entries(entries).is_blank());
        assert!(!query().is_blank());
    }

    #[test]
    fn unknown_controls_are_dropped() {
        let mut entries = BTreeMap::new();
        entries.insert(String::from("location"), String::from("Goa"));
        entries.insert(String::from("csrf"), String::from("token"));
        let query = SearchQuery::from_entries(entries);
        assert_eq!(query.get("csrf"), "");
        assert_eq!(query.into_submission().fields.len(), 1);
    }
}
