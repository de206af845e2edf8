//! Client-side record cache
//!
//! One explicit cache keyed by questionnaire id, instead of per-view copies
//! of the same records drifting apart. The one-shot CLI loads fetched lists
//! into it for rendering; upsert/remove keep the contents consistent for
//! callers that hold a cache across mutations.

use std::collections::HashMap;

use crate::schemas::Questionnaire;

/// In-session cache of questionnaire records, keyed by id.
///
/// Preserves insertion order so lists render in the order the store returned.
#[derive(Debug, Default)]
pub struct RecordCache {
    records: HashMap<String, Questionnaire>,
    order: Vec<String>,
}

impl RecordCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cache contents with a freshly fetched list
    pub fn load(&mut self, records: Vec<Questionnaire>) {
        self.records.clear();
        self.order.clear();
        for record in records {
            self.order.push(record.id.clone());
            self.records.insert(record.id.clone(), record);
        }
    }

    /// Look up a record by id
    pub fn get(&self, id: &str) -> Option<&Questionnaire> {
        self.records.get(id)
    }

    /// Insert or replace a record, keeping its position if already present
    pub fn upsert(&mut self, record: Questionnaire) {
        if !self.records.contains_key(&record.id) {
            self.order.push(record.id.clone());
        }
        self.records.insert(record.id.clone(), record);
    }

    /// Remove a record by id
    pub fn remove(&mut self, id: &str) -> Option<Questionnaire> {
        self.order.retain(|k| k != id);
        self.records.remove(id)
    }

    /// Iterate records in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Questionnaire> {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    /// Number of cached records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
