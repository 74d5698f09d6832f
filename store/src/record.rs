//! Record and collection lenses over a memory store.
//!
//! These are the transactional consumers of the lens algebra: reading
//! goes straight to the store, writing updates the in-memory fields and
//! defers the store write to an on_commit hook.

use std::collections::HashMap;

use optic_core::{Value, ValueMap};
use optic_lens::{Lens, LensResult};
use optic_transaction::{Coordinator, TransactionResult};

use crate::store::{MemoryStore, RecordId};

/// Maps one record's fields to/from a flat value map.
///
/// `set` runs as a (reentrant) atomic scope and registers the record
/// save as a commit hook, so the store is only touched once the whole
/// enclosing transaction succeeds.
#[derive(Debug, Clone)]
pub struct RecordLens {
    object: Lens,
    attribute_names: Vec<String>,
}

impl RecordLens {
    /// Create a record lens over the given attribute lenses.
    pub fn new(attributes: HashMap<String, Lens>) -> Self {
        let attribute_names = attributes.keys().cloned().collect();
        Self {
            object: Lens::object(attributes),
            attribute_names,
        }
    }

    /// Read the record's declared fields, or `None` if no record with
    /// that id exists.
    pub fn get(&self, store: &MemoryStore, id: RecordId) -> LensResult<Option<ValueMap>> {
        let fields = match store.get(id) {
            Some(fields) => fields,
            None => return Ok(None),
        };
        let value = self.object.get(&Value::Map(fields))?;
        Ok(value.into_map())
    }

    /// Apply `value` to the record and defer the save.
    ///
    /// A missing record starts from all-null declared fields, so setting
    /// an unknown id creates the record at commit.
    pub fn set(
        &self,
        tx: &mut Coordinator,
        store: &MemoryStore,
        id: RecordId,
        value: Value,
    ) -> TransactionResult<ValueMap> {
        tx.run_atomic(|tx| {
            let mut fields = store.get(id).unwrap_or_default();
            for name in &self.attribute_names {
                fields.entry(name.clone()).or_insert(Value::Null);
            }

            let updated = match self.object.set(Value::Map(fields), value)? {
                Value::Map(map) => map,
                // An object lens returns the map target it was given.
                _ => unreachable!("object lens returned a non-map target"),
            };

            let hook_store = store.clone();
            let hook_fields = updated.clone();
            tx.on_commit(move || hook_store.save(id, hook_fields))?;

            Ok(updated)
        })
    }
}

/// Syncs a keyed list of records against the whole store.
///
/// `set` upserts every listed entry and registers a cleanup hook that
/// deletes the records omitted from the list.
#[derive(Debug, Clone)]
pub struct CollectionLens {
    record: RecordLens,
}

impl CollectionLens {
    /// Create a collection lens applying `record` to each entry.
    pub fn new(record: RecordLens) -> Self {
        Self { record }
    }

    /// List `(id, fields)` for every record in the store.
    pub fn get(&self, store: &MemoryStore) -> LensResult<Vec<(RecordId, ValueMap)>> {
        let mut result = Vec::new();
        for id in store.ids() {
            if let Some(fields) = self.record.get(store, id)? {
                result.push((id, fields));
            }
        }
        Ok(result)
    }

    /// Apply a keyed list of values: entries with an id update (or
    /// recreate) that record, entries without one create a fresh record.
    /// Returns the ids kept; every other record is deleted at commit.
    pub fn set(
        &self,
        tx: &mut Coordinator,
        store: &MemoryStore,
        value: Vec<(Option<RecordId>, Value)>,
    ) -> TransactionResult<Vec<RecordId>> {
        tx.run_atomic(|tx| {
            let mut existing = Vec::new();

            for (key, item) in value {
                let id = match key {
                    Some(id) => id,
                    None => store.allocate_id(),
                };
                self.record.set(tx, store, id, item)?;
                existing.push(id);
            }

            // Remove records omitted from the value.
            let hook_store = store.clone();
            let keep = existing.clone();
            tx.on_commit(move || {
                for id in hook_store.ids() {
                    if !keep.contains(&id) {
                        hook_store.remove(id);
                    }
                }
            })?;

            Ok(existing)
        })
    }
}
