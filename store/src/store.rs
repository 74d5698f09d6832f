//! The in-memory keyed record store.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use optic_core::ValueMap;

/// Identifier of a record in a store.
pub type RecordId = u64;

#[derive(Debug, Default)]
struct Inner {
    records: BTreeMap<RecordId, ValueMap>,
    next_id: RecordId,
}

/// A shared in-memory store of keyed records.
///
/// Cloning yields another handle to the same records, so commit hooks
/// can capture their own handle. Like the coordinator it belongs to one
/// logical call stack and is not shareable across threads.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Rc<RefCell<Inner>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh record id without writing anything.
    pub fn allocate_id(&self) -> RecordId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        id
    }

    /// Create a record with the given fields and return its id.
    pub fn create(&self, fields: ValueMap) -> RecordId {
        let id = self.allocate_id();
        self.save(id, fields);
        id
    }

    /// Write the record with the given id, inserting or overwriting.
    pub fn save(&self, id: RecordId, fields: ValueMap) {
        let mut inner = self.inner.borrow_mut();
        // Keep allocation ahead of explicitly supplied ids.
        if id >= inner.next_id {
            inner.next_id = id + 1;
        }
        inner.records.insert(id, fields);
    }

    /// Read the record with the given id.
    pub fn get(&self, id: RecordId) -> Option<ValueMap> {
        self.inner.borrow().records.get(&id).cloned()
    }

    /// Delete the record with the given id, returning its fields.
    pub fn remove(&self, id: RecordId) -> Option<ValueMap> {
        self.inner.borrow_mut().records.remove(&id)
    }

    /// True if a record with the given id exists.
    pub fn contains(&self, id: RecordId) -> bool {
        self.inner.borrow().records.contains_key(&id)
    }

    /// All record ids, in ascending order.
    pub fn ids(&self) -> Vec<RecordId> {
        self.inner.borrow().records.keys().copied().collect()
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.inner.borrow().records.len()
    }

    /// True if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().records.is_empty()
    }
}
