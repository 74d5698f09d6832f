//! Optic Store
//!
//! Reference adapter layer: lenses over records in an in-memory keyed
//! store, with all writes deferred to commit hooks.
//!
//! Responsibilities:
//! - Keep a shared in-memory store of keyed records
//! - Map one record's fields to/from a flat value map (RecordLens)
//! - Sync a keyed list of records, deleting omitted ones (CollectionLens)
//! - Register every save/delete as an on_commit hook so nothing touches
//!   the store until the whole transaction succeeds

mod record;
mod store;

pub use record::{CollectionLens, RecordLens};
pub use store::{MemoryStore, RecordId};
