//! Shared fixtures for the Optic integration tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use optic_core::{fields, Value};
use optic_lens::{integer, string, Lens};
use optic_store::RecordLens;

/// Shared ordered log for observing execution order across scopes and
/// commit hooks.
pub type Log = Rc<RefCell<Vec<String>>>;

/// Create a new empty log.
pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

/// Append an entry to the log.
pub fn log_entry(log: &Log, entry: impl Into<String>) {
    log.borrow_mut().push(entry.into());
}

/// Snapshot the log contents.
pub fn log_contents(log: &Log) -> Vec<String> {
    log.borrow().clone()
}

/// A sample person value: name, email and a nested address.
pub fn sample_person() -> Value {
    Value::Map(fields! {
        "name" => "Ayano",
        "email" => "ayano@naver.com",
        "address" => Value::Map(fields! {
            "street" => "Banpo",
            "number" => 12i64,
        }),
    })
}

/// Object lens over a person's name and email.
pub fn person_lens() -> Lens {
    let mut attributes = HashMap::new();
    attributes.insert("name".to_string(), string());
    attributes.insert("email".to_string(), string());
    Lens::object(attributes)
}

/// Object lens over an address's street and number.
pub fn address_lens() -> Lens {
    let mut attributes = HashMap::new();
    attributes.insert("street".to_string(), string());
    attributes.insert("number".to_string(), integer());
    Lens::object(attributes)
}

/// Record lens over address records in a store.
pub fn address_record_lens() -> RecordLens {
    let mut attributes = HashMap::new();
    attributes.insert("street".to_string(), string());
    attributes.insert("number".to_string(), integer());
    RecordLens::new(attributes)
}
