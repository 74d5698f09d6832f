//! The named-field capability consumed by attribute lenses.

use crate::{Value, ValueMap};

/// Read/write access to named fields.
///
/// Any type used as the target of an `Attribute` lens must expose its
/// fields through this trait. `ValueMap` implements it directly; adapter
/// record types implement it to make themselves lens targets.
pub trait FieldAccess {
    /// Read the field with the given name, if present.
    fn get_field(&self, name: &str) -> Option<Value>;

    /// Write the field with the given name.
    fn set_field(&mut self, name: &str, value: Value);
}

impl FieldAccess for ValueMap {
    fn get_field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }

    fn set_field(&mut self, name: &str, value: Value) {
        self.insert(name.to_string(), value);
    }
}
