//! The lens type and its composition algebra.

use std::collections::HashMap;
use std::sync::Arc;

use optic_core::{FieldAccess, Value, ValueKind, ValueMap};

use crate::error::{LensError, LensResult};

/// A bidirectional accessor over the value graph.
///
/// A lens pairs a side-effect-free `get` with a `set` that returns the
/// updated target. Lenses are immutable values; composition shares its
/// operands, so a lens can appear in several compositions at once.
///
/// The round-trip law holds for every variant: after a successful
/// `set(target, v)`, `get` on the returned target yields `v`.
#[derive(Debug, Clone)]
pub enum Lens {
    /// Leaf over one named field of a map target.
    Attribute(String),
    /// `inner` applied to the focus of `outer`.
    Composed(Arc<Lens>, Arc<Lens>),
    /// A fixed set of named attributes viewed as one flat map.
    Object(HashMap<String, Lens>),
    /// Identity pass-through when the target or value is null.
    Maybe(Arc<Lens>),
    /// Identity that admits only values of one exact kind.
    Typed(ValueKind),
}

/// Compose two lenses: `get` drills through `outer` then `inner`,
/// `set` updates the inner focus and writes it back through `outer`.
///
/// Composition is associative: `compose(compose(a, b), c)` and
/// `compose(a, compose(b, c))` behave identically.
pub fn compose(outer: Lens, inner: Lens) -> Lens {
    Lens::Composed(Arc::new(outer), Arc::new(inner))
}

impl Lens {
    /// Lens over the field `name` of a map target.
    pub fn attribute(name: impl Into<String>) -> Self {
        Lens::Attribute(name.into())
    }

    /// Lens viewing the given attributes of a map target as one flat map.
    pub fn object(attributes: HashMap<String, Lens>) -> Self {
        Lens::Object(attributes)
    }

    /// Make `base` total over optional targets and values.
    pub fn maybe(base: Lens) -> Self {
        Lens::Maybe(Arc::new(base))
    }

    /// Identity lens accepting only values of the given kind.
    pub fn typed(expected: ValueKind) -> Self {
        Lens::Typed(expected)
    }

    /// Builder form of [`compose`]: `self` is the outer lens.
    pub fn then(self, inner: Lens) -> Self {
        compose(self, inner)
    }

    /// Read the focused value out of `target`. Never mutates `target`.
    pub fn get(&self, target: &Value) -> LensResult<Value> {
        match self {
            Lens::Attribute(name) => {
                let map = target
                    .as_map()
                    .ok_or_else(|| LensError::expected_map(target.kind()))?;
                map.get_field(name)
                    .ok_or_else(|| LensError::missing_field(name.clone()))
            }
            Lens::Composed(outer, inner) => {
                let focus = outer.get(target)?;
                inner.get(&focus)
            }
            Lens::Object(attributes) => {
                let mut result = ValueMap::new();
                for (name, lens) in attributes {
                    let field = Lens::Attribute(name.clone()).get(target)?;
                    result.insert(name.clone(), lens.get(&field)?);
                }
                Ok(Value::Map(result))
            }
            Lens::Maybe(base) => {
                if target.is_null() {
                    Ok(Value::Null)
                } else {
                    base.get(target)
                }
            }
            Lens::Typed(_) => Ok(target.clone()),
        }
    }

    /// Write `value` into `target`, returning the updated target.
    pub fn set(&self, target: Value, value: Value) -> LensResult<Value> {
        match self {
            Lens::Attribute(name) => {
                let mut map = match target {
                    Value::Map(map) => map,
                    other => return Err(LensError::expected_map(other.kind())),
                };
                map.set_field(name, value);
                Ok(Value::Map(map))
            }
            Lens::Composed(outer, inner) => {
                // Read the pre-update focus first so an inner failure
                // leaves the target untouched.
                let focus = outer.get(&target)?;
                let focus = inner.set(focus, value)?;
                outer.set(target, focus)
            }
            Lens::Object(attributes) => {
                let value = match value {
                    Value::Map(map) => map,
                    other => return Err(LensError::expected_map(other.kind())),
                };
                check_key_set(attributes, &value)?;

                let mut target = target;
                for (name, lens) in attributes {
                    let pointer = Lens::Attribute(name.clone());
                    let field = pointer.get(&target)?;
                    let field = lens.set(field, value[name.as_str()].clone())?;
                    target = pointer.set(target, field)?;
                }
                Ok(target)
            }
            Lens::Maybe(base) => {
                if value.is_null() {
                    Ok(Value::Null)
                } else if target.is_null() {
                    Ok(value)
                } else {
                    base.set(target, value)
                }
            }
            Lens::Typed(expected) => {
                if value.kind() == *expected {
                    Ok(value)
                } else {
                    Err(LensError::type_mismatch(*expected, value.kind()))
                }
            }
        }
    }
}

/// The map written through an `Object` lens must carry exactly the
/// declared attribute names: no missing, no extra keys.
fn check_key_set(attributes: &HashMap<String, Lens>, value: &ValueMap) -> LensResult<()> {
    for name in attributes.keys() {
        if !value.contains_key(name) {
            return Err(LensError::missing_key(name.clone()));
        }
    }
    for key in value.keys() {
        if !attributes.contains_key(key) {
            return Err(LensError::unexpected_key(key.clone()));
        }
    }
    Ok(())
}
