//! Lenses for primitive values.

use optic_core::ValueKind;

use crate::lens::Lens;

/// Identity lens accepting only string values.
pub fn string() -> Lens {
    Lens::typed(ValueKind::String)
}

/// Identity lens accepting only integer values.
pub fn integer() -> Lens {
    Lens::typed(ValueKind::Int)
}

/// Identity lens accepting only boolean values.
pub fn boolean() -> Lens {
    Lens::typed(ValueKind::Bool)
}

/// Identity lens accepting only float values.
pub fn float() -> Lens {
    Lens::typed(ValueKind::Float)
}
