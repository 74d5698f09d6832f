//! Optic Lens
//!
//! Bidirectional, composable accessors over the value graph.
//!
//! Responsibilities:
//! - Define the closed lens type (Attribute, Composed, Object, Maybe, Typed)
//! - Implement get/set with the round-trip law
//! - Compose lenses into paths through nested structures
//! - Raise structural errors for contract violations (wrong kinds, wrong
//!   map shapes) at the point of detection

mod error;
mod lens;
mod primitive;

pub use error::{LensError, LensResult};
pub use lens::{compose, Lens};
pub use primitive::{boolean, float, integer, string};
