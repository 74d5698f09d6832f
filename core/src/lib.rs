//! Optic Core Types
//!
//! This crate provides the foundational types used throughout the Optic
//! system:
//! - Value types (the Value enum, value kinds, value maps)
//! - The FieldAccess capability consumed by attribute lenses
//! - Context paths (PathStep) and the path-addressed ErrorTree

mod errors;
mod field;
mod value;

pub use errors::*;
pub use field::*;
pub use value::*;
