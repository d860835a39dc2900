//! Foundation types for scenediff.
//!
//! This crate provides the naming, path, and value types shared by the scene
//! object model and the differencing engine. Every other scenediff crate
//! depends on `scenediff-types`.
//!
//! # Key Types
//!
//! - [`Token`] — Interned-style name for attributes, relationships, and prims
//! - [`PrimPath`] — Absolute, `/`-separated path identifying a prim in a tree
//! - [`Value`] — Tagged union over the supported scalar and array value kinds
//! - [`ValueType`] — Declared type tag carried by every attribute

pub mod error;
pub mod path;
pub mod token;
pub mod value;

pub use error::TypeError;
pub use path::PrimPath;
pub use token::Token;
pub use value::{Value, ValueType};
