//! Read-only scene object model for scenediff.
//!
//! The differencing engine requires four capabilities of a scene tree:
//! validity, enumerable authored attributes, enumerable authored
//! relationships, and enumerable children with stable identity. This crate
//! provides an in-memory model with exactly those capabilities, plus a
//! [`PrimSpec`] builder for assembling trees from host data or in tests.
//!
//! # Key Types
//!
//! - [`Prim`] — A node in the scene tree, addressed by [`PrimPath`]
//! - [`Attribute`] — A named, typed value authored on a prim
//! - [`Relationship`] — A named, ordered list of target paths
//! - [`PrimSpec`] — Builder that validates and freezes a tree into [`Prim`]s
//!
//! [`PrimPath`]: scenediff_types::PrimPath

pub mod attribute;
pub mod error;
pub mod prim;
pub mod relationship;

pub use attribute::Attribute;
pub use error::SceneError;
pub use prim::{Prim, PrimSpec};
pub use relationship::Relationship;
