//! Prim differencing engine for scenediff.
//!
//! Compares a *modified* scene tree against a *baseline* tree and classifies
//! every element — attributes, relationship targets, children — as
//! [`Same`], [`Differ`], [`Absent`] (in baseline only), or [`Created`] (in
//! modified only). The engine is read-only over both trees, allocates fresh
//! result mappings per call, and is safe to invoke reentrantly.
//!
//! # Key Types
//!
//! - [`DiffResult`] and the [`DiffResultPerToken`] / [`DiffResultPerPath`] /
//!   [`DiffResultPerPathPerToken`] result mappings
//! - [`compare_prims`] / [`compare_prims_attributes`] /
//!   [`compare_prims_relationships`] / [`compare_prims_children`] -- Tree differ
//! - [`compare_attribute_values`] / [`compare_relationship_targets`] -- Leaf comparators
//! - [`compute_overall_result`] -- Result aggregation with short-circuit
//!
//! [`Same`]: DiffResult::Same
//! [`Differ`]: DiffResult::Differ
//! [`Absent`]: DiffResult::Absent
//! [`Created`]: DiffResult::Created

pub mod compare_values;
pub mod diff_prims;
pub mod overall;
pub mod result;

pub use compare_values::{compare_attribute_values, compare_relationship_targets};
pub use diff_prims::{
    compare_prims, compare_prims_attributes, compare_prims_children,
    compare_prims_relationships,
};
pub use overall::compute_overall_result;
pub use result::{
    DiffResult, DiffResultPerPath, DiffResultPerPathPerToken, DiffResultPerToken,
};
