//! The tree differ: per-prim attribute, relationship, and child comparison.
//!
//! Each entry point builds a result mapping over the union of both sides'
//! elements, then [`compare_prims`] aggregates the category results into one
//! classification for the whole subtree, short-circuiting to
//! [`DiffResult::Differ`] as soon as any category differs.
//!
//! Absent prims are passed as `None`. An addition or removal is classified
//! by the *caller* context: [`compare_prims_children`] records `Created` /
//! `Absent` for one-sided children, while a standalone [`compare_prims`]
//! call with exactly one side present only knows the sides differ in
//! validity and returns `Differ`. This convention holds system-wide.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use scenediff_scene::{Attribute, Prim, Relationship};
use scenediff_types::{PrimPath, Token};

use crate::compare_values::{compare_attribute_values, compare_relationship_targets};
use crate::overall::{compute_overall_result, fold_overall};
use crate::result::{
    DiffResult, DiffResultPerPath, DiffResultPerPathPerToken, DiffResultPerToken,
};

/// Compare the authored attributes of two prims, by name.
///
/// The returned mapping covers the union of both sides' authored attribute
/// names: names on both sides get the value comparator's result, names only
/// in modified are `Created`, names only in baseline are `Absent`.
pub fn compare_prims_attributes(modified: &Prim, baseline: &Prim) -> DiffResultPerToken {
    let mut results = DiffResultPerToken::new();

    // Index the baseline attributes by name so presence checks and value
    // comparisons share one lookup.
    let baseline_attrs: BTreeMap<&Token, &Attribute> = baseline
        .authored_attributes()
        .map(|attr| (attr.name(), attr))
        .collect();

    for attr in modified.authored_attributes() {
        let result = match baseline_attrs.get(attr.name()) {
            Some(baseline_attr) => compare_attribute_values(attr, baseline_attr),
            None => DiffResult::Created,
        };
        results.insert(attr.name().clone(), result);
    }

    // Whatever the modified sweep did not claim is absent in modified.
    for name in baseline_attrs.keys() {
        results
            .entry((*name).clone())
            .or_insert(DiffResult::Absent);
    }

    results
}

/// Compare the authored relationships of two prims, by name, each to a
/// nested per-target-path mapping.
///
/// A relationship present on one side only is still compared target by
/// target against a missing counterpart, so every target it names is
/// individually classified `Created` or `Absent`.
pub fn compare_prims_relationships(
    modified: &Prim,
    baseline: &Prim,
) -> DiffResultPerPathPerToken {
    let mut results = DiffResultPerPathPerToken::new();

    let baseline_rels: BTreeMap<&Token, &Relationship> = baseline
        .authored_relationships()
        .map(|rel| (rel.name(), rel))
        .collect();

    for rel in modified.authored_relationships() {
        let per_target =
            compare_relationship_targets(Some(rel), baseline_rels.get(rel.name()).copied());
        results.insert(rel.name().clone(), per_target);
    }

    for (name, rel) in &baseline_rels {
        if !results.contains_key(*name) {
            let per_target = compare_relationship_targets(None, Some(*rel));
            results.insert((*name).clone(), per_target);
        }
    }

    results
}

/// Compare the direct children of two prims, keyed by child path.
///
/// Children present on both sides are compared recursively via
/// [`compare_prims`]; a child on one side only is recorded as `Created` or
/// `Absent` — this caller context is what distinguishes addition from
/// removal, since a recursive call against a missing counterpart would
/// degenerate to a bare validity mismatch.
pub fn compare_prims_children(modified: &Prim, baseline: &Prim) -> DiffResultPerPath {
    let mut results = DiffResultPerPath::new();

    let baseline_children: BTreeMap<&PrimPath, &Prim> = baseline
        .children()
        .iter()
        .map(|child| (child.path(), child))
        .collect();

    for child in modified.children() {
        let result = match baseline_children.get(child.path()) {
            Some(baseline_child) => compare_prims(Some(child), Some(*baseline_child)),
            None => DiffResult::Created,
        };
        results.insert(child.path().clone(), result);
    }

    for path in baseline_children.keys() {
        results
            .entry((*path).clone())
            .or_insert(DiffResult::Absent);
    }

    results
}

/// Compare two prim subtrees and classify the whole comparison.
///
/// If either side is missing, only validity is compared: both missing is
/// `Same`, exactly one missing is `Differ` (children and attributes are not
/// inspected). Otherwise the attribute, relationship, and children category
/// results are aggregated — relationships one nested level first — and the
/// category aggregates are folded into the final result, returning `Differ`
/// as soon as any category differs.
pub fn compare_prims(modified: Option<&Prim>, baseline: Option<&Prim>) -> DiffResult {
    let (modified, baseline) = match (modified, baseline) {
        (Some(modified), Some(baseline)) => (modified, baseline),
        (None, None) => return DiffResult::Same,
        _ => return DiffResult::Differ,
    };

    trace!(modified = %modified.path(), baseline = %baseline.path(), "comparing prims");

    let mut category_results = Vec::with_capacity(3);

    let attr_diffs = compare_prims_attributes(modified, baseline);
    let overall = compute_overall_result(&attr_diffs);
    if overall == DiffResult::Differ {
        debug!(prim = %modified.path(), "attributes differ");
        return DiffResult::Differ;
    }
    category_results.push(overall);

    let rel_diffs = compare_prims_relationships(modified, baseline);
    for (name, per_target) in &rel_diffs {
        let overall = compute_overall_result(per_target);
        if overall == DiffResult::Differ {
            debug!(prim = %modified.path(), relationship = %name, "relationship differs");
            return DiffResult::Differ;
        }
        category_results.push(overall);
    }

    let child_diffs = compare_prims_children(modified, baseline);
    let overall = compute_overall_result(&child_diffs);
    if overall == DiffResult::Differ {
        debug!(prim = %modified.path(), "children differ");
        return DiffResult::Differ;
    }
    category_results.push(overall);

    fold_overall(category_results)
}
