//! Leaf value comparators: attribute values and relationship target lists.
//!
//! Pure functions of their inputs. All outcomes are expressed as
//! [`DiffResult`] values; a value-kind mismatch is evidence of a difference,
//! never an error.

use std::collections::BTreeMap;

use scenediff_scene::{Attribute, Relationship};
use scenediff_types::PrimPath;

use crate::result::{DiffResult, DiffResultPerPath};

/// Compare two attributes known to exist on both sides.
///
/// Attributes of differing declared type always differ. When both sides
/// authored a value, the values are compared structurally. A value authored
/// on exactly one side differs: the unauthored side resolves to its schema
/// fallback, and we classify the authoring itself as the change. Neither
/// side authored ⇒ `Same` (both fall back identically).
pub fn compare_attribute_values(modified: &Attribute, baseline: &Attribute) -> DiffResult {
    if modified.value_type() != baseline.value_type() {
        return DiffResult::Differ;
    }
    match (modified.authored_value(), baseline.authored_value()) {
        (Some(a), Some(b)) if a == b => DiffResult::Same,
        (Some(_), Some(_)) => DiffResult::Differ,
        (None, None) => DiffResult::Same,
        _ => DiffResult::Differ,
    }
}

/// Compare two relationships' target lists, target by target.
///
/// Returns a per-target-path mapping covering the union of both lists.
/// Comparison is order-sensitive: a target present on both sides at the same
/// position is `Same`; at a different position, `Differ`. Targets present on
/// one side only are `Created` (modified) or `Absent` (baseline). A `None`
/// side behaves as an empty target list, so every target of the present side
/// is classified individually — the caller resolves name-level presence.
pub fn compare_relationship_targets(
    modified: Option<&Relationship>,
    baseline: Option<&Relationship>,
) -> DiffResultPerPath {
    let modified_targets = modified.map_or(&[][..], Relationship::targets);
    let baseline_targets = baseline.map_or(&[][..], Relationship::targets);

    let baseline_index: BTreeMap<&PrimPath, usize> = baseline_targets
        .iter()
        .enumerate()
        .map(|(position, path)| (path, position))
        .collect();

    let mut results = DiffResultPerPath::new();
    for (position, path) in modified_targets.iter().enumerate() {
        let result = match baseline_index.get(path) {
            Some(&baseline_position) if baseline_position == position => DiffResult::Same,
            Some(_) => DiffResult::Differ,
            None => DiffResult::Created,
        };
        results.insert(path.clone(), result);
    }
    for path in baseline_targets {
        results
            .entry(path.clone())
            .or_insert(DiffResult::Absent);
    }
    results
}
