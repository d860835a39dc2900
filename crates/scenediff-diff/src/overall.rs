//! Result aggregation: reduce a mapping of per-element classifications into
//! one overall classification.
//!
//! The fold is monotone and short-circuits: the first [`DiffResult::Differ`]
//! ends the scan. A mapping holding both `Created` and `Absent` entries (an
//! element added and a different one removed) also aggregates to `Differ`,
//! since "something changed" is the only fact the parent level needs.

use std::collections::BTreeMap;

use crate::result::DiffResult;

/// Aggregate a result mapping into a single overall result.
///
/// - empty mapping ⇒ `Same`
/// - any `Differ` entry ⇒ `Differ` (short-circuit)
/// - `Same` entries are neutral
/// - uniform `Created` (or `Absent`) entries ⇒ `Created` (or `Absent`)
/// - a mix of `Created` and `Absent` ⇒ `Differ`
pub fn compute_overall_result<K>(results: &BTreeMap<K, DiffResult>) -> DiffResult {
    fold_overall(results.values().copied())
}

/// Fold over individual results; the aggregation logic behind
/// [`compute_overall_result`].
pub(crate) fn fold_overall(results: impl IntoIterator<Item = DiffResult>) -> DiffResult {
    let mut running = DiffResult::Same;
    for result in results {
        match result {
            DiffResult::Differ => return DiffResult::Differ,
            DiffResult::Same => {}
            other => {
                if running == DiffResult::Same {
                    running = other;
                } else if running != other {
                    // Created mixed with Absent: something changed.
                    return DiffResult::Differ;
                }
            }
        }
    }
    running
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenediff_types::Token;

    fn results(pairs: &[(&str, DiffResult)]) -> BTreeMap<Token, DiffResult> {
        pairs
            .iter()
            .map(|(name, result)| (Token::new(*name).unwrap(), *result))
            .collect()
    }

    #[test]
    fn empty_mapping_is_same() {
        let empty: BTreeMap<Token, DiffResult> = BTreeMap::new();
        assert_eq!(compute_overall_result(&empty), DiffResult::Same);
    }

    #[test]
    fn all_same_is_same() {
        let map = results(&[("a", DiffResult::Same), ("b", DiffResult::Same)]);
        assert_eq!(compute_overall_result(&map), DiffResult::Same);
    }

    #[test]
    fn any_differ_dominates() {
        let map = results(&[
            ("a", DiffResult::Same),
            ("b", DiffResult::Differ),
            ("c", DiffResult::Created),
        ]);
        assert_eq!(compute_overall_result(&map), DiffResult::Differ);
    }

    #[test]
    fn uniform_created_stays_created() {
        let map = results(&[
            ("a", DiffResult::Created),
            ("b", DiffResult::Created),
            ("c", DiffResult::Same),
        ]);
        assert_eq!(compute_overall_result(&map), DiffResult::Created);
    }

    #[test]
    fn uniform_absent_stays_absent() {
        let map = results(&[("a", DiffResult::Absent), ("b", DiffResult::Absent)]);
        assert_eq!(compute_overall_result(&map), DiffResult::Absent);
    }

    #[test]
    fn created_mixed_with_absent_is_differ() {
        let map = results(&[
            ("added", DiffResult::Created),
            ("removed", DiffResult::Absent),
            ("kept", DiffResult::Same),
        ]);
        assert_eq!(compute_overall_result(&map), DiffResult::Differ);
    }

    #[test]
    fn short_circuits_on_first_differ() {
        // An iterator that panics past the Differ entry proves the fold
        // stops scanning.
        let results = [DiffResult::Same, DiffResult::Differ]
            .into_iter()
            .chain(std::iter::once_with(|| panic!("scanned past Differ")));
        assert_eq!(fold_overall(results), DiffResult::Differ);
    }
}
