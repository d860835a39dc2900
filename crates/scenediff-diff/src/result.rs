use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use scenediff_types::{PrimPath, Token};

/// The classification of one comparison outcome.
///
/// The set is closed: every comparison yields exactly one member. Variants
/// are declared in ascending precedence order for aggregation, so the derived
/// `Ord` matches the severity ordering used by
/// [`compute_overall_result`](crate::compute_overall_result).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum DiffResult {
    /// Values or subtrees are identical.
    Same,
    /// The element exists on both sides but differs.
    Differ,
    /// The element exists in baseline but not in modified.
    Absent,
    /// The element exists in modified but not in baseline.
    Created,
}

impl fmt::Display for DiffResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Same => "same",
            Self::Differ => "differ",
            Self::Absent => "absent",
            Self::Created => "created",
        };
        f.write_str(text)
    }
}

/// Per-attribute (or per-relationship-name) results, keyed by name.
pub type DiffResultPerToken = BTreeMap<Token, DiffResult>;

/// Per-child (or per-relationship-target) results, keyed by path.
pub type DiffResultPerPath = BTreeMap<PrimPath, DiffResult>;

/// Per-relationship results: each relationship name maps to its per-target
/// result mapping, because every target can independently be same, created,
/// absent, or differ.
pub type DiffResultPerPathPerToken = BTreeMap<Token, DiffResultPerPath>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ordering() {
        assert!(DiffResult::Same < DiffResult::Differ);
        assert!(DiffResult::Differ < DiffResult::Absent);
        assert!(DiffResult::Absent < DiffResult::Created);
    }

    #[test]
    fn display_names() {
        assert_eq!(format!("{}", DiffResult::Same), "same");
        assert_eq!(format!("{}", DiffResult::Created), "created");
    }

    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&DiffResult::Absent).unwrap();
        let parsed: DiffResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, DiffResult::Absent);
    }
}
