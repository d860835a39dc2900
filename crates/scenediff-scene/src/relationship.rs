use serde::{Deserialize, Serialize};

use scenediff_types::{PrimPath, Token};

/// A named, ordered list of target paths authored on a prim.
///
/// Target order is preserved as authored; the differencing engine is
/// order-sensitive when comparing target lists.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    name: Token,
    targets: Vec<PrimPath>,
}

impl Relationship {
    /// A relationship with the given targets, in authored order.
    pub fn new(name: Token, targets: Vec<PrimPath>) -> Self {
        Self { name, targets }
    }

    /// The relationship's name.
    pub fn name(&self) -> &Token {
        &self.name
    }

    /// The target paths, in authored order.
    pub fn targets(&self) -> &[PrimPath] {
        &self.targets
    }
}
