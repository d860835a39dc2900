use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::token::Token;

/// An absolute, `/`-separated path identifying a prim in a scene tree.
///
/// Paths are the stable child identity the differencing engine keys its
/// per-child result mappings by: unique among siblings and stable across
/// calls. A path always has at least one component; the pseudo-root `/` by
/// itself is not a valid prim path.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PrimPath(String);

impl PrimPath {
    /// Parse an absolute path such as `/World/Geometry/Sphere`.
    pub fn parse(path: impl Into<String>) -> Result<Self, TypeError> {
        let path = path.into();
        let Some(rest) = path.strip_prefix('/') else {
            return Err(TypeError::RelativePath(path));
        };
        if rest.is_empty() || rest.split('/').any(str::is_empty) {
            return Err(TypeError::EmptyPathComponent(path));
        }
        Ok(Self(path))
    }

    /// A root-level path with a single component.
    pub fn root_prim(name: &Token) -> Self {
        Self(format!("/{name}"))
    }

    /// The path of a direct child of this prim.
    pub fn child(&self, name: &Token) -> Self {
        Self(format!("{}/{name}", self.0))
    }

    /// The last path component: the prim's own name.
    pub fn name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }

    /// The parent path, or `None` for a root-level prim.
    pub fn parent(&self) -> Option<Self> {
        let idx = self.0.rfind('/')?;
        if idx == 0 {
            return None;
        }
        Some(Self(self.0[..idx].to_owned()))
    }

    /// Path components from root to leaf.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').skip(1)
    }

    /// The full path text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PrimPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrimPath({})", self.0)
    }
}

impl fmt::Display for PrimPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for PrimPath {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PrimPath {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<PrimPath> for String {
    fn from(path: PrimPath) -> Self {
        path.0
    }
}
