use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// A name for an attribute, relationship, or prim.
///
/// Tokens are ordered and hashable so they can key result mappings. A token
/// is never empty and never contains `/` (path separators belong to
/// [`PrimPath`](crate::PrimPath), not names).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Token(String);

impl Token {
    /// Create a token, rejecting empty names and names containing `/`.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        if name.is_empty() || name.contains('/') {
            return Err(TypeError::InvalidName(name));
        }
        Ok(Self(name))
    }

    /// The token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Token({})", self.0)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Token {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Token {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_plain_names() {
        let token = Token::new("xformOp:translate").unwrap();
        assert_eq!(token.as_str(), "xformOp:translate");
    }

    #[test]
    fn new_rejects_empty() {
        assert_eq!(
            Token::new(""),
            Err(TypeError::InvalidName(String::new()))
        );
    }

    #[test]
    fn new_rejects_separator() {
        assert!(Token::new("a/b").is_err());
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a = Token::new("alpha").unwrap();
        let b = Token::new("beta").unwrap();
        assert!(a < b);
    }

    #[test]
    fn display_is_raw_text() {
        let token = Token::new("radius").unwrap();
        assert_eq!(format!("{token}"), "radius");
    }

    #[test]
    fn serde_roundtrip() {
        let token = Token::new("points").unwrap();
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, "\"points\"");
        let parsed: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(token, parsed);
    }

    #[test]
    fn serde_rejects_invalid_name() {
        let result: Result<Token, _> = serde_json::from_str("\"a/b\"");
        assert!(result.is_err());
    }
}
