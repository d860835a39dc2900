use thiserror::Error;

/// Errors produced when validating names and paths.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("prim path must be absolute (start with '/'): {0:?}")]
    RelativePath(String),

    #[error("prim path contains an empty component: {0:?}")]
    EmptyPathComponent(String),

    #[error("name must be non-empty and free of '/': {0:?}")]
    InvalidName(String),
}
