use scenediff_types::{PrimPath, Token, TypeError};
use thiserror::Error;

/// Errors produced while assembling a scene tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    /// Two attributes on the same prim share a name.
    #[error("duplicate attribute {name} on prim {path}")]
    DuplicateAttribute { path: PrimPath, name: Token },

    /// Two relationships on the same prim share a name.
    #[error("duplicate relationship {name} on prim {path}")]
    DuplicateRelationship { path: PrimPath, name: Token },

    /// Two children of the same prim share a name, so their paths collide.
    #[error("duplicate child {name} under prim {path}")]
    DuplicateChild { path: PrimPath, name: Token },

    /// A name or path failed validation.
    #[error(transparent)]
    Type(#[from] TypeError),
}
