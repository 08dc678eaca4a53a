// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for the projection and mutation engine.

use crate::index::Address;
use thiserror::Error;

/// Errors reported by indexing, projection and command dispatch.
///
/// Stale addresses are a normal condition after a mutation, not a bug: the
/// dispatcher reports them as [`SceneError::InvalidTarget`] and leaves the
/// graph untouched, and the caller typically drops the command.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The address does not resolve to a live node in the current snapshot.
    #[error("address {0} does not resolve to a live node")]
    InvalidTarget(Address),

    /// The operation is valid in general but not for this target, e.g.
    /// duplicating or removing the scene root.
    #[error("operation is not supported on the scene root")]
    UnsupportedOperation,

    /// The export adapter could not serialize the node.
    #[error("export failed: {0}")]
    ExportFailure(String),
}

impl From<serde_json::Error> for SceneError {
    fn from(err: serde_json::Error) -> Self {
        Self::ExportFailure(err.to_string())
    }
}
