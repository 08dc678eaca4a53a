// SPDX-License-Identifier: MIT OR Apache-2.0
//! Scene projection and mutation engine for SparkFX Editor.
//!
//! This crate reconciles two views of the same effect scene:
//! - the mutable n-ary graph of typed nodes (groups, lights, particle
//!   systems and their emitters) owned by the host application, and
//! - the flat, addressable tree the UI renders and selects against.
//!
//! ## Architecture
//!
//! The engine is built around an index-once/resolve-many cycle:
//! - [`TreeIndex`] walks the graph in one deterministic pre-order pass and
//!   assigns every node an integer address valid for that snapshot only
//! - [`Projection`] holds UI intent (selection, expansion) and reconciles it
//!   against each fresh index
//! - [`dispatch`] executes addressed commands (add, duplicate, remove,
//!   export) against the live graph and signals when a re-index is due
//! - [`ExportAdapter`] is the seam for turning subtrees into structured
//!   documents or portable construction code
//!
//! Addresses are never stable across a structural mutation; every mutation
//! is followed by a rebuild and a reconcile before any address is reused.

pub mod command;
pub mod error;
pub mod export;
pub mod index;
pub mod node;
pub mod projection;

pub use command::{dispatch, Command, Outcome};
pub use error::SceneError;
pub use export::{ExportAdapter, SceneExporter};
pub use index::{Address, TreeIndex};
pub use node::{LightParams, NodeKind, NodeTemplate, SceneNode, SystemParams};
pub use projection::{Projection, SelectionSink, TreeRow};
