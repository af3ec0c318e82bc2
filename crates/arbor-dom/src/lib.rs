//! Mutable element tree for a rendered parse tree.
//!
//! The tree is supplied fully formed by an external renderer and then mutated
//! in place: marker flags, text content and, for a handful of composite node
//! kinds, child structure.

mod arena;
mod document;
mod element;
mod markers;

pub use arena::Idx;
/// Document-wide element storage and structural operations.
pub use document::{Descendants, Document, NodeId};
/// Individual elements and their kind vocabulary.
pub use element::{Element, ElementKind, NodeKind, Rect};
/// Marker flags observable by styling and tests.
pub use markers::{Marker, Markers};
