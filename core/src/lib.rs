//! Core view model for Syrup.
//!
//! This crate realizes the host-toolkit capability set the sugar layer in
//! `syrup-layout` builds against: a view abstraction with parent/child
//! installation and a visibility flag, stack containers with an ordered
//! arranged-slot list, and sizing constraints expressible as linear
//! relations. Everything lives in one explicit arena ([`ViewTree`]) with
//! stable [`ViewId`] indices, so "find my container" and "find my previous
//! sibling" are index lookups rather than parent-pointer walks.
//!
//! The crate performs no layout math of its own. Constraints are recorded,
//! never solved; a real host backend is expected to feed them to its own
//! engine.

pub mod capability;
pub mod constraint;
pub mod error;
pub mod stack;
pub mod tree;

pub use capability::Capabilities;
pub use constraint::{Attribute, Constraint, Dimension};
pub use error::TreeError;
pub use stack::{Alignment, Axis, Distribution, Slot, SlotKind, StackStyle};
pub use tree::{SlotRef, ViewId, ViewTree};
