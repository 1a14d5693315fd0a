//! Declarative layout sugar for Syrup.
//!
//! A caller describes a view hierarchy as nested value-like [`Widget`]
//! descriptors (rows, columns, padding, centering, fixed-size frames,
//! overlays, and inter-item [`Spacer`] directives) and this crate
//! materializes the description into live views and constraints inside a
//! [`ViewTree`](syrup_core::ViewTree). Data flows one direction at build
//! time: descriptor tree in, constraint-wired view tree out.
//!
//! After construction, [`Context`] flows the other direction: given a live
//! view already installed in a built container, it locates the container
//! and adjacent slots through the arena's back-references and mutates
//! visibility or spacing in place.
//!
//! Descriptor trees are consumed exactly once; rebuilding the same
//! descriptors would install duplicate views. All operations are
//! synchronous and single-threaded by contract.

pub mod build;
pub mod center;
pub mod context;
pub mod frame;
pub mod overlay;
pub mod padding;
pub mod spacer;
pub mod spacing;
pub mod stack;
pub mod widget;

pub use build::build_into;
pub use center::Center;
pub use context::{Context, ContextError};
pub use frame::Frame;
pub use overlay::{Overlay, OverlayAlignment};
pub use padding::{EdgeInsets, Padding};
pub use spacer::Spacer;
pub use spacing::{apply_spacing, gap_after, leading_gap};
pub use stack::{Column, Row};
pub use widget::Widget;

#[cfg(test)]
mod tests;
