//! Fixed-size frames.

use syrup_core::{Constraint, Dimension, ViewId, ViewTree};

use crate::widget::Widget;

/// Boxes a child to a fixed width and/or height.
///
/// Each present dimension produces one equal-to-constant constraint on the
/// wrapper; the child is pinned flush to all four wrapper edges. A frame
/// with neither dimension set degenerates to a plain flush wrapper.
#[derive(Debug)]
pub struct Frame {
    width: Option<f32>,
    height: Option<f32>,
    child: Widget,
}

impl Frame {
    /// Wraps `child` without fixing either dimension yet.
    pub fn new(child: impl Into<Widget>) -> Self {
        Self {
            width: None,
            height: None,
            child: child.into(),
        }
    }

    /// Wraps `child` fixed to `width` by `height`.
    pub fn sized(width: f32, height: f32, child: impl Into<Widget>) -> Self {
        Self::new(child).width(width).height(height)
    }

    /// Fixes the wrapper's width.
    #[must_use]
    pub const fn width(mut self, value: f32) -> Self {
        self.width = Some(value);
        self
    }

    /// Fixes the wrapper's height.
    #[must_use]
    pub const fn height(mut self, value: f32) -> Self {
        self.height = Some(value);
        self
    }

    pub(crate) fn materialize(self, tree: &mut ViewTree) -> Option<ViewId> {
        let child = self.child.resolve(tree)?;
        let wrapper = tree.new_view();
        tree.add_subview(wrapper, child);
        for constraint in Constraint::pin_edges(child, wrapper) {
            tree.add_constraint(constraint);
        }
        if let Some(width) = self.width {
            tree.add_constraint(Constraint::exact(wrapper, Dimension::Width, width));
        }
        if let Some(height) = self.height {
            tree.add_constraint(Constraint::exact(wrapper, Dimension::Height, height));
        }
        Some(wrapper)
    }
}
