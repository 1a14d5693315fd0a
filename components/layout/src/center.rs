//! Centering wrapper.

use syrup_core::{Attribute, Constraint, ViewId, ViewTree};

use crate::widget::Widget;

/// Wraps a child and centers it on both axes of the wrapper.
#[derive(Debug)]
pub struct Center {
    child: Widget,
}

impl Center {
    /// Centers `child` inside a new wrapper view.
    pub fn new(child: impl Into<Widget>) -> Self {
        Self {
            child: child.into(),
        }
    }

    pub(crate) fn materialize(self, tree: &mut ViewTree) -> Option<ViewId> {
        let child = self.child.resolve(tree)?;
        let wrapper = tree.new_view();
        tree.add_subview(wrapper, child);
        tree.add_constraint(Constraint::align(
            child,
            Attribute::CenterX,
            wrapper,
            Attribute::CenterX,
            0.0,
        ));
        tree.add_constraint(Constraint::align(
            child,
            Attribute::CenterY,
            wrapper,
            Attribute::CenterY,
            0.0,
        ));
        Some(wrapper)
    }
}
