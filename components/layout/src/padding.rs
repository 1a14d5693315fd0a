//! Padding that insets a child from its wrapper's edges.

use syrup_core::{Attribute, Constraint, ViewId, ViewTree};

use crate::widget::Widget;

/// Insets applied to the four edges of a wrapper.
///
/// Every edge is optional: a present value produces exactly one constraint
/// against that edge, an absent value produces none, leaving the child
/// unpositioned in that direction by this widget. Partial insets are a
/// deliberate affordance: a child inset only on its leading edge is free to
/// be placed vertically by other constraints.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInsets {
    pub(crate) top: Option<f32>,
    pub(crate) bottom: Option<f32>,
    pub(crate) leading: Option<f32>,
    pub(crate) trailing: Option<f32>,
}

impl EdgeInsets {
    /// Creates insets with all four edges explicit.
    #[must_use]
    pub const fn new(top: f32, bottom: f32, leading: f32, trailing: f32) -> Self {
        Self {
            top: Some(top),
            bottom: Some(bottom),
            leading: Some(leading),
            trailing: Some(trailing),
        }
    }

    /// Equal insets on every edge.
    #[must_use]
    pub const fn all(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Symmetric vertical and horizontal insets.
    #[must_use]
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(vertical, vertical, horizontal, horizontal)
    }

    /// No insets on any edge.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            top: None,
            bottom: None,
            leading: None,
            trailing: None,
        }
    }

    /// Sets the top inset.
    #[must_use]
    pub const fn top(mut self, value: f32) -> Self {
        self.top = Some(value);
        self
    }

    /// Sets the bottom inset.
    #[must_use]
    pub const fn bottom(mut self, value: f32) -> Self {
        self.bottom = Some(value);
        self
    }

    /// Sets the leading inset.
    #[must_use]
    pub const fn leading(mut self, value: f32) -> Self {
        self.leading = Some(value);
        self
    }

    /// Sets the trailing inset.
    #[must_use]
    pub const fn trailing(mut self, value: f32) -> Self {
        self.trailing = Some(value);
        self
    }
}

#[allow(clippy::cast_possible_truncation)]
impl<T: Into<f64>> From<T> for EdgeInsets {
    fn from(value: T) -> Self {
        Self::all(value.into() as f32)
    }
}

/// Wraps a child and insets it from the wrapper's edges.
#[derive(Debug)]
pub struct Padding {
    insets: EdgeInsets,
    child: Widget,
}

impl Padding {
    /// Wraps `child` with the given insets.
    pub fn new(insets: impl Into<EdgeInsets>, child: impl Into<Widget>) -> Self {
        Self {
            insets: insets.into(),
            child: child.into(),
        }
    }

    /// Builds the wrapper view, installs the resolved child, and emits one
    /// constraint per present inset.
    pub(crate) fn materialize(self, tree: &mut ViewTree) -> Option<ViewId> {
        let child = self.child.resolve(tree)?;
        let wrapper = tree.new_view();
        tree.add_subview(wrapper, child);
        if let Some(inset) = self.insets.leading {
            tree.add_constraint(Constraint::align(
                child,
                Attribute::Leading,
                wrapper,
                Attribute::Leading,
                inset,
            ));
        }
        if let Some(inset) = self.insets.trailing {
            tree.add_constraint(Constraint::align(
                child,
                Attribute::Trailing,
                wrapper,
                Attribute::Trailing,
                -inset,
            ));
        }
        if let Some(inset) = self.insets.top {
            tree.add_constraint(Constraint::align(
                child,
                Attribute::Top,
                wrapper,
                Attribute::Top,
                inset,
            ));
        }
        if let Some(inset) = self.insets.bottom {
            tree.add_constraint(Constraint::align(
                child,
                Attribute::Bottom,
                wrapper,
                Attribute::Bottom,
                -inset,
            ));
        }
        Some(wrapper)
    }
}
