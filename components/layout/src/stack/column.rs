//! Vertical stack widget.

use syrup_core::{Alignment, Axis, Distribution, StackStyle, ViewId, ViewTree};

use crate::build::build_into;
use crate::widget::Widget;

/// Arranges its children in a vertical line.
///
/// Columns default to intrinsic sizing with stretched cross-axis children.
#[derive(Debug)]
pub struct Column {
    children: Vec<Widget>,
    style: StackStyle,
}

impl Column {
    /// Creates a column with the default column policy.
    #[must_use]
    pub fn new(children: Vec<Widget>) -> Self {
        Self {
            children,
            style: StackStyle::column_default(),
        }
    }

    /// Replaces the whole style at once.
    #[must_use]
    pub const fn style(mut self, style: StackStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets the main-axis distribution.
    #[must_use]
    pub const fn distribution(mut self, distribution: Distribution) -> Self {
        self.style.distribution = distribution;
        self
    }

    /// Sets the cross-axis alignment.
    #[must_use]
    pub const fn alignment(mut self, alignment: Alignment) -> Self {
        self.style.alignment = alignment;
        self
    }

    pub(crate) fn materialize(self, tree: &mut ViewTree) -> ViewId {
        let container = tree.new_stack(Axis::Vertical, self.style);
        if let Err(error) = build_into(tree, container, self.children) {
            tracing::error!(container = container.index(), %error, "column build failed");
        }
        container
    }
}

impl FromIterator<Widget> for Column {
    fn from_iter<T: IntoIterator<Item = Widget>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromIterator<Option<Widget>> for Column {
    fn from_iter<T: IntoIterator<Item = Option<Widget>>>(iter: T) -> Self {
        Self::new(iter.into_iter().flatten().collect())
    }
}
