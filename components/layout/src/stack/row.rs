//! Horizontal stack widget.

use syrup_core::{Alignment, Axis, Distribution, StackStyle, ViewId, ViewTree};

use crate::build::build_into;
use crate::widget::Widget;

/// Arranges its children in a horizontal line.
///
/// Rows default to intrinsic sizing with leading cross-axis alignment. Use
/// the builder methods to adjust either policy:
///
/// ```
/// use syrup_core::{Alignment, ViewTree};
/// use syrup_layout::{Row, Spacer, Widget};
///
/// let mut tree = ViewTree::new();
/// let icon = tree.new_view();
/// let label = tree.new_view();
/// let row = Row::new(vec![icon.into(), Spacer::new(4.0).into(), label.into()])
///     .alignment(Alignment::Center);
/// let container = Widget::from(row).resolve(&mut tree).unwrap();
/// assert!(tree.is_stack(container));
/// ```
#[derive(Debug)]
pub struct Row {
    children: Vec<Widget>,
    style: StackStyle,
}

impl Row {
    /// Creates a row with the default row policy.
    #[must_use]
    pub fn new(children: Vec<Widget>) -> Self {
        Self {
            children,
            style: StackStyle::row_default(),
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
        let container = tree.new_stack(Axis::Horizontal, self.style);
        if let Err(error) = build_into(tree, container, self.children) {
            tracing::error!(container = container.index(), %error, "row build failed");
        }
        container
    }
}

impl FromIterator<Widget> for Row {
    fn from_iter<T: IntoIterator<Item = Widget>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl FromIterator<Option<Widget>> for Row {
    fn from_iter<T: IntoIterator<Item = Option<Widget>>>(iter: T) -> Self {
        Self::new(iter.into_iter().flatten().collect())
    }
}
