//! The closed widget descriptor type.

use syrup_core::{ViewId, ViewTree};

use crate::center::Center;
use crate::frame::Frame;
use crate::overlay::Overlay;
use crate::padding::Padding;
use crate::spacer::Spacer;
use crate::stack::{Column, Row};

/// Declarative intent for one piece of UI, not yet realized as a live view.
///
/// The set of widget shapes is closed: a leaf view, a single-child wrapper
/// ([`Padding`], [`Center`], [`Frame`], [`Overlay`]), a multi-child stack
/// ([`Row`], [`Column`]), or a [`Spacer`] directive. Each variant knows how
/// to resolve itself into a live view, so no downcasting is involved
/// anywhere.
///
/// Widget trees are acyclic by construction and consumed at most once:
/// [`resolve`](Self::resolve) takes the descriptor by value.
#[derive(Debug)]
pub enum Widget {
    /// An already-created live view with intrinsic content.
    View(ViewId),
    /// A child inset from its wrapper's edges.
    Padding(Box<Padding>),
    /// A child centered inside its wrapper.
    Center(Box<Center>),
    /// A child boxed to a fixed width and/or height.
    Frame(Box<Frame>),
    /// A layer placed over a base child.
    Overlay(Box<Overlay>),
    /// Children arranged along the horizontal axis.
    Row(Row),
    /// Children arranged along the vertical axis.
    Column(Column),
    /// A gap directive between two adjacent children.
    Spacer(Spacer),
}

impl Widget {
    /// Materializes this descriptor into the arena and returns the single
    /// live view representing it externally.
    ///
    /// Multi-child widgets resolve to their container view; single-child
    /// wrappers resolve to their own wrapping view, never the inner child.
    /// A [`Spacer`] is only meaningful inside a stack's child list and
    /// resolves to `None` here, as does a wrapper whose child fails to
    /// resolve; both are logged and otherwise skipped.
    pub fn resolve(self, tree: &mut ViewTree) -> Option<ViewId> {
        match self {
            Self::View(view) => Some(view),
            Self::Padding(padding) => padding.materialize(tree),
            Self::Center(center) => center.materialize(tree),
            Self::Frame(frame) => frame.materialize(tree),
            Self::Overlay(overlay) => overlay.materialize(tree),
            Self::Row(row) => Some(row.materialize(tree)),
            Self::Column(column) => Some(column.materialize(tree)),
            Self::Spacer(_) => {
                tracing::warn!("a spacer outside a row or column resolves to no view");
                None
            }
        }
    }
}

impl From<ViewId> for Widget {
    fn from(view: ViewId) -> Self {
        Self::View(view)
    }
}

impl From<Padding> for Widget {
    fn from(padding: Padding) -> Self {
        Self::Padding(Box::new(padding))
    }
}

impl From<Center> for Widget {
    fn from(center: Center) -> Self {
        Self::Center(Box::new(center))
    }
}

impl From<Frame> for Widget {
    fn from(frame: Frame) -> Self {
        Self::Frame(Box::new(frame))
    }
}

impl From<Overlay> for Widget {
    fn from(overlay: Overlay) -> Self {
        Self::Overlay(Box::new(overlay))
    }
}

impl From<Row> for Widget {
    fn from(row: Row) -> Self {
        Self::Row(row)
    }
}

impl From<Column> for Widget {
    fn from(column: Column) -> Self {
        Self::Column(column)
    }
}

impl From<Spacer> for Widget {
    fn from(spacer: Spacer) -> Self {
        Self::Spacer(spacer)
    }
}
