//! Inter-item spacing directives.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use syrup_core::ViewId;

/// Where a built spacer lives inside its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Attachment {
    /// The stack container the gap was applied in.
    pub container: ViewId,
    /// The arranged view the gap hangs after (a real child, or the zero-size
    /// anchor for a leading gap).
    pub after: ViewId,
    /// The synthetic placeholder carrying the gap, absent under native
    /// spacing.
    pub proxy: Option<ViewId>,
}

#[derive(Debug)]
struct SpacerState {
    gap: Cell<f32>,
    attachment: RefCell<Option<Attachment>>,
}

/// A declarative request for a gap between two adjacent children.
///
/// A spacer is never rendered as content; the container builder consumes it
/// as a directive. The handle is cheaply cloneable and stays valid after the
/// build, so a caller can retain it and re-space the live tree later through
/// [`Context::set_spacing`](crate::Context::set_spacing):
///
/// ```
/// use syrup_core::ViewTree;
/// use syrup_layout::{Column, Context, Spacer};
///
/// let mut tree = ViewTree::new();
/// let first = tree.new_view();
/// let second = tree.new_view();
/// let gap = Spacer::new(8.0);
/// let context = Context::new(
///     &mut tree,
///     Column::new(vec![first.into(), gap.clone().into(), second.into()]),
/// );
/// context.set_spacing(&mut tree, &gap, 24.0).unwrap();
/// assert_eq!(gap.gap(), 24.0);
/// ```
///
/// The shared interior makes the handle deliberately `!Send`; all use is
/// bound to the thread owning the view hierarchy.
#[derive(Debug, Clone)]
pub struct Spacer {
    state: Rc<SpacerState>,
}

impl Spacer {
    /// Creates a spacer requesting the given gap.
    #[must_use]
    pub fn new(gap: f32) -> Self {
        Self {
            state: Rc::new(SpacerState {
                gap: Cell::new(gap),
                attachment: RefCell::new(None),
            }),
        }
    }

    /// The currently requested gap.
    #[must_use]
    pub fn gap(&self) -> f32 {
        self.state.gap.get()
    }

    /// Whether a build has installed this spacer into a container.
    #[must_use]
    pub fn is_built(&self) -> bool {
        self.state.attachment.borrow().is_some()
    }

    pub(crate) fn set_gap(&self, gap: f32) {
        self.state.gap.set(gap);
    }

    pub(crate) fn bind(&self, attachment: Attachment) {
        *self.state.attachment.borrow_mut() = Some(attachment);
    }

    pub(crate) fn attachment(&self) -> Option<Attachment> {
        *self.state.attachment.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let spacer = Spacer::new(10.0);
        let other = spacer.clone();
        spacer.set_gap(3.0);
        assert_eq!(other.gap(), 3.0);
        assert!(!other.is_built());
    }
}
