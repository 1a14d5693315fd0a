//! Post-construction mutation of a built tree.

use thiserror::Error;

use syrup_core::{Capabilities, SlotKind, SlotRef, TreeError, ViewId, ViewTree};

use crate::spacer::{Attachment, Spacer};
use crate::spacing::SpacingStrategy;
use crate::widget::Widget;

/// Failures of the best-effort mutation operations.
///
/// Cosmetic mutations degrade gracefully and corrupt no state on failure,
/// but the outcome is observable so that headless callers are not left
/// guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContextError {
    /// The view's direct structural parent is not a stack container.
    #[error("view {0:?} is not managed by a stack container")]
    NotStackManaged(ViewId),
    /// The spacer has never been installed by a build.
    #[error("spacer has not been built into a container")]
    SpacerNotBuilt,
    /// The spacer's placeholder is no longer where the build left it.
    #[error("spacer is no longer attached to its container")]
    Detached,
    /// An arena operation failed underneath.
    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Mutation façade over a built widget tree.
///
/// Constructing a context consumes the root descriptor, materializes it
/// into the arena, and retains the single live view that represents the
/// root externally: a stack widget's container view, a single-child
/// wrapper's own wrapping view (never the inner child), or a leaf itself.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    root: Option<ViewId>,
}

impl Context {
    /// Builds `root` into the tree, one-shot.
    pub fn new(tree: &mut ViewTree, root: impl Into<Widget>) -> Self {
        Self {
            root: root.into().resolve(tree),
        }
    }

    /// The live view representing the root widget, `None` when the root
    /// resolved to nothing (for example a bare spacer).
    #[must_use]
    pub const fn root_view(&self) -> Option<ViewId> {
        self.root
    }

    /// Shows or hides an arranged view in place.
    ///
    /// The view must be directly managed by a stack container built
    /// earlier. On hosts without native gap collapsing, the hidden state is
    /// propagated to the synthetic placeholder run belonging to the view,
    /// so its gap disappears and reappears together with it; placeholder
    /// runs belonging to other, still-visible children are never touched.
    pub fn set_hidden(
        &self,
        tree: &mut ViewTree,
        view: ViewId,
        hidden: bool,
    ) -> Result<(), ContextError> {
        let slot = tree
            .slot_of(view)
            .ok_or(ContextError::NotStackManaged(view))?;
        tree.set_hidden_flag(view, hidden);
        if !tree
            .capabilities()
            .contains(Capabilities::HIDDEN_COLLAPSES_SPACING)
        {
            collapse_adjacent_run(tree, slot, hidden)?;
        }
        Ok(())
    }

    /// The visibility flag of a view, for symmetry with
    /// [`set_hidden`](Self::set_hidden).
    #[must_use]
    pub fn is_hidden(&self, tree: &ViewTree, view: ViewId) -> bool {
        tree.is_hidden(view)
    }

    /// Re-spaces one gap of the live tree.
    ///
    /// The spacer must have been consumed by a build. Its current position
    /// is re-derived from the arena rather than from build-time state, the
    /// slot immediately preceding it becomes the gap's anchor again, and
    /// spacing synthesis re-runs with the new value. Only the one
    /// placeholder tied to this spacer changes; every other slot keeps its
    /// size and order.
    pub fn set_spacing(
        &self,
        tree: &mut ViewTree,
        spacer: &Spacer,
        gap: f32,
    ) -> Result<(), ContextError> {
        let attachment = spacer.attachment().ok_or(ContextError::SpacerNotBuilt)?;
        let container = attachment.container;
        let after = match attachment.proxy {
            Some(proxy) => {
                let slot = tree
                    .slot_of(proxy)
                    .filter(|slot| slot.container == container)
                    .ok_or(ContextError::Detached)?;
                if slot.index == 0 {
                    return Err(ContextError::Detached);
                }
                tree.arranged_slots(container)?[slot.index - 1].view
            }
            None => {
                tree.index_of_arranged(container, attachment.after)
                    .ok_or(ContextError::Detached)?;
                attachment.after
            }
        };
        spacer.set_gap(gap);
        let applied = SpacingStrategy::for_tree(tree).apply(tree, container, gap, Some(after))?;
        spacer.bind(Attachment {
            container,
            after: applied.after,
            proxy: applied.proxy,
        });
        Ok(())
    }
}

/// Propagates `hidden` to the synthetic placeholder run belonging to the
/// view at `slot`.
///
/// A view's run is the contiguous synthetic run immediately before it,
/// except for the leading real child, whose run is the one immediately
/// after it. Walks stop at the first non-synthetic slot, so at most one run
/// is ever affected.
fn collapse_adjacent_run(
    tree: &mut ViewTree,
    slot: SlotRef,
    hidden: bool,
) -> Result<(), TreeError> {
    let slots = tree.arranged_slots(slot.container)?.to_vec();
    let mut run = Vec::new();
    for entry in slots[..slot.index].iter().rev() {
        if entry.kind.is_synthetic() {
            run.push(entry.view);
        } else {
            break;
        }
    }
    let has_preceding_real = slots[..slot.index]
        .iter()
        .any(|entry| entry.kind == SlotKind::Real);
    if !has_preceding_real {
        for entry in &slots[slot.index + 1..] {
            if entry.kind.is_synthetic() {
                run.push(entry.view);
            } else {
                break;
            }
        }
    }
    for view in run {
        tree.set_hidden_flag(view, hidden);
    }
    Ok(())
}
