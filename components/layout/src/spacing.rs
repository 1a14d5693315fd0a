//! Spacing synthesis.
//!
//! Stack containers without a native per-gap primitive get arbitrary
//! spacing emulated through zero-content placeholder slots; containers with
//! one use it directly. Both paths sit behind [`SpacingStrategy::apply`],
//! selected once from the tree's capability set, and produce identical
//! observable geometry: [`gap_after`] reports the same values either way.

use syrup_core::{Capabilities, Constraint, SlotKind, TreeError, ViewId, ViewTree};

/// Outcome of one spacing application.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Applied {
    /// The arranged view the gap now hangs after: the requested slot, or
    /// the zero-size anchor inserted for a leading gap.
    pub after: ViewId,
    /// The placeholder carrying the gap, absent under native spacing.
    pub proxy: Option<ViewId>,
}

/// How gaps are realized for a particular tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SpacingStrategy {
    /// The host stack records per-gap spacing itself.
    Native,
    /// Gaps are emulated with sized placeholder slots.
    Synthetic,
}

impl SpacingStrategy {
    /// Picks the strategy the tree's capabilities support.
    pub(crate) fn for_tree(tree: &ViewTree) -> Self {
        if tree
            .capabilities()
            .contains(Capabilities::NATIVE_SPACING_AFTER)
        {
            Self::Native
        } else {
            Self::Synthetic
        }
    }

    /// Inserts or resizes the gap of size `gap` immediately after `after`
    /// in `container`'s arranged list.
    ///
    /// With no `after` (a gap requested before the first real child), a
    /// dedicated zero-size anchor slot is inserted first and the gap hangs
    /// off it. Re-applying a gap after the same slot replaces the previous
    /// one; it is never double-inserted.
    pub(crate) fn apply(
        self,
        tree: &mut ViewTree,
        container: ViewId,
        gap: f32,
        after: Option<ViewId>,
    ) -> Result<Applied, TreeError> {
        let axis = tree.axis(container)?;
        let after = match after {
            Some(view) => view,
            // A leading gap hangs off a zero-size anchor slot; reuse one if
            // an earlier leading gap already inserted it.
            None => {
                let existing = tree
                    .arranged_slots(container)?
                    .first()
                    .filter(|slot| slot.kind == SlotKind::Anchor)
                    .map(|slot| slot.view);
                match existing {
                    Some(anchor) => anchor,
                    None => {
                        let anchor = tree.new_view();
                        tree.insert_arranged(container, 0, anchor, SlotKind::Anchor)?;
                        tree.add_constraint(Constraint::exact(anchor, axis.dimension(), 0.0));
                        anchor
                    }
                }
            }
        };
        let index = tree
            .index_of_arranged(container, after)
            .ok_or(TreeError::NotArranged(after))?;

        match self {
            Self::Native => {
                tree.set_spacing_after(container, after, gap)?;
                Ok(Applied { after, proxy: None })
            }
            Self::Synthetic => {
                // Replace any placeholder already following the slot.
                let existing = tree
                    .arranged_slots(container)?
                    .get(index + 1)
                    .filter(|slot| slot.kind == SlotKind::Spacing)
                    .map(|slot| slot.view);
                if let Some(placeholder) = existing {
                    tree.remove_arranged(container, placeholder)?;
                }
                let placeholder = tree.new_view();
                tree.insert_arranged(container, index + 1, placeholder, SlotKind::Spacing)?;
                tree.add_constraint(Constraint::exact(placeholder, axis.dimension(), gap));
                Ok(Applied {
                    after,
                    proxy: Some(placeholder),
                })
            }
        }
    }
}

/// Inserts or resizes a gap of size `gap` immediately after `after` in
/// `container`'s arranged list, so the rendered distance to the next real
/// child equals `gap` along the container's axis.
///
/// Passing `None` for `after` requests a leading gap before the first real
/// child. Re-applying the same gap after the same slot is a no-op in
/// observable geometry. A zero gap keeps the slot but sizes it to nothing,
/// so later lookups stay stable.
pub fn apply_spacing(
    tree: &mut ViewTree,
    container: ViewId,
    gap: f32,
    after: Option<ViewId>,
) -> Result<(), TreeError> {
    SpacingStrategy::for_tree(tree)
        .apply(tree, container, gap, after)
        .map(drop)
}

/// The effective gap rendered after an arranged view, regardless of which
/// spacing strategy produced it. Gaps whose placeholders are hidden (or,
/// natively, whose owning view is hidden) report zero.
pub fn gap_after(tree: &ViewTree, container: ViewId, view: ViewId) -> Result<f32, TreeError> {
    let axis = tree.axis(container)?;
    let index = tree
        .index_of_arranged(container, view)
        .ok_or(TreeError::NotArranged(view))?;

    if tree
        .capabilities()
        .contains(Capabilities::NATIVE_SPACING_AFTER)
    {
        let collapsed = tree.is_hidden(view)
            && tree
                .capabilities()
                .contains(Capabilities::HIDDEN_COLLAPSES_SPACING);
        if collapsed {
            return Ok(0.0);
        }
        return tree.spacing_after(container, view);
    }

    let mut total = 0.0;
    for slot in &tree.arranged_slots(container)?[index + 1..] {
        if slot.kind != SlotKind::Spacing {
            break;
        }
        if !tree.is_hidden(slot.view) {
            total += tree.fixed_extent(slot.view, axis.dimension()).unwrap_or(0.0);
        }
    }
    Ok(total)
}

/// The effective gap rendered before the first real child, zero when no
/// leading gap was declared.
pub fn leading_gap(tree: &ViewTree, container: ViewId) -> Result<f32, TreeError> {
    let anchor = tree
        .arranged_slots(container)?
        .first()
        .filter(|slot| slot.kind == SlotKind::Anchor)
        .map(|slot| slot.view);
    match anchor {
        Some(anchor) => gap_after(tree, container, anchor),
        None => Ok(0.0),
    }
}
