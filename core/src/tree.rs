//! The view arena.
//!
//! Every live view (content views, stack containers, and the synthetic
//! placeholders spacing synthesis inserts) is a record in one [`ViewTree`],
//! addressed by a stable [`ViewId`]. Arranged views carry a back-reference
//! to their container and slot index, which the arena keeps consistent on
//! every insert and remove, so container and sibling lookups never walk
//! parent pointers.
//!
//! The arena is single-threaded by contract: construction and every later
//! mutation are expected on the one thread that owns the hierarchy. Ids are
//! only meaningful for the tree that created them, and removal detaches a
//! view without deallocating its record.

use crate::capability::Capabilities;
use crate::constraint::{Constraint, Dimension};
use crate::error::TreeError;
use crate::stack::{Axis, Slot, SlotKind, StackState, StackStyle};

/// Identifier for a view stored inside a [`ViewTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ViewId(usize);

impl ViewId {
    /// Creates a [`ViewId`] from the raw index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index backing this identifier.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Back-reference from an arranged view to its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRef {
    /// The stack container holding the slot.
    pub container: ViewId,
    /// The slot's position in the container's arranged list.
    pub index: usize,
}

#[derive(Debug)]
struct ViewEntry {
    parent: Option<ViewId>,
    subviews: Vec<ViewId>,
    hidden: bool,
    constraints: Vec<Constraint>,
    stack: Option<StackState>,
    slot: Option<SlotRef>,
}

impl ViewEntry {
    fn new(stack: Option<StackState>) -> Self {
        Self {
            parent: None,
            subviews: Vec::new(),
            hidden: false,
            constraints: Vec::new(),
            stack,
            slot: None,
        }
    }
}

/// Arena owning every live view of one hierarchy.
#[derive(Debug, Default)]
pub struct ViewTree {
    views: Vec<ViewEntry>,
    capabilities: Capabilities,
}

impl ViewTree {
    /// Creates an arena backed by a fully capable host toolkit.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_capabilities(Capabilities::modern())
    }

    /// Creates an arena backed by a toolkit with the given capability set.
    #[must_use]
    pub const fn with_capabilities(capabilities: Capabilities) -> Self {
        Self {
            views: Vec::new(),
            capabilities,
        }
    }

    /// The capability set detected at construction.
    #[must_use]
    pub const fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Number of views ever created in this arena.
    #[must_use]
    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    /// Creates a detached content view.
    pub fn new_view(&mut self) -> ViewId {
        self.push_entry(ViewEntry::new(None))
    }

    /// Creates a detached stack-container view.
    pub fn new_stack(&mut self, axis: Axis, style: StackStyle) -> ViewId {
        self.push_entry(ViewEntry::new(Some(StackState::new(axis, style))))
    }

    fn push_entry(&mut self, entry: ViewEntry) -> ViewId {
        let id = ViewId::new(self.views.len());
        self.views.push(entry);
        id
    }

    fn entry(&self, view: ViewId) -> &ViewEntry {
        &self.views[view.index()]
    }

    fn entry_mut(&mut self, view: ViewId) -> &mut ViewEntry {
        &mut self.views[view.index()]
    }

    /// Whether the view is a stack container.
    #[must_use]
    pub fn is_stack(&self, view: ViewId) -> bool {
        self.entry(view).stack.is_some()
    }

    /// The layout axis of a stack container.
    pub fn axis(&self, container: ViewId) -> Result<Axis, TreeError> {
        self.stack_state(container).map(|state| state.axis)
    }

    /// The alignment/distribution policy of a stack container.
    pub fn style(&self, container: ViewId) -> Result<StackStyle, TreeError> {
        self.stack_state(container).map(|state| state.style)
    }

    /// The view's structural parent, arranged or not.
    #[must_use]
    pub fn parent(&self, view: ViewId) -> Option<ViewId> {
        self.entry(view).parent
    }

    /// The view's plain subview list, in installation order.
    #[must_use]
    pub fn subviews(&self, view: ViewId) -> &[ViewId] {
        &self.entry(view).subviews
    }

    /// Installs `child` as a plain (non-arranged) subview of `parent`,
    /// detaching it from any previous location first.
    pub fn add_subview(&mut self, parent: ViewId, child: ViewId) {
        self.detach(child);
        self.entry_mut(child).parent = Some(parent);
        self.entry_mut(parent).subviews.push(child);
    }

    /// The view's visibility flag.
    #[must_use]
    pub fn is_hidden(&self, view: ViewId) -> bool {
        self.entry(view).hidden
    }

    /// Sets the visibility flag without touching adjacent slots.
    pub fn set_hidden_flag(&mut self, view: ViewId, hidden: bool) {
        self.entry_mut(view).hidden = hidden;
    }

    /// Records a constraint on its owning view.
    pub fn add_constraint(&mut self, constraint: Constraint) {
        self.entry_mut(constraint.view()).constraints.push(constraint);
    }

    /// All constraints owned by the view, in insertion order.
    #[must_use]
    pub fn constraints(&self, view: ViewId) -> &[Constraint] {
        &self.entry(view).constraints
    }

    /// The last equal-to-constant extent recorded for the dimension, if any.
    #[must_use]
    pub fn fixed_extent(&self, view: ViewId, dimension: Dimension) -> Option<f32> {
        self.entry(view)
            .constraints
            .iter()
            .rev()
            .find(|c| c.is_exact(dimension))
            .map(Constraint::constant)
    }

    fn stack_state(&self, container: ViewId) -> Result<&StackState, TreeError> {
        self.entry(container)
            .stack
            .as_ref()
            .ok_or(TreeError::NotAStack(container))
    }

    fn stack_state_mut(&mut self, container: ViewId) -> Result<&mut StackState, TreeError> {
        self.entry_mut(container)
            .stack
            .as_mut()
            .ok_or(TreeError::NotAStack(container))
    }

    /// The container's ordered arranged-slot list.
    pub fn arranged_slots(&self, container: ViewId) -> Result<&[Slot], TreeError> {
        self.stack_state(container).map(|state| state.slots.as_slice())
    }

    /// Appends `view` as the container's last arranged slot.
    pub fn push_arranged(
        &mut self,
        container: ViewId,
        view: ViewId,
        kind: SlotKind,
    ) -> Result<(), TreeError> {
        let end = self.stack_state(container)?.slots.len();
        self.insert_arranged(container, end, view, kind)
    }

    /// Inserts `view` at `index` in the container's arranged list,
    /// detaching it from any previous location first. Indices past the end
    /// append.
    pub fn insert_arranged(
        &mut self,
        container: ViewId,
        index: usize,
        view: ViewId,
        kind: SlotKind,
    ) -> Result<(), TreeError> {
        self.stack_state(container)?;
        self.detach(view);
        let state = self.stack_state_mut(container)?;
        let index = index.min(state.slots.len());
        state.slots.insert(index, Slot { view, kind });
        self.entry_mut(view).parent = Some(container);
        self.entry_mut(container).subviews.push(view);
        self.renumber_from(container, index);
        Ok(())
    }

    /// Removes `view` from the container's arranged list, clearing its
    /// parent link and back-reference. The view's record stays in the arena.
    pub fn remove_arranged(&mut self, container: ViewId, view: ViewId) -> Result<(), TreeError> {
        let state = self.stack_state_mut(container)?;
        let Some(position) = state.slots.iter().position(|slot| slot.view == view) else {
            return Err(TreeError::NotArranged(view));
        };
        state.slots.remove(position);
        state.spacing_after.remove(&view);
        self.entry_mut(container).subviews.retain(|v| *v != view);
        let entry = self.entry_mut(view);
        entry.parent = None;
        entry.slot = None;
        self.renumber_from(container, position);
        Ok(())
    }

    /// The slot index of `view` inside `container`, if arranged there.
    #[must_use]
    pub fn index_of_arranged(&self, container: ViewId, view: ViewId) -> Option<usize> {
        self.entry(view)
            .slot
            .filter(|slot| slot.container == container)
            .map(|slot| slot.index)
    }

    /// The back-reference of an arranged view, `None` for detached or
    /// plain-installed views.
    #[must_use]
    pub fn slot_of(&self, view: ViewId) -> Option<SlotRef> {
        self.entry(view).slot
    }

    /// Records native spacing after an arranged view.
    ///
    /// Available only when the host advertises
    /// [`Capabilities::NATIVE_SPACING_AFTER`]; spacing synthesis falls back
    /// to placeholder slots otherwise and never calls this.
    pub fn set_spacing_after(
        &mut self,
        container: ViewId,
        after: ViewId,
        gap: f32,
    ) -> Result<(), TreeError> {
        if !self.capabilities.contains(Capabilities::NATIVE_SPACING_AFTER) {
            return Err(TreeError::NativeSpacingUnsupported);
        }
        if self.index_of_arranged(container, after).is_none() {
            self.stack_state(container)?;
            return Err(TreeError::NotArranged(after));
        }
        self.stack_state_mut(container)?.spacing_after.insert(after, gap);
        Ok(())
    }

    /// The native spacing recorded after an arranged view, zero by default.
    pub fn spacing_after(&self, container: ViewId, after: ViewId) -> Result<f32, TreeError> {
        Ok(self
            .stack_state(container)?
            .spacing_after
            .get(&after)
            .copied()
            .unwrap_or(0.0))
    }

    /// Removes `view` from wherever it is installed, arranged or plain.
    fn detach(&mut self, view: ViewId) {
        if let Some(slot) = self.entry(view).slot {
            let _ = self.remove_arranged(slot.container, view);
        } else if let Some(parent) = self.entry(view).parent {
            self.entry_mut(parent).subviews.retain(|v| *v != view);
            self.entry_mut(view).parent = None;
        }
    }

    /// Rewrites back-references for every slot at or after `from`.
    fn renumber_from(&mut self, container: ViewId, from: usize) {
        let affected: Vec<ViewId> = self
            .entry(container)
            .stack
            .as_ref()
            .map(|state| state.slots[from.min(state.slots.len())..].iter().map(|s| s.view).collect())
            .unwrap_or_default();
        for (offset, view) in affected.into_iter().enumerate() {
            self.entry_mut(view).slot = Some(SlotRef {
                container,
                index: from + offset,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arranged_slots_track_back_references() {
        let mut tree = ViewTree::new();
        let stack = tree.new_stack(Axis::Vertical, StackStyle::column_default());
        let a = tree.new_view();
        let b = tree.new_view();
        let c = tree.new_view();
        tree.push_arranged(stack, a, SlotKind::Real).unwrap();
        tree.push_arranged(stack, b, SlotKind::Real).unwrap();
        tree.push_arranged(stack, c, SlotKind::Real).unwrap();

        assert_eq!(tree.index_of_arranged(stack, b), Some(1));
        assert_eq!(tree.parent(b), Some(stack));

        tree.remove_arranged(stack, a).unwrap();
        assert_eq!(tree.index_of_arranged(stack, b), Some(0));
        assert_eq!(tree.index_of_arranged(stack, c), Some(1));
        assert_eq!(tree.parent(a), None);
        assert_eq!(tree.slot_of(a), None);
    }

    #[test]
    fn insert_renumbers_trailing_slots() {
        let mut tree = ViewTree::new();
        let stack = tree.new_stack(Axis::Horizontal, StackStyle::row_default());
        let a = tree.new_view();
        let b = tree.new_view();
        let gap = tree.new_view();
        tree.push_arranged(stack, a, SlotKind::Real).unwrap();
        tree.push_arranged(stack, b, SlotKind::Real).unwrap();
        tree.insert_arranged(stack, 1, gap, SlotKind::Spacing).unwrap();

        let kinds: Vec<SlotKind> = tree
            .arranged_slots(stack)
            .unwrap()
            .iter()
            .map(|slot| slot.kind)
            .collect();
        assert_eq!(kinds, [SlotKind::Real, SlotKind::Spacing, SlotKind::Real]);
        assert_eq!(tree.index_of_arranged(stack, b), Some(2));
    }

    #[test]
    fn arranged_operations_require_a_stack() {
        let mut tree = ViewTree::new();
        let plain = tree.new_view();
        let child = tree.new_view();
        assert_eq!(
            tree.push_arranged(plain, child, SlotKind::Real),
            Err(TreeError::NotAStack(plain))
        );
        assert_eq!(tree.arranged_slots(plain), Err(TreeError::NotAStack(plain)));
    }

    #[test]
    fn native_spacing_is_capability_gated() {
        let mut tree = ViewTree::with_capabilities(Capabilities::legacy());
        let stack = tree.new_stack(Axis::Vertical, StackStyle::column_default());
        let a = tree.new_view();
        tree.push_arranged(stack, a, SlotKind::Real).unwrap();
        assert_eq!(
            tree.set_spacing_after(stack, a, 8.0),
            Err(TreeError::NativeSpacingUnsupported)
        );

        let mut tree = ViewTree::new();
        let stack = tree.new_stack(Axis::Vertical, StackStyle::column_default());
        let a = tree.new_view();
        tree.push_arranged(stack, a, SlotKind::Real).unwrap();
        tree.set_spacing_after(stack, a, 8.0).unwrap();
        assert_eq!(tree.spacing_after(stack, a).unwrap(), 8.0);
    }

    #[test]
    fn reinstalling_moves_a_view() {
        let mut tree = ViewTree::new();
        let wrapper = tree.new_view();
        let stack = tree.new_stack(Axis::Vertical, StackStyle::column_default());
        let child = tree.new_view();

        tree.add_subview(wrapper, child);
        assert_eq!(tree.parent(child), Some(wrapper));

        tree.push_arranged(stack, child, SlotKind::Real).unwrap();
        assert_eq!(tree.parent(child), Some(stack));
        assert!(tree.subviews(wrapper).is_empty());
        assert_eq!(tree.index_of_arranged(stack, child), Some(0));
    }

    #[test]
    fn fixed_extent_reads_last_exact_constraint() {
        let mut tree = ViewTree::new();
        let view = tree.new_view();
        tree.add_constraint(Constraint::exact(view, Dimension::Height, 4.0));
        tree.add_constraint(Constraint::exact(view, Dimension::Height, 9.0));
        assert_eq!(tree.fixed_extent(view, Dimension::Height), Some(9.0));
        assert_eq!(tree.fixed_extent(view, Dimension::Width), None);
    }
}
