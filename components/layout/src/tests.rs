//! Behavior tests across the builder, spacing synthesis, and context.

use syrup_core::{Capabilities, SlotKind, TreeError, ViewId, ViewTree};

use crate::{
    Center, Column, Context, ContextError, EdgeInsets, Overlay, Padding, Row, Spacer, Widget,
    apply_spacing, gap_after, leading_gap,
};

fn legacy_tree() -> ViewTree {
    ViewTree::with_capabilities(Capabilities::legacy())
}

fn slot_kinds(tree: &ViewTree, container: ViewId) -> Vec<SlotKind> {
    tree.arranged_slots(container)
        .unwrap()
        .iter()
        .map(|slot| slot.kind)
        .collect()
}

fn real_views(tree: &ViewTree, container: ViewId) -> Vec<ViewId> {
    tree.arranged_slots(container)
        .unwrap()
        .iter()
        .filter(|slot| slot.kind == SlotKind::Real)
        .map(|slot| slot.view)
        .collect()
}

#[test]
fn build_preserves_declared_order() {
    let mut tree = legacy_tree();
    let a = tree.new_view();
    let b = tree.new_view();
    let c = tree.new_view();

    let column = Column::new(vec![
        a.into(),
        Spacer::new(10.0).into(),
        b.into(),
        Spacer::new(4.0).into(),
        c.into(),
    ]);
    let container = Widget::from(column).resolve(&mut tree).unwrap();

    assert_eq!(real_views(&tree, container), [a, b, c]);
    assert_eq!(
        slot_kinds(&tree, container),
        [
            SlotKind::Real,
            SlotKind::Spacing,
            SlotKind::Real,
            SlotKind::Spacing,
            SlotKind::Real,
        ]
    );
}

#[test]
fn applying_the_same_gap_twice_is_idempotent() {
    let mut tree = legacy_tree();
    let container = Widget::from(Row::new(Vec::new())).resolve(&mut tree).unwrap();
    let a = tree.new_view();
    tree.push_arranged(container, a, SlotKind::Real).unwrap();

    apply_spacing(&mut tree, container, 10.0, Some(a)).unwrap();
    apply_spacing(&mut tree, container, 10.0, Some(a)).unwrap();

    assert_eq!(slot_kinds(&tree, container), [SlotKind::Real, SlotKind::Spacing]);
    assert_eq!(gap_after(&tree, container, a).unwrap(), 10.0);
}

#[test]
fn leading_gap_synthesizes_anchor_and_placeholder() {
    let mut tree = legacy_tree();
    let a = tree.new_view();
    let container = Widget::from(Column::new(vec![Spacer::new(8.0).into(), a.into()]))
        .resolve(&mut tree)
        .unwrap();

    assert_eq!(
        slot_kinds(&tree, container),
        [SlotKind::Anchor, SlotKind::Spacing, SlotKind::Real]
    );
    assert_eq!(leading_gap(&tree, container).unwrap(), 8.0);
    assert_eq!(real_views(&tree, container), [a]);
}

#[test]
fn hiding_a_view_collapses_its_trailing_gap() {
    let mut tree = legacy_tree();
    let a = tree.new_view();
    let b = tree.new_view();
    let column = Column::new(vec![a.into(), Spacer::new(10.0).into(), b.into()]);
    let context = Context::new(&mut tree, column);
    let container = context.root_view().unwrap();
    let placeholder = tree.arranged_slots(container).unwrap()[1].view;

    context.set_hidden(&mut tree, a, true).unwrap();
    assert!(tree.is_hidden(a));
    assert!(tree.is_hidden(placeholder));
    assert_eq!(gap_after(&tree, container, a).unwrap(), 0.0);

    context.set_hidden(&mut tree, a, false).unwrap();
    assert!(!tree.is_hidden(placeholder));
    assert_eq!(gap_after(&tree, container, a).unwrap(), 10.0);
}

#[test]
fn hiding_never_touches_an_unrelated_run() {
    let mut tree = legacy_tree();
    let a = tree.new_view();
    let b = tree.new_view();
    let c = tree.new_view();
    let column = Column::new(vec![
        a.into(),
        Spacer::new(5.0).into(),
        b.into(),
        Spacer::new(8.0).into(),
        c.into(),
    ]);
    let context = Context::new(&mut tree, column);
    let container = context.root_view().unwrap();

    context.set_hidden(&mut tree, c, true).unwrap();

    // The run between a and b still renders; only c's own gap collapsed.
    assert_eq!(gap_after(&tree, container, a).unwrap(), 5.0);
    assert_eq!(gap_after(&tree, container, b).unwrap(), 0.0);
}

#[test]
fn respacing_changes_exactly_one_placeholder() {
    let mut tree = legacy_tree();
    let a = tree.new_view();
    let b = tree.new_view();
    let c = tree.new_view();
    let second = Spacer::new(8.0);
    let column = Column::new(vec![
        a.into(),
        Spacer::new(5.0).into(),
        b.into(),
        second.clone().into(),
        c.into(),
    ]);
    let context = Context::new(&mut tree, column);
    let container = context.root_view().unwrap();
    let first_placeholder = tree.arranged_slots(container).unwrap()[1].view;

    context.set_spacing(&mut tree, &second, 20.0).unwrap();

    assert_eq!(
        slot_kinds(&tree, container),
        [
            SlotKind::Real,
            SlotKind::Spacing,
            SlotKind::Real,
            SlotKind::Spacing,
            SlotKind::Real,
        ]
    );
    assert_eq!(real_views(&tree, container), [a, b, c]);
    assert_eq!(tree.arranged_slots(container).unwrap()[1].view, first_placeholder);
    assert_eq!(gap_after(&tree, container, a).unwrap(), 5.0);
    assert_eq!(gap_after(&tree, container, b).unwrap(), 20.0);
    assert_eq!(second.gap(), 20.0);
}

#[test]
fn mutating_a_detached_view_fails_and_changes_nothing() {
    let mut tree = legacy_tree();
    let a = tree.new_view();
    let column = Column::new(vec![a.into(), Spacer::new(6.0).into()]);
    let context = Context::new(&mut tree, column);
    let container = context.root_view().unwrap();
    let before = tree.arranged_slots(container).unwrap().to_vec();

    let stray = tree.new_view();
    assert_eq!(
        context.set_hidden(&mut tree, stray, true),
        Err(ContextError::NotStackManaged(stray))
    );
    assert!(!tree.is_hidden(stray));
    assert_eq!(tree.arranged_slots(container).unwrap(), before);
}

#[test]
fn unbuilt_spacer_cannot_be_respaced() {
    let mut tree = legacy_tree();
    let context = Context::new(&mut tree, Column::new(Vec::new()));
    let spacer = Spacer::new(7.0);
    assert_eq!(
        context.set_spacing(&mut tree, &spacer, 9.0),
        Err(ContextError::SpacerNotBuilt)
    );
    assert!(!spacer.is_built());
}

#[test]
fn strategies_are_observably_identical() {
    for capabilities in [Capabilities::modern(), Capabilities::legacy()] {
        let mut tree = ViewTree::with_capabilities(capabilities);
        let a = tree.new_view();
        let b = tree.new_view();
        let gap = Spacer::new(12.0);
        let column = Column::new(vec![
            Spacer::new(6.0).into(),
            a.into(),
            gap.clone().into(),
            b.into(),
        ]);
        let context = Context::new(&mut tree, column);
        let container = context.root_view().unwrap();

        assert_eq!(leading_gap(&tree, container).unwrap(), 6.0);
        assert_eq!(gap_after(&tree, container, a).unwrap(), 12.0);
        assert_eq!(real_views(&tree, container), [a, b]);

        context.set_spacing(&mut tree, &gap, 25.0).unwrap();
        assert_eq!(gap_after(&tree, container, a).unwrap(), 25.0);

        context.set_hidden(&mut tree, a, true).unwrap();
        assert_eq!(gap_after(&tree, container, a).unwrap(), 0.0);
    }
}

#[test]
fn native_path_records_no_placeholders() {
    let mut tree = ViewTree::new();
    let a = tree.new_view();
    let b = tree.new_view();
    let column = Column::new(vec![a.into(), Spacer::new(10.0).into(), b.into()]);
    let container = Widget::from(column).resolve(&mut tree).unwrap();

    assert_eq!(slot_kinds(&tree, container), [SlotKind::Real, SlotKind::Real]);
    assert_eq!(tree.spacing_after(container, a).unwrap(), 10.0);
}

#[test]
fn later_directives_replace_earlier_ones_in_the_same_gap() {
    let mut tree = legacy_tree();
    let a = tree.new_view();
    let b = tree.new_view();
    let first = Spacer::new(4.0);
    let column = Column::new(vec![
        a.into(),
        first.clone().into(),
        Spacer::new(9.0).into(),
        b.into(),
    ]);
    let container = Widget::from(column).resolve(&mut tree).unwrap();

    assert_eq!(
        slot_kinds(&tree, container),
        [SlotKind::Real, SlotKind::Spacing, SlotKind::Real]
    );
    assert_eq!(gap_after(&tree, container, a).unwrap(), 9.0);

    // The displaced spacer's placeholder is gone; re-spacing it reports so.
    let context = Context::new(&mut tree, Column::new(Vec::new()));
    assert_eq!(
        context.set_spacing(&mut tree, &first, 2.0),
        Err(ContextError::Detached)
    );
}

#[test]
fn zero_gap_keeps_the_slot() {
    let mut tree = legacy_tree();
    let a = tree.new_view();
    let b = tree.new_view();
    let gap = Spacer::new(10.0);
    let column = Column::new(vec![a.into(), gap.clone().into(), b.into()]);
    let context = Context::new(&mut tree, column);
    let container = context.root_view().unwrap();

    context.set_spacing(&mut tree, &gap, 0.0).unwrap();

    assert_eq!(
        slot_kinds(&tree, container),
        [SlotKind::Real, SlotKind::Spacing, SlotKind::Real]
    );
    assert_eq!(gap_after(&tree, container, a).unwrap(), 0.0);
}

#[test]
fn root_resolution_is_uniform() {
    let mut tree = legacy_tree();

    let leaf = tree.new_view();
    let context = Context::new(&mut tree, Widget::from(leaf));
    assert_eq!(context.root_view(), Some(leaf));

    let inner = tree.new_view();
    let context = Context::new(&mut tree, Padding::new(EdgeInsets::all(8.0), inner));
    let wrapper = context.root_view().unwrap();
    assert_ne!(wrapper, inner);
    assert_eq!(tree.parent(inner), Some(wrapper));

    let context = Context::new(&mut tree, Row::new(Vec::new()));
    assert!(tree.is_stack(context.root_view().unwrap()));

    let context = Context::new(&mut tree, Spacer::new(3.0));
    assert_eq!(context.root_view(), None);
}

#[test]
fn optional_children_are_filtered() {
    let mut tree = legacy_tree();
    let a = tree.new_view();
    let b = tree.new_view();
    let row: Row = [Some(Widget::from(a)), None, Some(Widget::from(b))]
        .into_iter()
        .collect();
    let container = Widget::from(row).resolve(&mut tree).unwrap();
    assert_eq!(real_views(&tree, container), [a, b]);
}

#[test]
fn unresolvable_descriptors_are_skipped() {
    let mut tree = legacy_tree();
    let a = tree.new_view();
    let broken = Padding::new(EdgeInsets::all(4.0), Spacer::new(2.0));
    let column = Column::new(vec![broken.into(), a.into()]);
    let container = Widget::from(column).resolve(&mut tree).unwrap();

    assert_eq!(real_views(&tree, container), [a]);
    assert_eq!(slot_kinds(&tree, container), [SlotKind::Real]);
}

#[test]
fn empty_sequences_build_empty_containers() {
    let mut tree = legacy_tree();
    let container = Widget::from(Column::new(Vec::new())).resolve(&mut tree).unwrap();
    assert!(tree.arranged_slots(container).unwrap().is_empty());
}

#[test]
fn nested_widgets_compose() {
    let mut tree = legacy_tree();
    let icon = tree.new_view();
    let label = tree.new_view();
    let badge = tree.new_view();

    let row = Row::new(vec![
        Overlay::new(icon, badge).into(),
        Spacer::new(4.0).into(),
        Center::new(Padding::new(EdgeInsets::symmetric(2.0, 6.0), label)).into(),
    ]);
    let container = Widget::from(row).resolve(&mut tree).unwrap();

    let reals = real_views(&tree, container);
    assert_eq!(reals.len(), 2);
    // The overlay wrapper, not the icon, occupies the slot.
    assert_ne!(reals[0], icon);
    assert_eq!(tree.parent(icon), Some(reals[0]));
    assert_eq!(gap_after(&tree, container, reals[0]).unwrap(), 4.0);
}

#[test]
fn spacing_requires_an_arranged_anchor() {
    let mut tree = legacy_tree();
    let container = Widget::from(Row::new(Vec::new())).resolve(&mut tree).unwrap();
    let loose = tree.new_view();
    assert_eq!(
        apply_spacing(&mut tree, container, 5.0, Some(loose)),
        Err(TreeError::NotArranged(loose))
    );
}
