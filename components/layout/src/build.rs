//! The container builder.

use syrup_core::{SlotKind, TreeError, ViewId, ViewTree};

use crate::spacer::Attachment;
use crate::spacing::SpacingStrategy;
use crate::widget::Widget;

/// Lays a sequence of widget descriptors into a stack container, in order.
///
/// Spacing directives are delegated to spacing synthesis against the most
/// recent real slot (the no-predecessor case inserts a zero-size anchor
/// internally); every other descriptor that resolves to a view is appended
/// as a real arranged slot. Descriptors that resolve to nothing are skipped
/// with a warning rather than failing the build. An empty sequence builds an
/// empty container.
///
/// The resulting slot sequence reflects the declared order exactly, with
/// synthetic placeholders only where spacing directives demanded them.
pub fn build_into(
    tree: &mut ViewTree,
    container: ViewId,
    children: impl IntoIterator<Item = Widget>,
) -> Result<(), TreeError> {
    let strategy = SpacingStrategy::for_tree(tree);
    let mut previous: Option<ViewId> = None;
    for item in children {
        match item {
            Widget::Spacer(spacer) => {
                let applied = strategy.apply(tree, container, spacer.gap(), previous)?;
                if previous.is_none() {
                    // The leading anchor stands in for the missing
                    // predecessor from here on.
                    previous = Some(applied.after);
                }
                spacer.bind(Attachment {
                    container,
                    after: applied.after,
                    proxy: applied.proxy,
                });
            }
            widget => {
                if let Some(view) = widget.resolve(tree) {
                    tree.push_arranged(container, view, SlotKind::Real)?;
                    previous = Some(view);
                } else {
                    tracing::warn!(
                        container = container.index(),
                        "skipping widget that resolved to no view"
                    );
                }
            }
        }
    }
    Ok(())
}
