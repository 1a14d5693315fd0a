//! Overlay helpers for layering content on top of a base child.
//!
//! The wrapper's dimensions are locked to the base child; the layer never
//! influences the parent layout's sizing decisions. This makes overlays
//! suitable for badges and decorators.

use syrup_core::{Attribute, Constraint, ViewId, ViewTree};

use crate::widget::Widget;

/// Where a layer sits relative to its base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OverlayAlignment {
    /// Top-leading corner.
    TopLeading,
    /// Top edge, horizontally centered.
    Top,
    /// Top-trailing corner.
    TopTrailing,
    /// Leading edge, vertically centered.
    Leading,
    /// Both axes centered.
    #[default]
    Center,
    /// Trailing edge, vertically centered.
    Trailing,
    /// Bottom-leading corner.
    BottomLeading,
    /// Bottom edge, horizontally centered.
    Bottom,
    /// Bottom-trailing corner.
    BottomTrailing,
}

impl OverlayAlignment {
    /// The pair of attributes the layer shares with the wrapper.
    const fn anchors(self) -> (Attribute, Attribute) {
        match self {
            Self::TopLeading => (Attribute::Leading, Attribute::Top),
            Self::Top => (Attribute::CenterX, Attribute::Top),
            Self::TopTrailing => (Attribute::Trailing, Attribute::Top),
            Self::Leading => (Attribute::Leading, Attribute::CenterY),
            Self::Center => (Attribute::CenterX, Attribute::CenterY),
            Self::Trailing => (Attribute::Trailing, Attribute::CenterY),
            Self::BottomLeading => (Attribute::Leading, Attribute::Bottom),
            Self::Bottom => (Attribute::CenterX, Attribute::Bottom),
            Self::BottomTrailing => (Attribute::Trailing, Attribute::Bottom),
        }
    }
}

/// Places a layer over a base child.
///
/// The base is pinned flush to the wrapper, so the wrapper sizes itself by
/// the base alone; the layer is positioned by its [`OverlayAlignment`]. A
/// layer that fails to resolve is skipped, leaving the base intact.
#[derive(Debug)]
pub struct Overlay {
    base: Widget,
    layer: Widget,
    alignment: OverlayAlignment,
}

impl Overlay {
    /// Layers `layer` over `base`, centered by default.
    pub fn new(base: impl Into<Widget>, layer: impl Into<Widget>) -> Self {
        Self {
            base: base.into(),
            layer: layer.into(),
            alignment: OverlayAlignment::default(),
        }
    }

    /// Sets where the layer sits relative to the base.
    #[must_use]
    pub const fn alignment(mut self, alignment: OverlayAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub(crate) fn materialize(self, tree: &mut ViewTree) -> Option<ViewId> {
        let base = self.base.resolve(tree)?;
        let wrapper = tree.new_view();
        tree.add_subview(wrapper, base);
        for constraint in Constraint::pin_edges(base, wrapper) {
            tree.add_constraint(constraint);
        }
        match self.layer.resolve(tree) {
            Some(layer) => {
                tree.add_subview(wrapper, layer);
                let (horizontal, vertical) = self.alignment.anchors();
                tree.add_constraint(Constraint::align(
                    layer, horizontal, wrapper, horizontal, 0.0,
                ));
                tree.add_constraint(Constraint::align(layer, vertical, wrapper, vertical, 0.0));
            }
            None => {
                tracing::warn!("overlay layer resolved to no view; base kept without it");
            }
        }
        Some(wrapper)
    }
}
