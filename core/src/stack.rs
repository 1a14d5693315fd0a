//! Stack container model: axis, alignment policies, and arranged slots.

use std::collections::BTreeMap;

use crate::constraint::Dimension;
use crate::tree::ViewId;

/// The direction a stack container arranges its children in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Children flow leading-to-trailing.
    Horizontal,
    /// Children flow top-to-bottom.
    Vertical,
}

impl Axis {
    /// The dimension a gap along this axis occupies.
    #[must_use]
    pub const fn dimension(self) -> Dimension {
        match self {
            Self::Horizontal => Dimension::Width,
            Self::Vertical => Dimension::Height,
        }
    }
}

/// Cross-axis placement of arranged children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    /// Stretch children to the container's cross-axis extent.
    #[default]
    Fill,
    /// Align children to the leading cross-axis edge.
    Leading,
    /// Center children on the cross axis.
    Center,
    /// Align children to the trailing cross-axis edge.
    Trailing,
}

/// Main-axis distribution of arranged children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Distribution {
    /// Size children to their intrinsic extents.
    #[default]
    Fill,
    /// Give every child the same main-axis extent.
    FillEqually,
    /// Split the main axis proportionally to intrinsic extents.
    FillProportionally,
    /// Equalize the gaps between adjacent children.
    EqualSpacing,
    /// Equalize the distances between child centers.
    EqualCentering,
}

/// Main- and cross-axis policy for one stack container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StackStyle {
    /// Main-axis distribution.
    pub distribution: Distribution,
    /// Cross-axis alignment.
    pub alignment: Alignment,
}

impl StackStyle {
    /// Creates a style from explicit policies.
    #[must_use]
    pub const fn new(distribution: Distribution, alignment: Alignment) -> Self {
        Self {
            distribution,
            alignment,
        }
    }

    /// The default policy of a row: intrinsic sizing, leading-aligned.
    #[must_use]
    pub const fn row_default() -> Self {
        Self::new(Distribution::Fill, Alignment::Leading)
    }

    /// The default policy of a column: intrinsic sizing, stretched children.
    #[must_use]
    pub const fn column_default() -> Self {
        Self::new(Distribution::Fill, Alignment::Fill)
    }
}

/// What a single arranged slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// A real child with content of its own.
    Real,
    /// A content-less placeholder inserted solely to occupy gap space.
    Spacing,
    /// A zero-size slot that anchors a gap requested before the first real
    /// child.
    Anchor,
}

impl SlotKind {
    /// Whether the slot was inserted by spacing synthesis rather than by the
    /// caller.
    #[must_use]
    pub const fn is_synthetic(self) -> bool {
        matches!(self, Self::Spacing | Self::Anchor)
    }
}

/// One position in a stack container's ordered arranged-child list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// The view occupying the slot.
    pub view: ViewId,
    /// Whether the occupant is a real child or a synthetic placeholder.
    pub kind: SlotKind,
}

/// Container state attached to a stack view inside the arena.
#[derive(Debug)]
pub(crate) struct StackState {
    pub(crate) axis: Axis,
    pub(crate) style: StackStyle,
    pub(crate) slots: Vec<Slot>,
    /// Native per-gap spacing table, keyed by the view the gap follows.
    /// Populated only under `Capabilities::NATIVE_SPACING_AFTER`.
    pub(crate) spacing_after: BTreeMap<ViewId, f32>,
}

impl StackState {
    pub(crate) fn new(axis: Axis, style: StackStyle) -> Self {
        Self {
            axis,
            style,
            slots: Vec::new(),
            spacing_after: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_maps_to_gap_dimension() {
        assert_eq!(Axis::Horizontal.dimension(), Dimension::Width);
        assert_eq!(Axis::Vertical.dimension(), Dimension::Height);
    }

    #[test]
    fn per_axis_defaults_differ() {
        assert_eq!(StackStyle::row_default().alignment, Alignment::Leading);
        assert_eq!(StackStyle::column_default().alignment, Alignment::Fill);
        assert_eq!(StackStyle::default().distribution, Distribution::Fill);
    }

    #[test]
    fn synthetic_kinds() {
        assert!(SlotKind::Spacing.is_synthetic());
        assert!(SlotKind::Anchor.is_synthetic());
        assert!(!SlotKind::Real.is_synthetic());
    }
}
