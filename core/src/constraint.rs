//! Linear sizing and positioning relations.
//!
//! Constraints are plain records of the two relation shapes the sugar layer
//! needs: an attribute equal to a constant, or an attribute equal to a
//! sibling's attribute plus a constant offset. They are stored on their
//! owning view and read back by tests and backends; nothing here solves
//! them.

use crate::tree::ViewId;

/// A constrainable attribute of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    /// Leading edge.
    Leading,
    /// Trailing edge.
    Trailing,
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
    /// Horizontal center.
    CenterX,
    /// Vertical center.
    CenterY,
    /// Width extent.
    Width,
    /// Height extent.
    Height,
}

/// A sizing dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dimension {
    /// Horizontal extent.
    Width,
    /// Vertical extent.
    Height,
}

impl Dimension {
    /// The attribute this dimension constrains.
    #[must_use]
    pub const fn attribute(self) -> Attribute {
        match self {
            Self::Width => Attribute::Width,
            Self::Height => Attribute::Height,
        }
    }
}

/// One linear relation owned by a view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraint {
    view: ViewId,
    attribute: Attribute,
    target: Option<(ViewId, Attribute)>,
    constant: f32,
}

impl Constraint {
    /// `view.dimension == value`.
    #[must_use]
    pub const fn exact(view: ViewId, dimension: Dimension, value: f32) -> Self {
        Self {
            view,
            attribute: dimension.attribute(),
            target: None,
            constant: value,
        }
    }

    /// `view.attribute == target.target_attribute + offset`.
    #[must_use]
    pub const fn align(
        view: ViewId,
        attribute: Attribute,
        target: ViewId,
        target_attribute: Attribute,
        offset: f32,
    ) -> Self {
        Self {
            view,
            attribute,
            target: Some((target, target_attribute)),
            constant: offset,
        }
    }

    /// Pins all four edges of `view` flush to `target`.
    #[must_use]
    pub const fn pin_edges(view: ViewId, target: ViewId) -> [Self; 4] {
        [
            Self::align(view, Attribute::Leading, target, Attribute::Leading, 0.0),
            Self::align(view, Attribute::Trailing, target, Attribute::Trailing, 0.0),
            Self::align(view, Attribute::Top, target, Attribute::Top, 0.0),
            Self::align(view, Attribute::Bottom, target, Attribute::Bottom, 0.0),
        ]
    }

    /// The view owning the relation.
    #[must_use]
    pub const fn view(&self) -> ViewId {
        self.view
    }

    /// The constrained attribute.
    #[must_use]
    pub const fn attribute(&self) -> Attribute {
        self.attribute
    }

    /// The sibling side of the relation, absent for equal-to-constant.
    #[must_use]
    pub const fn target(&self) -> Option<(ViewId, Attribute)> {
        self.target
    }

    /// The constant or offset term.
    #[must_use]
    pub const fn constant(&self) -> f32 {
        self.constant
    }

    /// Whether this is an equal-to-constant relation on the given dimension.
    #[must_use]
    pub fn is_exact(&self, dimension: Dimension) -> bool {
        self.target.is_none() && self.attribute == dimension.attribute()
    }
}
