#![doc = include_str!("../README.md")]

pub use syrup_core::{
    Alignment, Attribute, Axis, Capabilities, Constraint, Dimension, Distribution, Slot, SlotKind,
    SlotRef, StackStyle, TreeError, ViewId, ViewTree,
};
pub use syrup_layout as layout;

pub mod prelude {
    //! Commonly used types for a single glob import.
    //!
    //! ```
    //! use syrup::prelude::*;
    //!
    //! let mut tree = ViewTree::new();
    //! let view = tree.new_view();
    //! let context = Context::new(&mut tree, Widget::from(view));
    //! assert_eq!(context.root_view(), Some(view));
    //! ```

    pub use syrup_core::{
        Alignment, Axis, Capabilities, Distribution, SlotKind, StackStyle, TreeError, ViewId,
        ViewTree,
    };
    pub use syrup_layout::{
        Center, Column, Context, ContextError, EdgeInsets, Frame, Overlay, OverlayAlignment,
        Padding, Row, Spacer, Widget, apply_spacing, build_into, gap_after, leading_gap,
    };
}
