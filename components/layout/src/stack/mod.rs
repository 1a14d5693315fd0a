//! Multi-child stack widgets.
//!
//! [`Row`] and [`Column`] own an ordered child list plus a
//! [`StackStyle`](syrup_core::StackStyle); materializing one creates a stack
//! container along the matching axis and runs the container builder over the
//! children. The container view itself represents the widget externally.

pub mod column;
pub mod row;

pub use column::Column;
pub use row::Row;
