//! Arena error values.

use thiserror::Error;

use crate::tree::ViewId;

/// Errors reported by arranged-slot and spacing operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    /// The operation requires a stack container.
    #[error("view {0:?} is not a stack container")]
    NotAStack(ViewId),
    /// The view is not arranged in the given container.
    #[error("view {0:?} is not arranged in the container")]
    NotArranged(ViewId),
    /// The host toolkit offers no native per-gap spacing primitive.
    #[error("host toolkit does not support native spacing after a view")]
    NativeSpacingUnsupported,
}
