//! Host toolkit feature detection.

bitflags::bitflags! {
    /// Optional stack-container features offered by the host toolkit.
    ///
    /// Capabilities are detected once, when a [`ViewTree`](crate::ViewTree)
    /// is constructed, and select a spacing strategy up front. Call sites
    /// never branch on toolkit versions themselves.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Capabilities: u8 {
        /// The stack container supports per-gap spacing after an arranged
        /// view natively. Without it, variable gaps are emulated with
        /// synthetic placeholder slots.
        const NATIVE_SPACING_AFTER = 0b0001;
        /// Hiding an arranged view natively collapses its adjacent gap.
        /// Without it, hidden state must be propagated to the synthetic
        /// placeholders by hand.
        const HIDDEN_COLLAPSES_SPACING = 0b0010;
    }
}

impl Capabilities {
    /// The full capability set of a current-generation toolkit.
    #[must_use]
    pub const fn modern() -> Self {
        Self::all()
    }

    /// A toolkit predating both native spacing primitives.
    #[must_use]
    pub const fn legacy() -> Self {
        Self::empty()
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::modern()
    }
}
