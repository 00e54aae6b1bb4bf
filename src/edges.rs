//! Edge selection for safe-area control.

bitflags::bitflags! {
    /// Edges of the panel that the adjuster is allowed to constrain.
    ///
    /// Edges absent from the set are pinned to the full `0..1` extent on
    /// their axis, letting the panel extend under the corresponding screen
    /// cutout or system bar.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EdgeSet: u8 {
        /// Left edge.
        const LEFT = 0b0001;
        /// Right edge.
        const RIGHT = 0b0010;
        /// Top edge.
        const TOP = 0b0100;
        /// Bottom edge.
        const BOTTOM = 0b1000;
        /// Both horizontal edges.
        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();
        /// Both vertical edges.
        const VERTICAL = Self::TOP.bits() | Self::BOTTOM.bits();
        /// All four edges.
        const ALL = Self::HORIZONTAL.bits() | Self::VERTICAL.bits();
    }
}

impl Default for EdgeSet {
    /// All four edges are constrained by default.
    fn default() -> Self {
        Self::ALL
    }
}
