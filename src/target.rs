//! The seam toward the host-owned layout rectangle.

use crate::geometry::Vec2;

/// A layout rectangle positioned by normalized anchors within its parent.
///
/// The adjuster drives four properties of the target and reads one back
/// (`anchor_max`, to detect a rectangle that was reset externally). The
/// target's lifecycle stays entirely with the host; the adjuster is its sole
/// writer by convention but does not enforce exclusivity.
pub trait AnchoredRect {
    /// Returns the current normalized upper-right anchor.
    fn anchor_max(&self) -> Vec2;

    /// Sets the normalized lower-left anchor.
    fn set_anchor_min(&mut self, value: Vec2);

    /// Sets the normalized upper-right anchor.
    fn set_anchor_max(&mut self, value: Vec2);

    /// Sets the pixel offset of the rectangle relative to its anchors.
    fn set_anchored_position(&mut self, value: Vec2);

    /// Sets the pixel size difference relative to the anchored extent.
    fn set_size_delta(&mut self, value: Vec2);
}

/// Plain value implementation of [`AnchoredRect`].
///
/// Useful for hosts without their own rectangle type and as a test double.
/// A freshly constructed [`PanelRect`] has `anchor_max` at zero, which the
/// adjuster reads as "never applied" and always (re)applies to.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelRect {
    /// Normalized lower-left anchor.
    pub anchor_min: Vec2,
    /// Normalized upper-right anchor.
    pub anchor_max: Vec2,
    /// Pixel offset relative to the anchors.
    pub anchored_position: Vec2,
    /// Pixel size difference relative to the anchored extent.
    pub size_delta: Vec2,
}

impl AnchoredRect for PanelRect {
    fn anchor_max(&self) -> Vec2 {
        self.anchor_max
    }

    fn set_anchor_min(&mut self, value: Vec2) {
        self.anchor_min = value;
    }

    fn set_anchor_max(&mut self, value: Vec2) {
        self.anchor_max = value;
    }

    fn set_anchored_position(&mut self, value: Vec2) {
        self.anchored_position = value;
    }

    fn set_size_delta(&mut self, value: Vec2) {
        self.size_delta = value;
    }
}
