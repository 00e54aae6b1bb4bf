//! Minimum pixel margins enforced on top of the device-reported safe area.

/// Minimum margin in screen pixels for each edge of the panel.
///
/// The margin acts as a floor: an edge ends up inset by at least this many
/// pixels even when the device reports no safe-area inset there. Margins are
/// expected to be non-negative and smaller than the screen; values outside
/// that range are not validated and produce a degenerate (inverted) anchor
/// rectangle (see [`SafeAreaAdjuster::apply`](crate::SafeAreaAdjuster::apply)).
///
/// A [`Margin`] is an immutable value; reconfigure by replacing it wholesale.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margin {
    left: f32,
    top: f32,
    right: f32,
    bottom: f32,
}

impl Margin {
    /// Zero margin on every edge.
    pub const ZERO: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    /// Creates a margin from per-edge pixel values.
    #[must_use]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Returns the left-edge margin in pixels.
    #[must_use]
    pub const fn left(&self) -> f32 {
        self.left
    }

    /// Returns the top-edge margin in pixels.
    #[must_use]
    pub const fn top(&self) -> f32 {
        self.top
    }

    /// Returns the right-edge margin in pixels.
    #[must_use]
    pub const fn right(&self) -> f32 {
        self.right
    }

    /// Returns the bottom-edge margin in pixels.
    #[must_use]
    pub const fn bottom(&self) -> f32 {
        self.bottom
    }
}
