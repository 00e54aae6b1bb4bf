//! The seam toward the host environment.
//!
//! The adjuster never talks to a windowing system directly. The embedding
//! application implements [`ScreenEnvironment`] over whatever its platform
//! offers (a game engine's screen API, a compositor surface, a test fixture)
//! and hands it to the adjuster at tick time.

use crate::geometry::{Rect, Resolution};

/// Host-side source of screen geometry.
pub trait ScreenEnvironment {
    /// Returns the device safe area in screen pixels, bottom-left origin.
    ///
    /// The safe area is the sub-rectangle of the screen guaranteed not to be
    /// obscured by notches, rounded corners, or system UI overlays.
    fn safe_area(&self) -> Rect;

    /// Returns the current screen resolution in pixels.
    ///
    /// Hosts that cannot report geometry yet (for example on the very first
    /// frame) should return a resolution with a zero dimension; the adjuster
    /// treats it as "not ready" and retries on the next tick.
    fn resolution(&self) -> Resolution;

    /// Whether the host is in active playback mode.
    ///
    /// Design-time hosts (editors, previews) return `false` here so that
    /// panels configured with
    /// [`set_manual_outside_playback`](crate::SafeAreaAdjuster::set_manual_outside_playback)
    /// stop re-applying every tick. Hosts without such a mode keep the
    /// default.
    fn is_running(&self) -> bool {
        true
    }
}
