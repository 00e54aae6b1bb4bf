//! The safe-area adjuster component.

use crate::edges::EdgeSet;
use crate::env::ScreenEnvironment;
use crate::geometry::{Rect, Resolution, Vec2};
use crate::margin::Margin;
use crate::target::AnchoredRect;

/// Inputs of the last successful apply, kept for change detection only.
///
/// After an apply this exactly equals the values that apply used; while it
/// matches the freshly read inputs, unforced applies are skipped.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Cached {
    safe_area: Rect,
    resolution: Resolution,
    edges: EdgeSet,
}

/// Keeps a panel's anchors aligned with the device safe area.
///
/// The adjuster reads the safe-area rectangle and screen resolution from a
/// [`ScreenEnvironment`], normalizes them into `0..1` anchor space, and
/// writes the result onto an [`AnchoredRect`] whenever the geometry or the
/// configuration changed since the last apply.
///
/// Configuration setters mark the component dirty; the next [`tick`](Self::tick)
/// then recomputes unconditionally. The host is expected to call
/// [`init`](Self::init) once when the panel becomes active, [`tick`](Self::tick)
/// from its frame loop, and [`teardown`](Self::teardown) when the panel is
/// deactivated.
#[derive(Debug, Clone, Default)]
pub struct SafeAreaAdjuster {
    control_edges: EdgeSet,
    minimum_margin: Margin,
    manual_outside_playback: bool,
    dirty: bool,
    cached: Option<Cached>,
}

impl SafeAreaAdjuster {
    /// Creates an adjuster that constrains all four edges with no extra
    /// margin.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            control_edges: EdgeSet::ALL,
            minimum_margin: Margin::ZERO,
            manual_outside_playback: false,
            dirty: false,
            cached: None,
        }
    }

    /// Returns the set of edges the adjuster is allowed to constrain.
    #[must_use]
    pub const fn control_edges(&self) -> EdgeSet {
        self.control_edges
    }

    /// Selects which edges the adjuster may constrain.
    ///
    /// Edges outside the set span the full extent on their axis.
    pub fn set_control_edges(&mut self, edges: EdgeSet) {
        self.control_edges = edges;
        self.dirty = true;
    }

    /// Returns the minimum per-edge margin.
    #[must_use]
    pub const fn minimum_margin(&self) -> Margin {
        self.minimum_margin
    }

    /// Sets the minimum per-edge margin enforced on top of the reported safe
    /// area.
    pub fn set_minimum_margin(&mut self, margin: Margin) {
        self.minimum_margin = margin;
        self.dirty = true;
    }

    /// Returns whether periodic re-applies are suppressed outside playback.
    #[must_use]
    pub const fn manual_outside_playback(&self) -> bool {
        self.manual_outside_playback
    }

    /// When enabled, [`tick`](Self::tick) stops re-applying while the host
    /// reports [`is_running`](ScreenEnvironment::is_running) as false.
    ///
    /// Configuration changes and explicit forced applies still go through.
    pub fn set_manual_outside_playback(&mut self, manual: bool) {
        self.manual_outside_playback = manual;
        self.dirty = true;
    }

    /// Marks the component dirty so the next tick recomputes unconditionally.
    ///
    /// This is the notification path for hosts that edit configuration
    /// out-of-band (for example an inspector writing fields directly).
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Applies the safe area once when the panel becomes active.
    ///
    /// Respects the manual-outside-playback gate, matching the periodic
    /// path: a design-time host with that flag set gets no automatic apply
    /// on activation either.
    pub fn init(&mut self, env: &impl ScreenEnvironment, target: &mut impl AnchoredRect) {
        if self.manual_outside_playback && !env.is_running() {
            return;
        }
        self.apply(env, target, true);
    }

    /// Per-frame entry point, called by the host's update loop.
    ///
    /// A pending configuration change forces a recompute regardless of the
    /// playback gate; otherwise the gate may skip the frame, and an ungated
    /// frame re-applies only if the inputs changed.
    pub fn tick(&mut self, env: &impl ScreenEnvironment, target: &mut impl AnchoredRect) {
        if self.dirty {
            self.dirty = false;
            self.apply(env, target, true);
            return;
        }

        if self.manual_outside_playback && !env.is_running() {
            return;
        }

        self.apply(env, target, false);
    }

    /// Releases the adjuster's hold on the target when the panel is
    /// deactivated.
    ///
    /// Clears the cached inputs so a later [`init`](Self::init) starts from a
    /// clean slate; the target itself keeps its last-written anchors.
    pub fn teardown(&mut self) {
        self.cached = None;
        tracing::debug!("released panel anchor tracking");
    }

    /// Reads the screen geometry and drives the target's anchors.
    ///
    /// The computed anchor rectangle is the reported safe area, floored by
    /// the minimum margin on each edge, scaled into `0..1` by the screen
    /// resolution. Edges absent from the control set are reset to the
    /// unconstrained extreme (0 for left/bottom, 1 for right/top).
    ///
    /// Unless `force` is set, the write is skipped while the freshly read
    /// inputs equal the inputs of the last apply. A target whose `anchor_max`
    /// is the zero vector is treated as never applied (some hosts reset
    /// rectangles to that state, for example on undo) and always rewritten.
    ///
    /// Two anomalies are tolerated rather than signaled: a zero resolution
    /// aborts without side effects ("host not ready", retried next tick),
    /// and a margin exceeding the screen produces an inverted anchor
    /// rectangle that is written as-is.
    pub fn apply(
        &mut self,
        env: &impl ScreenEnvironment,
        target: &mut impl AnchoredRect,
        force: bool,
    ) {
        let safe_area = env.safe_area();
        let resolution = env.resolution();

        if resolution.is_degenerate() {
            tracing::trace!(?resolution, "screen not ready, deferring anchor update");
            return;
        }

        let fresh = Cached {
            safe_area,
            resolution,
            edges: self.control_edges,
        };

        if !force && target.anchor_max() != Vec2::ZERO && self.cached == Some(fresh) {
            tracing::trace!("safe area unchanged, skipping");
            return;
        }

        self.cached = Some(fresh);

        let width = resolution.width as f32;
        let height = resolution.height as f32;
        let margin = self.minimum_margin;

        // Floor each edge by the configured margin. Oversized margins invert
        // the rectangle; that is propagated, not guarded.
        let x_min = safe_area.x().max(margin.left());
        let y_min = safe_area.y().max(margin.bottom());
        let x_max = safe_area.max_x().min(width - margin.right());
        let y_max = safe_area.max_y().min(height - margin.top());

        let mut anchor_min = Vec2::new(x_min / width, y_min / height);
        let mut anchor_max = Vec2::new(x_max / width, y_max / height);

        if !self.control_edges.contains(EdgeSet::LEFT) {
            anchor_min.x = 0.0;
        }
        if !self.control_edges.contains(EdgeSet::RIGHT) {
            anchor_max.x = 1.0;
        }
        if !self.control_edges.contains(EdgeSet::TOP) {
            anchor_max.y = 1.0;
        }
        if !self.control_edges.contains(EdgeSet::BOTTOM) {
            anchor_min.y = 0.0;
        }

        tracing::debug!(?anchor_min, ?anchor_max, "driving panel anchors");

        target.set_anchored_position(Vec2::ZERO);
        target.set_size_delta(Vec2::ZERO);
        target.set_anchor_min(anchor_min);
        target.set_anchor_max(anchor_max);
    }
}
