//! Safe-area aware anchor adjustment for host-driven UI panels.
//!
//! Modern phone screens reserve parts of their surface for notches, rounded
//! corners, and system bars. This crate keeps a panel inside the remaining
//! **safe area** by driving the panel's normalized anchors from the device's
//! reported geometry:
//!
//! - the host implements [`ScreenEnvironment`] (safe-area rectangle and
//!   screen resolution) and [`AnchoredRect`] (the layout rectangle being
//!   driven),
//! - [`SafeAreaAdjuster`] normalizes the safe area into `0..1` anchor space,
//!   floors each edge by a configurable [`Margin`], and limits itself to the
//!   edges selected in an [`EdgeSet`],
//! - change detection makes the per-frame [`tick`](SafeAreaAdjuster::tick)
//!   cheap: anchors are rewritten only when the geometry, the resolution, or
//!   the configuration actually changed.
//!
//! All coordinates use a bottom-left screen origin with `y` growing upwards.
//!
//! # Example
//!
//! ```rust
//! use safe_area_panel::{
//!     PanelRect, Rect, Resolution, SafeAreaAdjuster, ScreenEnvironment, Vec2,
//! };
//!
//! /// A 1080x2220 phone screen with a 102px notch strip top and bottom.
//! struct Phone;
//!
//! impl ScreenEnvironment for Phone {
//!     fn safe_area(&self) -> Rect {
//!         Rect::new(0.0, 102.0, 1080.0, 2004.0)
//!     }
//!     fn resolution(&self) -> Resolution {
//!         Resolution::new(1080, 2220)
//!     }
//! }
//!
//! let mut panel = PanelRect::default();
//! let mut adjuster = SafeAreaAdjuster::new();
//! adjuster.init(&Phone, &mut panel);
//!
//! assert_eq!(panel.anchor_min, Vec2::new(0.0, 102.0 / 2220.0));
//! assert_eq!(panel.anchor_max, Vec2::new(1.0, 2106.0 / 2220.0));
//! ```

pub mod adjuster;
pub mod edges;
pub mod env;
pub mod geometry;
pub mod margin;
pub mod target;

pub use adjuster::SafeAreaAdjuster;
pub use edges::EdgeSet;
pub use env::ScreenEnvironment;
pub use geometry::{Rect, Resolution, Vec2};
pub use margin::Margin;
pub use target::{AnchoredRect, PanelRect};
