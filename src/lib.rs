//! Safeframe maps a device's safe area (the screen region not obscured by
//! notches, rounded corners, or system bars) onto a UI panel's normalized
//! anchor rectangle, optionally rescaling the panel so its footprint
//! survives the shrink.
//!
//! # Pipeline overview
//!
//! 1. **Capture**: a [`ScreenProbe`] supplies `(safe_area, screen_size)` in
//!    physical pixels with a bottom-left origin ([`SafeAreaAdjuster::setup`])
//! 2. **Normalize**: [`normalize_anchors`] converts the pixel-space safe
//!    rectangle into unit-interval anchors ([`AnchorRect`])
//! 3. **Compensate** (optional): [`compensate`] derives a uniform scale
//!    factor and a size-delta restoring the panel's logical rect
//! 4. **Write**: [`SafeAreaAdjuster::apply`] stores the results on a
//!    [`PanelNode`] owned by the host UI tree
//!
//! A [`DeviceCatalog`] of known device profiles backs the preview layer
//! ([`simulate`], [`simulate_on_init`]), which synthesizes the same inputs
//! without real hardware.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: every operation is pure recomputation
//!   from current inputs; recovery is re-applying with corrected inputs.
//! - **No IO in the library**: file handling lives in the CLI binary.
//! - **Host-agnostic**: an engine callback, a CLI harness, and a test
//!   runner drive the same two-phase `setup`/`apply` API.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod catalog;
mod foundation;
mod geometry;
mod panel;
mod preview;

pub use catalog::devices::{DeviceCatalog, DeviceModel, DeviceProfile};
pub use foundation::core::{AnchorRect, Orientation, Point, Rect, ScreenSize, Vec2};
pub use foundation::error::{SafeframeError, SafeframeResult};
pub use geometry::normalize::normalize_anchors;
pub use geometry::scale::{ScaleCompensation, compensate, height_rate};
pub use panel::adjuster::{InitOutcome, SafeAreaAdjuster};
pub use panel::node::PanelNode;
pub use panel::probe::{ScreenProbe, StaticProbe};
pub use panel::viewport::ViewportSpec;
pub use preview::simulate::{PreviewRequest, simulate, simulate_on_init};
