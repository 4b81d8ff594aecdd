//! Host platform seam supplying live screen geometry.

use crate::foundation::core::{Rect, ScreenSize};

/// Supplies screen geometry from the host platform.
///
/// Implementations wrap whatever the host exposes: an engine's display
/// query, a windowing API, or fixed values for tests and the CLI harness.
pub trait ScreenProbe {
    /// Safe area in pixels, bottom-left origin.
    fn safe_area(&self) -> Rect;

    /// Live screen dimensions in pixels.
    fn screen_size(&self) -> ScreenSize;

    /// Physical display dimensions used when capturing geometry.
    ///
    /// Hosts whose live screen size drifts from the physical display (and
    /// would skew anchors) override this; everyone else inherits the live
    /// size.
    fn display_size(&self) -> ScreenSize {
        self.screen_size()
    }
}

/// Fixed-geometry probe backing tests and the CLI harness.
#[derive(Clone, Copy, Debug)]
pub struct StaticProbe {
    /// Live screen dimensions.
    pub screen: ScreenSize,
    /// Safe area in pixels, bottom-left origin.
    pub safe_area: Rect,
    /// Optional physical display override.
    pub display: Option<ScreenSize>,
}

impl StaticProbe {
    /// Probe reporting the given screen size and safe area.
    pub fn new(screen: ScreenSize, safe_area: Rect) -> Self {
        Self {
            screen,
            safe_area,
            display: None,
        }
    }

    /// Report a physical display size distinct from the live screen size.
    pub fn with_display(mut self, display: ScreenSize) -> Self {
        self.display = Some(display);
        self
    }
}

impl ScreenProbe for StaticProbe {
    fn safe_area(&self) -> Rect {
        self.safe_area
    }

    fn screen_size(&self) -> ScreenSize {
        self.screen
    }

    fn display_size(&self) -> ScreenSize {
        self.display.unwrap_or(self.screen)
    }
}
