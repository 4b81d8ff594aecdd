use crate::{
    catalog::devices::{DeviceCatalog, DeviceModel},
    foundation::core::{Rect, ScreenSize, Vec2},
    foundation::error::SafeframeResult,
    geometry::normalize::normalize_anchors,
    geometry::scale::compensate,
    panel::node::PanelNode,
    panel::probe::ScreenProbe,
};

/// Result of [`SafeAreaAdjuster::initialize`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitOutcome {
    /// Live platform geometry was captured and applied.
    Applied,
    /// Preview geometry for the model was synthesized and applied.
    Simulated(DeviceModel),
    /// Preview was requested but no catalog entry matched the live
    /// resolution; nothing was written.
    Skipped,
}

/// Two-phase safe-area adjuster: capture geometry, then write anchors (and
/// optionally scale state) to a panel node.
///
/// Captured geometry is transient: it lives until the next
/// [`SafeAreaAdjuster::setup`] and is never persisted.
#[derive(Clone, Copy, Debug)]
pub struct SafeAreaAdjuster {
    auto_scale: bool,
    safe_area: Rect,
    screen: ScreenSize,
}

impl SafeAreaAdjuster {
    /// New adjuster with empty geometry.
    ///
    /// [`SafeAreaAdjuster::apply_cached`] fails validation until geometry
    /// arrives through [`setup`](Self::setup) or
    /// [`set_geometry`](Self::set_geometry).
    pub fn new(auto_scale: bool) -> Self {
        Self {
            auto_scale,
            safe_area: Rect::ZERO,
            screen: ScreenSize {
                width: 0,
                height: 0,
            },
        }
    }

    /// Whether scale compensation runs on apply.
    pub fn auto_scale(&self) -> bool {
        self.auto_scale
    }

    /// Currently captured `(safe_area, screen)` geometry.
    pub fn geometry(&self) -> (Rect, ScreenSize) {
        (self.safe_area, self.screen)
    }

    /// Replace the captured geometry without consulting a probe.
    ///
    /// This is the entry point for synthetic geometry (preview paths).
    pub fn set_geometry(&mut self, safe_area: Rect, screen: ScreenSize) {
        self.safe_area = safe_area;
        self.screen = screen;
    }

    /// Capture safe area and screen size from the probe.
    ///
    /// The screen side uses [`ScreenProbe::display_size`], which falls back
    /// to the live size for hosts without a distinct physical display.
    #[tracing::instrument(skip_all)]
    pub fn setup(&mut self, probe: &dyn ScreenProbe) {
        self.safe_area = probe.safe_area();
        self.screen = probe.display_size();
        tracing::debug!(
            width = self.screen.width,
            height = self.screen.height,
            "captured screen geometry"
        );
    }

    /// Refresh geometry from the probe, then apply it to the node.
    #[tracing::instrument(skip_all)]
    pub fn apply(&mut self, probe: &dyn ScreenProbe, node: &mut PanelNode) -> SafeframeResult<()> {
        self.setup(probe);
        self.apply_cached(node)
    }

    /// Apply the held geometry to the node without re-running setup.
    ///
    /// Used by the preview paths so synthetic geometry is not overwritten
    /// by live platform values. Anchors are always written; local scale and
    /// size delta only when auto-scale is enabled.
    pub fn apply_cached(&self, node: &mut PanelNode) -> SafeframeResult<()> {
        let anchors = normalize_anchors(self.safe_area, self.screen)?;
        node.anchor_min = anchors.min;
        node.anchor_max = anchors.max;

        if self.auto_scale {
            let comp = compensate(self.safe_area, self.screen, node.rect)?;
            node.local_scale = Vec2::new(comp.factor, comp.factor);
            node.size_delta = comp.size_delta;
        }
        Ok(())
    }

    /// Host initialization hook.
    ///
    /// With a preview catalog, resolve a device from the live resolution
    /// and apply its synthesized geometry, skipping the live path entirely;
    /// an unmatched resolution is a no-op. Without one, capture and apply
    /// live geometry.
    #[tracing::instrument(skip_all)]
    pub fn initialize(
        &mut self,
        probe: &dyn ScreenProbe,
        node: &mut PanelNode,
        preview: Option<&DeviceCatalog>,
    ) -> SafeframeResult<InitOutcome> {
        if let Some(catalog) = preview {
            return match crate::preview::simulate::simulate_on_init(catalog, probe, self, node)? {
                Some(model) => Ok(InitOutcome::Simulated(model)),
                None => Ok(InitOutcome::Skipped),
            };
        }
        self.apply(probe, node)?;
        Ok(InitOutcome::Applied)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/panel/adjuster.rs"]
mod tests;
