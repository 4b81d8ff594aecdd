//! Device preview without a live platform.
//!
//! Both entry points synthesize `(safe_area, screen)` from a
//! [`DeviceCatalog`] and apply through [`SafeAreaAdjuster::apply_cached`],
//! so live platform values never overwrite the synthetic geometry.

use crate::{
    catalog::devices::{DeviceCatalog, DeviceModel},
    foundation::core::Orientation,
    foundation::error::SafeframeResult,
    panel::adjuster::SafeAreaAdjuster,
    panel::node::PanelNode,
    panel::probe::ScreenProbe,
};

/// Which device and orientation to simulate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreviewRequest {
    /// Device model to synthesize.
    pub model: DeviceModel,
    /// Orientation to synthesize.
    pub orientation: Orientation,
}

impl PreviewRequest {
    /// Portrait preview of the given model.
    pub fn portrait(model: DeviceModel) -> Self {
        Self {
            model,
            orientation: Orientation::Portrait,
        }
    }

    /// Landscape preview of the given model.
    pub fn landscape(model: DeviceModel) -> Self {
        Self {
            model,
            orientation: Orientation::Landscape,
        }
    }
}

/// Synthesize geometry for an explicitly requested device and apply it.
///
/// Fails with a catalog error when the model is absent from the catalog.
#[tracing::instrument(skip(catalog, adjuster, node))]
pub fn simulate(
    catalog: &DeviceCatalog,
    request: PreviewRequest,
    adjuster: &mut SafeAreaAdjuster,
    node: &mut PanelNode,
) -> SafeframeResult<()> {
    let profile = catalog.profile(request.model)?;
    adjuster.set_geometry(
        profile.safe_area_for(request.orientation),
        profile.resolution_for(request.orientation),
    );
    adjuster.apply_cached(node)
}

/// Identify a device from the probe's live resolution and simulate it.
///
/// Returns `Ok(None)` without touching the node when no catalog entry
/// matches; orientation is inferred from which way the live resolution
/// matches the profile.
#[tracing::instrument(skip_all)]
pub fn simulate_on_init(
    catalog: &DeviceCatalog,
    probe: &dyn ScreenProbe,
    adjuster: &mut SafeAreaAdjuster,
    node: &mut PanelNode,
) -> SafeframeResult<Option<DeviceModel>> {
    let live = probe.screen_size();
    let Some(model) = catalog.identify(live) else {
        tracing::debug!(
            width = live.width,
            height = live.height,
            "no catalog entry for live resolution, skipping preview"
        );
        return Ok(None);
    };

    let orientation = catalog.profile(model)?.orientation_of(live);
    simulate(
        catalog,
        PreviewRequest { model, orientation },
        adjuster,
        node,
    )?;
    Ok(Some(model))
}

#[cfg(test)]
#[path = "../../tests/unit/preview/simulate.rs"]
mod tests;
