use std::path::Path;

use crate::{
    foundation::core::{Rect, ScreenSize},
    foundation::error::{SafeframeError, SafeframeResult},
    panel::node::PanelNode,
    panel::probe::StaticProbe,
};

/// Host geometry captured as a serde fixture.
///
/// This is the JSON surface of the CLI harness: a screen size, a safe-area
/// rectangle, and an optional starting panel state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewportSpec {
    /// Live screen dimensions in pixels.
    pub screen: ScreenSize,
    /// Safe area in pixels, bottom-left origin.
    pub safe_area: Rect,
    /// Starting panel state; defaults when omitted.
    #[serde(default)]
    pub panel: Option<PanelNode>,
}

impl ViewportSpec {
    /// Parse a viewport from a JSON string.
    pub fn from_json(json: &str) -> SafeframeResult<Self> {
        serde_json::from_str(json).map_err(|e| SafeframeError::serde(e.to_string()))
    }

    /// Load a viewport from a JSON file.
    pub fn from_path(path: &Path) -> SafeframeResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| SafeframeError::Other(e.into()))?;
        Self::from_json(&json)
    }

    /// A probe reporting this viewport's geometry.
    pub fn probe(&self) -> StaticProbe {
        StaticProbe::new(self.screen, self.safe_area)
    }

    /// The starting panel state, defaulted when the fixture omits it.
    pub fn panel_or_default(&self) -> PanelNode {
        self.panel.unwrap_or_default()
    }
}
