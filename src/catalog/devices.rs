//! Device preview catalog: known resolutions and safe-area rectangles.
//!
//! The catalog is an immutable value passed into the preview layer, never a
//! process-wide static, so tests and hosts can substitute their own tables.

use std::fmt;
use std::str::FromStr;

use crate::foundation::core::{Orientation, Rect, ScreenSize};
use crate::foundation::error::{SafeframeError, SafeframeResult};

/// Device models with a known safe-area profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum DeviceModel {
    /// iPhone X and Xs (3x, 1125x2436).
    IphoneXAndXs,
    /// iPhone XR (2x, 828x1792).
    IphoneXr,
    /// iPhone Xs Max (3x, 1242x2688).
    IphoneXsMax,
    /// iPad Pro 11" (2x, 1668x2388).
    IpadPro11,
    /// iPad Pro 12.9" 3rd generation (2x, 2048x2732).
    IpadPro12_9Gen3,
}

impl DeviceModel {
    /// Stable key used by the CLI and serialized listings.
    pub fn key(self) -> &'static str {
        match self {
            Self::IphoneXAndXs => "iphone-x-xs",
            Self::IphoneXr => "iphone-xr",
            Self::IphoneXsMax => "iphone-xs-max",
            Self::IpadPro11 => "ipad-pro-11",
            Self::IpadPro12_9Gen3 => "ipad-pro-12-9",
        }
    }
}

impl fmt::Display for DeviceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DeviceModel {
    type Err = SafeframeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "iphone-x-xs" => Ok(Self::IphoneXAndXs),
            "iphone-xr" => Ok(Self::IphoneXr),
            "iphone-xs-max" => Ok(Self::IphoneXsMax),
            "ipad-pro-11" => Ok(Self::IpadPro11),
            "ipad-pro-12-9" => Ok(Self::IpadPro12_9Gen3),
            other => Err(SafeframeError::catalog(format!(
                "unknown device key '{other}'"
            ))),
        }
    }
}

/// Resolution and safe-area data for one device model.
///
/// All values are raw physical pixels with a bottom-left origin. The
/// resolution is stored for portrait orientation; landscape values are
/// derived by swapping.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DeviceProfile {
    /// The device this profile describes.
    pub model: DeviceModel,
    /// Physical resolution in portrait orientation.
    pub resolution: ScreenSize,
    /// Safe area in portrait orientation.
    pub safe_area_portrait: Rect,
    /// Safe area in landscape orientation.
    pub safe_area_landscape: Rect,
}

impl DeviceProfile {
    /// Resolution for the given orientation (swapped for landscape).
    pub fn resolution_for(&self, orientation: Orientation) -> ScreenSize {
        if orientation.is_landscape() {
            self.resolution.swapped()
        } else {
            self.resolution
        }
    }

    /// Safe-area rectangle for the given orientation.
    pub fn safe_area_for(&self, orientation: Orientation) -> Rect {
        if orientation.is_landscape() {
            self.safe_area_landscape
        } else {
            self.safe_area_portrait
        }
    }

    /// Whether a live resolution matches this profile in either orientation.
    pub fn matches_resolution(&self, screen: ScreenSize) -> bool {
        screen == self.resolution || screen == self.resolution.swapped()
    }

    /// Infer orientation from a live resolution: landscape exactly when the
    /// live dimensions equal the swapped portrait resolution.
    pub fn orientation_of(&self, screen: ScreenSize) -> Orientation {
        if screen == self.resolution.swapped() {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// Immutable lookup table of device profiles.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct DeviceCatalog {
    profiles: Vec<DeviceProfile>,
}

impl DeviceCatalog {
    /// Build a catalog from an explicit profile list.
    pub fn new(profiles: Vec<DeviceProfile>) -> Self {
        Self { profiles }
    }

    /// The builtin device table.
    pub fn builtin() -> Self {
        // Safe-area values: logical safe insets (pt) * display scale.
        Self::new(vec![
            DeviceProfile {
                model: DeviceModel::IphoneXAndXs,
                resolution: ScreenSize {
                    width: 1125,
                    height: 2436,
                },
                safe_area_portrait: Rect::from_origin_size((0.0, 102.0), (1125.0, 2202.0)),
                safe_area_landscape: Rect::from_origin_size((132.0, 63.0), (2172.0, 1062.0)),
            },
            DeviceProfile {
                model: DeviceModel::IphoneXr,
                resolution: ScreenSize {
                    width: 828,
                    height: 1792,
                },
                safe_area_portrait: Rect::from_origin_size((0.0, 68.0), (828.0, 1636.0)),
                safe_area_landscape: Rect::from_origin_size((88.0, 42.0), (1616.0, 786.0)),
            },
            DeviceProfile {
                model: DeviceModel::IphoneXsMax,
                resolution: ScreenSize {
                    width: 1242,
                    height: 2688,
                },
                safe_area_portrait: Rect::from_origin_size((0.0, 102.0), (1242.0, 2454.0)),
                safe_area_landscape: Rect::from_origin_size((132.0, 63.0), (2424.0, 1179.0)),
            },
            DeviceProfile {
                model: DeviceModel::IpadPro11,
                resolution: ScreenSize {
                    width: 1668,
                    height: 2388,
                },
                safe_area_portrait: Rect::from_origin_size((0.0, 40.0), (1668.0, 2348.0)),
                safe_area_landscape: Rect::from_origin_size((0.0, 40.0), (2388.0, 1628.0)),
            },
            DeviceProfile {
                model: DeviceModel::IpadPro12_9Gen3,
                resolution: ScreenSize {
                    width: 2048,
                    height: 2732,
                },
                safe_area_portrait: Rect::from_origin_size((0.0, 40.0), (2048.0, 2692.0)),
                safe_area_landscape: Rect::from_origin_size((0.0, 40.0), (2732.0, 2008.0)),
            },
        ])
    }

    /// All profiles, in catalog order.
    pub fn profiles(&self) -> &[DeviceProfile] {
        &self.profiles
    }

    /// The profile for a model, or a catalog error when absent.
    pub fn profile(&self, model: DeviceModel) -> SafeframeResult<&DeviceProfile> {
        self.profiles
            .iter()
            .find(|p| p.model == model)
            .ok_or_else(|| SafeframeError::catalog(format!("device '{model}' not in catalog")))
    }

    /// First device whose resolution matches the screen in either
    /// orientation, or `None` when nothing matches.
    pub fn identify(&self, screen: ScreenSize) -> Option<DeviceModel> {
        self.profiles
            .iter()
            .find(|p| p.matches_resolution(screen))
            .map(|p| p.model)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/devices.rs"]
mod tests;
