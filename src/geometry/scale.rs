//! Uniform scale compensation for safe-area shrink.

use crate::foundation::core::{Rect, ScreenSize, Vec2};
use crate::foundation::error::SafeframeResult;

/// Uniform scale factor plus the size-delta restoring a panel's logical
/// rect to its pre-scale footprint.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScaleCompensation {
    /// Uniform scale factor, in `[0, 1]` after clamping.
    pub factor: f64,
    /// Offset growing the local rect back so that, combined with the
    /// applied scale, the on-screen footprint matches the original.
    pub size_delta: Vec2,
}

impl ScaleCompensation {
    /// No-op compensation: unit scale, zero delta.
    pub const IDENTITY: Self = Self {
        factor: 1.0,
        size_delta: Vec2::ZERO,
    };
}

/// Ratio of safe-area height to screen height, clamped to `[0, 1]`.
pub fn height_rate(safe_area: Rect, screen: ScreenSize) -> SafeframeResult<f64> {
    screen.validate()?;
    Ok((safe_area.height() / screen.height_f64()).clamp(0.0, 1.0))
}

/// Compute the scale factor and size-delta for a panel with the given
/// pre-scale local rect.
///
/// The factor is the clamped height ratio, applied uniformly to both axes:
/// only the vertical shrink is measured, and the horizontal axis follows
/// it. The size-delta grows both axes of the local rect by the amount the
/// scale takes away.
pub fn compensate(
    safe_area: Rect,
    screen: ScreenSize,
    local_rect: Rect,
) -> SafeframeResult<ScaleCompensation> {
    let rate = height_rate(safe_area, screen)?;
    let (w, h) = (local_rect.width(), local_rect.height());
    Ok(ScaleCompensation {
        factor: rate,
        size_delta: Vec2::new(w - w * rate, h - h * rate),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/scale.rs"]
mod tests;
