//! Anchor-space normalization of pixel safe areas.

use crate::foundation::core::{AnchorRect, Point, Rect, ScreenSize};
use crate::foundation::error::SafeframeResult;

/// Convert an absolute pixel-space safe rectangle into normalized anchors.
///
/// `safe_area` is expressed in the same pixel space as `screen`, with the
/// origin at the bottom-left. Each anchor component is the corresponding
/// safe-area edge divided by the screen dimension on that axis.
///
/// Fails with a validation error when either screen dimension is zero; the
/// division is never performed, so `NaN`/infinity cannot leak into a panel.
///
/// Safe areas extending beyond the screen bounds are not guarded: the
/// resulting anchors simply leave `[0, 1]`. Callers that need the invariant
/// can check [`AnchorRect::is_unit`] on the result.
pub fn normalize_anchors(safe_area: Rect, screen: ScreenSize) -> SafeframeResult<AnchorRect> {
    screen.validate()?;
    let min = Point::new(
        safe_area.x0 / screen.width_f64(),
        safe_area.y0 / screen.height_f64(),
    );
    let max = Point::new(
        safe_area.x1 / screen.width_f64(),
        safe_area.y1 / screen.height_f64(),
    );
    Ok(AnchorRect { min, max })
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/normalize.rs"]
mod tests;
