use crate::foundation::core::{AnchorRect, Point, Rect, Vec2};

/// The mutable UI transform target the adjuster writes to.
///
/// The node is owned by the host UI tree; this crate updates its anchor,
/// scale, and size-delta fields but never manages its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PanelNode {
    /// Local rectangle (position and size in the panel's own space).
    pub rect: Rect,
    /// Lower-left anchor as a fraction of the parent's bounds.
    pub anchor_min: Point,
    /// Upper-right anchor as a fraction of the parent's bounds.
    pub anchor_max: Point,
    /// Local scale applied to the panel.
    pub local_scale: Vec2,
    /// Offset added to the local rect to counteract an applied scale.
    pub size_delta: Vec2,
}

impl Default for PanelNode {
    fn default() -> Self {
        Self {
            rect: Rect::ZERO,
            anchor_min: AnchorRect::FULL.min,
            anchor_max: AnchorRect::FULL.max,
            local_scale: Vec2::new(1.0, 1.0),
            size_delta: Vec2::ZERO,
        }
    }
}

impl PanelNode {
    /// A default node with the given local rect.
    pub fn with_rect(rect: Rect) -> Self {
        Self {
            rect,
            ..Self::default()
        }
    }
}
