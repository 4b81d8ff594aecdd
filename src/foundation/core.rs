use crate::foundation::error::{SafeframeError, SafeframeResult};

pub use kurbo::{Point, Rect, Vec2};

/// Physical screen dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScreenSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ScreenSize {
    /// Create a screen size, rejecting zero dimensions.
    pub fn new(width: u32, height: u32) -> SafeframeResult<Self> {
        let size = Self { width, height };
        size.validate()?;
        Ok(size)
    }

    /// Reject zero dimensions before they reach a division.
    ///
    /// Both dimensions are divisors during anchor normalization, so this is
    /// re-checked at the point of use rather than trusted from construction
    /// (deserialized values never pass through [`ScreenSize::new`]).
    pub fn validate(self) -> SafeframeResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SafeframeError::validation(format!(
                "screen dimensions must be > 0, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// The same size with width and height exchanged (orientation flip).
    pub fn swapped(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Width as `f64`.
    pub fn width_f64(self) -> f64 {
        f64::from(self.width)
    }

    /// Height as `f64`.
    pub fn height_f64(self) -> f64 {
        f64::from(self.height)
    }

    /// The full-screen rectangle `(0, 0, width, height)`.
    pub fn to_rect(self) -> Rect {
        Rect::new(0.0, 0.0, self.width_f64(), self.height_f64())
    }
}

/// Screen orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Orientation {
    /// Height is the long axis.
    Portrait,
    /// Width is the long axis.
    Landscape,
}

impl Orientation {
    /// Whether this is [`Orientation::Landscape`].
    pub fn is_landscape(self) -> bool {
        matches!(self, Self::Landscape)
    }
}

/// Normalized anchor rectangle: the fraction of a parent container's bounds
/// a child element spans.
///
/// Both corners are expected in `[0, 1]²` for safe areas contained in the
/// screen; out-of-range inputs produce out-of-range anchors (see
/// [`crate::normalize_anchors`]).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnchorRect {
    /// Lower-left anchor.
    pub min: Point,
    /// Upper-right anchor.
    pub max: Point,
}

impl AnchorRect {
    /// The full-parent span: `min = (0, 0)`, `max = (1, 1)`.
    pub const FULL: Self = Self {
        min: Point::ZERO,
        max: Point::new(1.0, 1.0),
    };

    /// Whether both corners lie in `[0, 1]²`.
    pub fn is_unit(self) -> bool {
        let in_unit = |p: Point| (0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y);
        in_unit(self.min) && in_unit(self.max)
    }

    /// Whether `min <= max` component-wise.
    pub fn is_ordered(self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }
}
