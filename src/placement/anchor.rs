use crate::foundation::core::{Affine, Point, Rect, Size, Vec2, is_positive_size, is_unit_fraction};
use crate::foundation::error::{ZcError, ZcResult};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
/// Where, on the *source image*, an overlay is centered and how wide it renders.
///
/// `x`, `y` and `width` are fractions of the image's natural pixel size, not of
/// the container. Offsets are applied in container pixels after the fractional
/// placement; scales only affect how the overlay is drawn around its center.
pub struct AnchorSpec {
    /// Horizontal anchor position in `[0, 1]` of the natural image width.
    pub x: f64,
    /// Vertical anchor position in `[0, 1]` of the natural image height.
    pub y: f64,
    /// Overlay width in `[0, 1]` of the natural image width.
    pub width: f64,
    /// Manual horizontal nudge in pixels.
    #[serde(default)]
    pub offset_x: f64,
    /// Manual vertical nudge in pixels.
    #[serde(default)]
    pub offset_y: f64,
    /// Visual horizontal scale of the overlay.
    #[serde(default = "unit_scale")]
    pub scale_x: f64,
    /// Visual vertical scale of the overlay.
    #[serde(default = "unit_scale")]
    pub scale_y: f64,
}

fn unit_scale() -> f64 {
    1.0
}

impl AnchorSpec {
    /// Logo silhouette baked into the home page hero background.
    pub const HERO_LOGO: Self = Self {
        x: 0.497,
        y: 0.2,
        width: 0.30,
        offset_x: 0.0,
        offset_y: 0.0,
        scale_x: 1.03,
        scale_y: 1.05,
    };

    /// Anchor at `(x, y)` with the given fractional width, no nudge, unit scale.
    pub fn new(x: f64, y: f64, width: f64) -> Self {
        Self {
            x,
            y,
            width,
            offset_x: 0.0,
            offset_y: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    /// Return a copy nudged by `(dx, dy)` pixels.
    pub fn with_offset(self, dx: f64, dy: f64) -> Self {
        Self {
            offset_x: dx,
            offset_y: dy,
            ..self
        }
    }

    /// Check fractional fields lie in `[0, 1]` and everything is finite.
    ///
    /// [`crate::resolve`] does not clamp; callers loading anchors from config
    /// are expected to validate first.
    pub fn validate(&self) -> ZcResult<()> {
        for (name, value) in [("x", self.x), ("y", self.y), ("width", self.width)] {
            if !is_unit_fraction(value) {
                return Err(ZcError::validation(format!(
                    "anchor {name} must be finite and within [0, 1], got {value}"
                )));
            }
        }
        for (name, value) in [
            ("offsetX", self.offset_x),
            ("offsetY", self.offset_y),
            ("scaleX", self.scale_x),
            ("scaleY", self.scale_y),
        ] {
            if !value.is_finite() {
                return Err(ZcError::validation(format!(
                    "anchor {name} must be finite"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Runtime measurements: rendered container size and the image's natural size.
pub struct ContainerMetrics {
    /// Container client size in pixels.
    pub container: Size,
    /// Natural (intrinsic) image size in pixels; zero until decoded.
    pub image: Size,
}

impl ContainerMetrics {
    /// Build metrics from container and natural image sizes.
    pub fn new(container: Size, image: Size) -> Self {
        Self { container, image }
    }

    /// True once both the container and the decoded image have positive extents.
    pub fn is_measured(&self) -> bool {
        is_positive_size(self.container) && is_positive_size(self.image)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Pixel placement of an overlay inside its container.
///
/// `left`/`top` locate the overlay *center*; renderers translate the element by
/// half its own size to center it there.
pub struct ResolvedPlacement {
    /// Anchor x in container pixels.
    pub left: f64,
    /// Anchor y in container pixels.
    pub top: f64,
    /// Overlay width in container pixels.
    pub width: f64,
    /// False while the placement is a placeholder; the overlay must stay hidden.
    pub ready: bool,
}

impl ResolvedPlacement {
    /// Placeholder returned before measurements are available.
    pub fn not_ready() -> Self {
        Self::default()
    }

    /// Anchor point in container space.
    pub fn center(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Overlay box after centering, for an overlay whose height is
    /// `aspect * width` (natural height / natural width).
    pub fn overlay_rect(&self, aspect: f64) -> Rect {
        let size = Size::new(self.width, self.width * aspect.max(0.0));
        Rect::from_center_size(self.center(), size)
    }

    /// Transform from overlay-local pixels (origin top-left, `width` wide) into
    /// container space, including the anchor's visual scale about the center.
    pub fn overlay_transform(&self, anchor: &AnchorSpec, aspect: f64) -> Affine {
        let half = Vec2::new(self.width * 0.5, self.width * aspect.max(0.0) * 0.5);
        Affine::translate(self.center().to_vec2())
            * Affine::scale_non_uniform(anchor.scale_x, anchor.scale_y)
            * Affine::translate(-half)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/anchor.rs"]
mod tests;
