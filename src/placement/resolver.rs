use crate::{
    foundation::core::{Size, Vec2, is_positive_size},
    placement::anchor::{AnchorSpec, ContainerMetrics, ResolvedPlacement},
};

#[derive(Clone, Copy, Debug, PartialEq)]
/// Cover-fit of an image into a container: scale to fill, keep aspect, crop overflow.
pub struct CoverFit {
    /// Uniform scale applied to the natural image.
    pub scale: f64,
    /// Image size after scaling; never smaller than the container on either axis.
    pub rendered: Size,
    /// Top-left of the rendered image relative to the container (both `<= 0`).
    pub offset: Vec2,
}

impl CoverFit {
    /// Compute the centered cover-fit, or `None` if either size is not positive.
    pub fn compute(container: Size, image: Size) -> Option<Self> {
        if !is_positive_size(container) || !is_positive_size(image) {
            return None;
        }

        let scale = (container.width / image.width).max(container.height / image.height);
        let rendered = Size::new(image.width * scale, image.height * scale);
        let offset = Vec2::new(
            (container.width - rendered.width) * 0.5,
            (container.height - rendered.height) * 0.5,
        );
        Some(Self {
            scale,
            rendered,
            offset,
        })
    }

    /// Map a point in natural image pixels into container pixels.
    pub fn image_to_container(&self, image_px: Vec2) -> Vec2 {
        self.offset + image_px * self.scale
    }
}

/// Resolve where an anchored overlay lands inside a cover-fit container.
///
/// Pure: the same inputs always give the same placement. Returns
/// [`ResolvedPlacement::not_ready`] until every dimension is known and positive.
pub fn resolve(anchor: &AnchorSpec, metrics: &ContainerMetrics) -> ResolvedPlacement {
    let Some(fit) = CoverFit::compute(metrics.container, metrics.image) else {
        return ResolvedPlacement::not_ready();
    };

    let image = metrics.image;
    let at = fit.image_to_container(Vec2::new(image.width * anchor.x, image.height * anchor.y));
    ResolvedPlacement {
        left: at.x + anchor.offset_x,
        top: at.y + anchor.offset_y,
        width: image.width * anchor.width * fit.scale,
        ready: true,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/resolver.rs"]
mod tests;
