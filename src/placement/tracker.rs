use crate::{
    foundation::core::Size,
    placement::anchor::{AnchorSpec, ContainerMetrics, ResolvedPlacement},
    placement::resolver::resolve,
};

#[derive(Clone, Copy, Debug, PartialEq)]
enum ImageState {
    Pending,
    Loaded(Size),
    Failed,
}

/// Keeps an overlay placement in sync with resize and image-load events.
///
/// Every event recomputes from the latest measurements and replaces the
/// previous placement wholesale. A failed image leaves the overlay hidden.
#[derive(Clone, Debug)]
pub struct OverlayTracker {
    anchor: AnchorSpec,
    container: Size,
    image: ImageState,
    placement: ResolvedPlacement,
}

impl OverlayTracker {
    /// Start tracking with an unknown container size and an undecoded image.
    pub fn new(anchor: AnchorSpec) -> Self {
        Self {
            anchor,
            container: Size::ZERO,
            image: ImageState::Pending,
            placement: ResolvedPlacement::not_ready(),
        }
    }

    /// Anchor this tracker resolves.
    pub fn anchor(&self) -> &AnchorSpec {
        &self.anchor
    }

    /// Latest placement.
    pub fn placement(&self) -> ResolvedPlacement {
        self.placement
    }

    /// Whether the overlay may be shown.
    pub fn is_visible(&self) -> bool {
        self.placement.ready
    }

    /// Container was (re)laid out.
    pub fn on_resize(&mut self, container: Size) -> ResolvedPlacement {
        self.container = container;
        self.recompute()
    }

    /// Background image finished decoding with the given natural size.
    pub fn on_image_loaded(&mut self, natural: Size) -> ResolvedPlacement {
        self.image = ImageState::Loaded(natural);
        self.recompute()
    }

    /// Background image failed to load; the overlay stays unrendered.
    pub fn on_image_failed(&mut self) -> ResolvedPlacement {
        tracing::warn!("overlay background failed to load; overlay stays hidden");
        self.image = ImageState::Failed;
        self.recompute()
    }

    fn recompute(&mut self) -> ResolvedPlacement {
        let image = match self.image {
            ImageState::Loaded(size) => size,
            ImageState::Pending | ImageState::Failed => Size::ZERO,
        };
        let metrics = ContainerMetrics::new(self.container, image);
        self.placement = resolve(&self.anchor, &metrics);
        tracing::debug!(
            container_w = self.container.width,
            container_h = self.container.height,
            left = self.placement.left,
            top = self.placement.top,
            width = self.placement.width,
            ready = self.placement.ready,
            "overlay placement recomputed"
        );
        self.placement
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/tracker.rs"]
mod tests;
