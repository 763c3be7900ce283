//! Presentation logic for the Zona Cero: Requiem community-server site.
//!
//! The site itself is mostly declarative markup. The pieces that carry real
//! invariants live here so any front-end (or the bundled CLI) can drive them:
//!
//! 1. **Placement**: map an anchor expressed in the *source image's* natural
//!    pixels through the cover-fit transform of its container, so a decorative
//!    overlay stays pinned to the same point of the artwork at any viewport size.
//! 2. **Reveal**: a one-shot latch flipped by the first intersection of an
//!    element with the (margin-adjusted) viewport.
//! 3. **Loading**: a fixed-duration progress countdown driven by a cancellable
//!    per-frame scheduler, AND-gated with the preload of critical images.
//! 4. **Site**: path → page resolution, page URLs and navigation shell state.
//!
//! All state is owned by the caller and updated through explicit events
//! (resize, image load, scroll, frame tick). Nothing reads ambient globals.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod foundation;
mod loading;
mod placement;
mod reveal;
mod site;

pub use config::site::{RevealMargins, SiteConfig};
pub use foundation::core::{Affine, Point, Rect, Size, Vec2, parse_dimensions};
pub use foundation::error::{ZcError, ZcResult};
pub use loading::countdown::{DEFAULT_DURATION_MS, ProgressCountdown, ProgressSample};
pub use loading::gate::{AssetOutcome, LoadingGate, PreloadSet, preload_image};
pub use loading::scheduler::{FrameControl, FrameGuard, FrameScheduler, FrameTask, LoadingScreen};
pub use placement::anchor::{AnchorSpec, ContainerMetrics, ResolvedPlacement};
pub use placement::resolver::{CoverFit, resolve};
pub use placement::tracker::OverlayTracker;
pub use reveal::controller::{RevealController, RevealGroup, RevealMargin, RevealState};
pub use site::nav::{NavState, SCROLL_THRESHOLD_PX};
pub use site::routes::{NavLink, PageEntry, Route, SiteMap, page_url};
