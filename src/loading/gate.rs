use std::{collections::BTreeMap, path::Path};

use crate::foundation::core::Size;
use crate::foundation::error::{ZcError, ZcResult};

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
/// Result of preloading one image. Both variants count as settled.
pub enum AssetOutcome {
    /// Decoded header; natural size in pixels.
    Loaded {
        /// Natural image size.
        size: Size,
    },
    /// Could not be read or decoded.
    Failed {
        /// Human readable reason.
        reason: String,
    },
}

impl AssetOutcome {
    /// Natural size when loaded.
    pub fn natural_size(&self) -> Option<Size> {
        match self {
            Self::Loaded { size } => Some(*size),
            Self::Failed { .. } => None,
        }
    }
}

/// Read an image's natural dimensions. Never fails: errors become [`AssetOutcome::Failed`].
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn preload_image(path: &Path) -> AssetOutcome {
    match image::image_dimensions(path) {
        Ok((w, h)) => {
            tracing::debug!(width = w, height = h, "image preloaded");
            AssetOutcome::Loaded {
                size: Size::new(f64::from(w), f64::from(h)),
            }
        }
        Err(err) => {
            tracing::warn!(error = %err, "image preload failed; treating as settled");
            AssetOutcome::Failed {
                reason: err.to_string(),
            }
        }
    }
}

/// Critical assets that must settle before first content render.
#[derive(Clone, Debug, Default)]
pub struct PreloadSet {
    assets: BTreeMap<String, Option<AssetOutcome>>,
}

impl PreloadSet {
    /// Track the given asset names, all pending.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            assets: names.into_iter().map(|n| (n.into(), None)).collect(),
        }
    }

    /// Record the outcome for `name`. Later outcomes replace earlier ones.
    pub fn settle(&mut self, name: &str, outcome: AssetOutcome) -> ZcResult<()> {
        let slot = self
            .assets
            .get_mut(name)
            .ok_or_else(|| ZcError::asset(format!("'{name}' is not a critical asset")))?;
        *slot = Some(outcome);
        Ok(())
    }

    /// True when every asset has an outcome. An empty set is settled.
    pub fn is_settled(&self) -> bool {
        self.assets.values().all(Option::is_some)
    }

    /// Outcome recorded for `name`, if any.
    pub fn outcome(&self, name: &str) -> Option<&AssetOutcome> {
        self.assets.get(name).and_then(Option::as_ref)
    }

    /// Names still waiting for an outcome.
    pub fn pending(&self) -> impl Iterator<Item = &str> {
        self.assets
            .iter()
            .filter(|(_, o)| o.is_none())
            .map(|(n, _)| n.as_str())
    }

    /// All names with their outcomes.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&AssetOutcome>)> {
        self.assets.iter().map(|(n, o)| (n.as_str(), o.as_ref()))
    }

    /// Preload every pending asset from disk, resolving names against `root`.
    pub fn preload_all(&mut self, root: &Path) {
        for (name, slot) in self.assets.iter_mut().filter(|(_, o)| o.is_none()) {
            *slot = Some(preload_image(&root.join(name)));
        }
    }
}

/// Blocks first render until the countdown finished AND critical assets settled.
#[derive(Clone, Debug, Default)]
pub struct LoadingGate {
    timer_done: bool,
    assets: PreloadSet,
}

impl LoadingGate {
    /// Gate over `assets` with the timer still running.
    pub fn new(assets: PreloadSet) -> Self {
        Self {
            timer_done: false,
            assets,
        }
    }

    /// Record that the loading countdown completed. Returns whether the gate is now open.
    pub fn mark_timer_done(&mut self) -> bool {
        self.timer_done = true;
        self.log_if_open();
        self.is_open()
    }

    /// Record an asset outcome. Returns whether the gate is now open.
    pub fn settle(&mut self, name: &str, outcome: AssetOutcome) -> ZcResult<bool> {
        self.assets.settle(name, outcome)?;
        self.log_if_open();
        Ok(self.is_open())
    }

    /// Critical asset tracker.
    pub fn assets(&self) -> &PreloadSet {
        &self.assets
    }

    /// Mutable access, e.g. for [`PreloadSet::preload_all`].
    pub fn assets_mut(&mut self) -> &mut PreloadSet {
        &mut self.assets
    }

    /// Whether the countdown has completed.
    pub fn timer_done(&self) -> bool {
        self.timer_done
    }

    /// Content may render.
    pub fn is_open(&self) -> bool {
        self.timer_done && self.assets.is_settled()
    }

    /// Loading screen must stay up.
    pub fn is_loading(&self) -> bool {
        !self.is_open()
    }

    fn log_if_open(&self) {
        if self.is_open() {
            tracing::debug!("loading gate open");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/loading/gate.rs"]
mod tests;
