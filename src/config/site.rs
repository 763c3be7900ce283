use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    foundation::error::{ZcError, ZcResult},
    loading::countdown::DEFAULT_DURATION_MS,
    loading::gate::{LoadingGate, PreloadSet},
    placement::anchor::AnchorSpec,
    placement::tracker::OverlayTracker,
    reveal::controller::RevealMargin,
    site::routes::{PageEntry, SiteMap},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Static site configuration.
///
/// Every field has a default reproducing the live site, so `{}` is a valid
/// config. Load with [`SiteConfig::load`] or [`SiteConfig::from_json_str`];
/// both validate.
pub struct SiteConfig {
    /// Hero logo anchor over the hero background.
    #[serde(default = "default_hero_anchor")]
    pub hero_anchor: AnchorSpec,
    /// Loading screen countdown in milliseconds.
    #[serde(default = "default_loading_duration_ms")]
    pub loading_duration_ms: u64,
    /// Images that must settle before content renders, relative to the config dir.
    #[serde(default = "default_critical_images")]
    pub critical_images: Vec<String>,
    /// Reveal margins per element kind.
    #[serde(default)]
    pub reveal: RevealMargins,
    /// Page table.
    #[serde(default = "default_pages")]
    pub pages: Vec<PageEntry>,
    /// Page rendered at `/`; defaults to the first page.
    #[serde(default = "default_main_page")]
    pub main_page: Option<String>,
    /// Whether pages are wrapped in the shared navigation layout.
    #[serde(default = "default_layout")]
    pub layout: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Viewport margins used by reveal controllers.
pub struct RevealMargins {
    /// Margin for page sections.
    #[serde(default = "default_section_margin")]
    pub section: RevealMargin,
    /// Margin for headline fragments.
    #[serde(default = "default_text_margin")]
    pub text: RevealMargin,
}

impl Default for RevealMargins {
    fn default() -> Self {
        Self {
            section: RevealMargin::SECTION,
            text: RevealMargin::TEXT,
        }
    }
}

fn default_hero_anchor() -> AnchorSpec {
    AnchorSpec::HERO_LOGO
}

fn default_loading_duration_ms() -> u64 {
    DEFAULT_DURATION_MS
}

fn default_critical_images() -> Vec<String> {
    vec![
        "images/hero_bg.png".to_string(),
        "images/logo-hero.png".to_string(),
    ]
}

fn default_pages() -> Vec<PageEntry> {
    vec![
        PageEntry::new("Home", "Inicio"),
        PageEntry::new("Mods", "Mods"),
        PageEntry::new("Lore", "Lore"),
        PageEntry::new("Normas", "Normas"),
    ]
}

fn default_main_page() -> Option<String> {
    Some("Home".to_string())
}

fn default_layout() -> bool {
    true
}

fn default_section_margin() -> RevealMargin {
    RevealMargin::SECTION
}

fn default_text_margin() -> RevealMargin {
    RevealMargin::TEXT
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            hero_anchor: default_hero_anchor(),
            loading_duration_ms: default_loading_duration_ms(),
            critical_images: default_critical_images(),
            reveal: RevealMargins::default(),
            pages: default_pages(),
            main_page: default_main_page(),
            layout: default_layout(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> ZcResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| ZcError::config(format!("parse site config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> ZcResult<Self> {
        let f = File::open(path).with_context(|| format!("open site config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| ZcError::config(format!("parse '{}': {e}", path.display())))?;
        cfg.validate()?;
        tracing::debug!(pages = cfg.pages.len(), "site config loaded");
        Ok(cfg)
    }

    /// Check every section.
    pub fn validate(&self) -> ZcResult<()> {
        self.hero_anchor.validate()?;
        for name in &self.critical_images {
            if name.trim().is_empty() {
                return Err(ZcError::validation("critical image path must be non-empty"));
            }
        }
        for (name, margin) in [("section", self.reveal.section), ("text", self.reveal.text)] {
            if !margin.0.is_finite() {
                return Err(ZcError::validation(format!(
                    "reveal.{name} margin must be finite"
                )));
            }
        }
        self.site_map().map(|_| ())
    }

    /// Page table as a resolvable [`SiteMap`].
    pub fn site_map(&self) -> ZcResult<SiteMap> {
        SiteMap::new(self.pages.clone(), self.main_page.clone(), self.layout)
    }

    /// Loading gate over the critical images, timer running.
    pub fn loading_gate(&self) -> LoadingGate {
        LoadingGate::new(PreloadSet::new(self.critical_images.iter().cloned()))
    }

    /// Tracker for the hero logo overlay.
    pub fn hero_tracker(&self) -> OverlayTracker {
        OverlayTracker::new(self.hero_anchor)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/site.rs"]
mod tests;
