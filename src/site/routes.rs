use std::collections::BTreeSet;

use crate::foundation::error::{ZcError, ZcResult};

/// URL for a page key: leading slash, spaces become dashes.
pub fn page_url(key: &str) -> String {
    format!("/{}", key.replace(' ', "-"))
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One routable page.
pub struct PageEntry {
    /// Stable page key, also the path segment source.
    pub key: String,
    /// Navigation label; defaults to the key.
    #[serde(default)]
    pub label: Option<String>,
    /// Whether the page appears in the navigation menu.
    #[serde(default = "default_in_nav")]
    pub in_nav: bool,
}

fn default_in_nav() -> bool {
    true
}

impl PageEntry {
    /// Page listed in navigation with an explicit label.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: Some(label.into()),
            in_nav: true,
        }
    }

    /// Label shown in navigation.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.key)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Outcome of resolving a location path.
pub enum Route {
    /// A known page.
    Page {
        /// Page key.
        key: String,
        /// Whether the shared layout wraps the page.
        with_layout: bool,
    },
    /// No page matches; rendered without the layout.
    NotFound,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
/// Navigation entry ready for rendering.
pub struct NavLink {
    /// Display label.
    pub label: String,
    /// Link target.
    pub href: String,
    /// Whether this entry matches the current location.
    pub active: bool,
}

/// Page table supplied by configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteMap {
    pages: Vec<PageEntry>,
    main_page: Option<String>,
    layout: bool,
}

impl SiteMap {
    /// Build and validate a site map.
    ///
    /// Keys must be non-empty and map to distinct URLs; `main_page`, if given,
    /// must name one of the pages.
    pub fn new(pages: Vec<PageEntry>, main_page: Option<String>, layout: bool) -> ZcResult<Self> {
        let mut urls = BTreeSet::new();
        for page in &pages {
            if page.key.trim().is_empty() {
                return Err(ZcError::validation("page key must be non-empty"));
            }
            if page.key.contains(['/', '?', '#']) {
                return Err(ZcError::validation(format!(
                    "page key '{}' must not contain '/', '?' or '#'",
                    page.key
                )));
            }
            if !urls.insert(page_url(&page.key)) {
                return Err(ZcError::validation(format!(
                    "page key '{}' collides with another page URL",
                    page.key
                )));
            }
        }
        if let Some(main) = &main_page
            && !pages.iter().any(|p| &p.key == main)
        {
            return Err(ZcError::validation(format!(
                "main page '{main}' is not a known page"
            )));
        }
        Ok(Self {
            pages,
            main_page,
            layout,
        })
    }

    /// Pages in declaration order.
    pub fn pages(&self) -> &[PageEntry] {
        &self.pages
    }

    /// Page rendered at `/`: the configured main page, else the first page.
    pub fn main_page_key(&self) -> Option<&str> {
        self.main_page
            .as_deref()
            .or_else(|| self.pages.first().map(|p| p.key.as_str()))
    }

    /// Resolve a location path (query and fragment ignored, trailing slash tolerated).
    pub fn resolve(&self, location: &str) -> Route {
        let path = normalize_path(location);
        let key = if path == "/" {
            self.main_page_key()
        } else {
            self.pages
                .iter()
                .find(|p| page_url(&p.key) == path)
                .map(|p| p.key.as_str())
        };
        match key {
            Some(key) => Route::Page {
                key: key.to_string(),
                with_layout: self.layout,
            },
            None => Route::NotFound,
        }
    }

    /// Whether the navigation entry for `key` is current at `pathname`.
    pub fn is_active(&self, key: &str, pathname: &str) -> bool {
        let path = normalize_path(pathname);
        path == page_url(key) || (path == "/" && self.main_page_key() == Some(key))
    }

    /// Navigation entries for `pathname`, in page order.
    pub fn nav_links(&self, pathname: &str) -> Vec<NavLink> {
        self.pages
            .iter()
            .filter(|p| p.in_nav)
            .map(|p| NavLink {
                label: p.label().to_string(),
                href: page_url(&p.key),
                active: self.is_active(&p.key, pathname),
            })
            .collect()
    }
}

fn normalize_path(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let path = location[..end].trim_end_matches('/');
    if path.is_empty() { "/" } else { path }
}

#[cfg(test)]
#[path = "../../tests/unit/site/routes.rs"]
mod tests;
