/// Scroll offset past which the menu toggle switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Side navigation shell: menu visibility and scrolled styling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    open: bool,
    scrolled: bool,
}

impl NavState {
    /// Closed menu at the top of the page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the side menu is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the page is scrolled past [`SCROLL_THRESHOLD_PX`].
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Toggle button uses its highlighted style when scrolled or open.
    pub fn is_highlighted(&self) -> bool {
        self.scrolled || self.open
    }

    /// Flip the menu.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close the menu (overlay click).
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Window scrolled to vertical offset `y`.
    pub fn on_scroll(&mut self, y: f64) {
        self.scrolled = y > SCROLL_THRESHOLD_PX;
    }

    /// Location changed; navigation always closes the menu.
    pub fn on_location_change(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/nav.rs"]
mod tests;
