use std::collections::BTreeMap;

use crate::foundation::core::Rect;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// Pixels added to every side of the viewport before testing intersection.
///
/// Negative values shrink the viewport, so elements must scroll further in
/// before they reveal.
pub struct RevealMargin(pub f64);

impl RevealMargin {
    /// Used by full page sections.
    pub const SECTION: Self = Self(-100.0);
    /// Used by inline headline fragments.
    pub const TEXT: Self = Self(-50.0);
    /// Plain viewport intersection.
    pub const NONE: Self = Self(0.0);

    /// Viewport grown (or shrunk) by this margin. `None` once shrunk past empty.
    pub fn apply(self, viewport: Rect) -> Option<Rect> {
        let r = viewport.abs().inflate(self.0, self.0);
        (r.x0 <= r.x1 && r.y0 <= r.y1).then_some(r)
    }
}

impl Default for RevealMargin {
    fn default() -> Self {
        Self::NONE
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
/// Reveal lifecycle; `Revealed` is terminal.
pub enum RevealState {
    /// Waiting for the first intersection.
    #[default]
    Hidden,
    /// Entrance animation has been triggered.
    Revealed,
}

/// One-shot visibility latch for a single element.
#[derive(Clone, Debug, Default)]
pub struct RevealController {
    margin: RevealMargin,
    state: RevealState,
}

impl RevealController {
    /// New hidden controller using `margin` around the viewport.
    pub fn new(margin: RevealMargin) -> Self {
        Self {
            margin,
            state: RevealState::Hidden,
        }
    }

    /// Current state.
    pub fn state(&self) -> RevealState {
        self.state
    }

    /// True once the element has intersected the viewport at least once.
    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Feed the element's current box and the viewport, both in the same space.
    ///
    /// Returns `true` only on the call that flips the latch.
    pub fn observe(&mut self, element: Rect, viewport: Rect) -> bool {
        if self.is_revealed() {
            return false;
        }
        let Some(root) = self.margin.apply(viewport) else {
            return false;
        };
        if !touches(element.abs(), root) {
            return false;
        }
        self.state = RevealState::Revealed;
        true
    }
}

// Edge contact counts, matching intersection observers.
fn touches(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

/// A set of keyed reveal latches sampled together on each scroll pass.
#[derive(Clone, Debug)]
pub struct RevealGroup<K> {
    items: BTreeMap<K, RevealController>,
}

impl<K> Default for RevealGroup<K> {
    fn default() -> Self {
        Self {
            items: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Clone> RevealGroup<K> {
    /// Empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `key` with its own margin. Re-registering keeps the existing latch.
    pub fn register(&mut self, key: K, margin: RevealMargin) {
        self.items
            .entry(key)
            .or_insert_with(|| RevealController::new(margin));
    }

    /// Whether `key` has been revealed. Unknown keys are hidden.
    pub fn is_revealed(&self, key: &K) -> bool {
        self.items.get(key).is_some_and(RevealController::is_revealed)
    }

    /// Number of registered elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Observe every supplied box against `viewport`; returns keys revealed on this pass.
    ///
    /// Boxes for unregistered keys are ignored.
    pub fn observe_all<I>(&mut self, viewport: Rect, boxes: I) -> Vec<K>
    where
        I: IntoIterator<Item = (K, Rect)>,
    {
        let mut newly = Vec::new();
        for (key, element) in boxes {
            if let Some(ctrl) = self.items.get_mut(&key)
                && ctrl.observe(element, viewport)
            {
                newly.push(key);
            }
        }
        if !newly.is_empty() {
            tracing::debug!(count = newly.len(), "elements revealed");
        }
        newly
    }
}

#[cfg(test)]
#[path = "../../tests/unit/reveal/controller.rs"]
mod tests;
