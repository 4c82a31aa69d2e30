//! L3 Molecular Layer: Scroll-triggered reveal
//!
//! Elements are registered with their vertical extent in the same units as
//! the scroll offset. After every scroll the host reports the viewport and
//! gets back the ids that just became visible. Revealing is one-way: an
//! element that scrolls back out stays revealed.

/// Share of an element that must be visible before it is revealed
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Distance trimmed off the bottom of the viewport before testing visibility
pub const DEFAULT_BOTTOM_MARGIN: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RevealEntry {
    pub id: String,
    pub top: f64,
    pub height: f64,
    revealed: bool,
}

impl RevealEntry {
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

#[derive(Debug, Clone)]
pub struct RevealTracker {
    threshold: f64,
    bottom_margin: f64,
    entries: Vec<RevealEntry>,
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, DEFAULT_BOTTOM_MARGIN)
    }
}

impl RevealTracker {
    pub fn new(threshold: f64, bottom_margin: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            bottom_margin,
            entries: Vec::new(),
        }
    }

    pub fn set_bottom_margin(&mut self, bottom_margin: f64) {
        self.bottom_margin = bottom_margin;
    }

    /// Start watching `id`, or move it if it is already watched
    ///
    /// Moving an element keeps its revealed state.
    pub fn observe(&mut self, id: impl Into<String>, top: f64, height: f64) {
        let id = id.into();
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.top = top;
                entry.height = height;
            }
            None => self.entries.push(RevealEntry {
                id,
                top,
                height,
                revealed: false,
            }),
        }
    }

    /// Check every hidden element against the viewport; returns the newly revealed ids
    pub fn update(&mut self, scroll_y: f64, viewport_height: f64) -> Vec<String> {
        let view_top = scroll_y;
        let view_bottom = scroll_y + viewport_height - self.bottom_margin;

        let mut revealed = Vec::new();
        for entry in self.entries.iter_mut().filter(|entry| !entry.revealed) {
            let ratio = visible_ratio(entry.top, entry.height, view_top, view_bottom);
            if ratio > 0.0 && ratio >= self.threshold {
                entry.revealed = true;
                revealed.push(entry.id.clone());
            }
        }

        if !revealed.is_empty() {
            tracing::debug!(count = revealed.len(), scroll_y, "elements revealed");
        }
        revealed
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.id == id && entry.revealed)
    }

    pub fn entries(&self) -> &[RevealEntry] {
        &self.entries
    }

    pub fn revealed_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.revealed).count()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Fraction of `[top, top + height)` inside `[view_top, view_bottom)`
///
/// A zero-height element counts as fully visible when its top lies inside the view.
pub fn visible_ratio(top: f64, height: f64, view_top: f64, view_bottom: f64) -> f64 {
    if view_bottom <= view_top {
        return 0.0;
    }
    if height <= 0.0 {
        return if top >= view_top && top < view_bottom { 1.0 } else { 0.0 };
    }
    let overlap = (top + height).min(view_bottom) - top.max(view_top);
    (overlap / height).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_ratio() {
        assert_eq!(visible_ratio(0.0, 100.0, 0.0, 500.0), 1.0);
        assert_eq!(visible_ratio(450.0, 100.0, 0.0, 500.0), 0.5);
        assert_eq!(visible_ratio(600.0, 100.0, 0.0, 500.0), 0.0);
        assert_eq!(visible_ratio(10.0, 0.0, 0.0, 500.0), 1.0);
        assert_eq!(visible_ratio(10.0, 100.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_threshold_edge_inside_bottom_margin() {
        // Viewport 0..1000, effective bottom edge at 950
        let mut tracker = RevealTracker::default();
        tracker.observe("just-short", 941.0, 100.0); // 9% visible
        tracker.observe("exact", 940.0, 100.0); // 10% visible
        tracker.observe("in-margin", 960.0, 100.0); // visible only inside the margin

        let revealed = tracker.update(0.0, 1_000.0);
        assert_eq!(revealed, ["exact"]);
        assert!(!tracker.is_revealed("just-short"));
        assert!(!tracker.is_revealed("in-margin"));
    }

    #[test]
    fn test_reveal_is_one_way() {
        let mut tracker = RevealTracker::default();
        tracker.observe("card", 1_200.0, 300.0);
        assert!(tracker.update(0.0, 800.0).is_empty());

        assert_eq!(tracker.update(600.0, 800.0), ["card"]);
        // Already revealed elements are not reported again
        assert!(tracker.update(700.0, 800.0).is_empty());

        // Scrolling back past it does not hide it
        tracker.update(0.0, 800.0);
        assert!(tracker.is_revealed("card"));
        assert_eq!(tracker.revealed_count(), 1);
    }

    #[test]
    fn test_observe_again_moves_without_resetting() {
        let mut tracker = RevealTracker::new(0.1, 0.0);
        tracker.observe("a", 0.0, 10.0);
        tracker.update(0.0, 20.0);
        tracker.observe("a", 500.0, 10.0);
        assert_eq!(tracker.entries().len(), 1);
        assert_eq!(tracker.entries()[0].top, 500.0);
        assert!(tracker.is_revealed("a"));
    }

    #[test]
    fn test_element_above_viewport_stays_hidden() {
        let mut tracker = RevealTracker::new(0.1, 0.0);
        tracker.observe("above", 0.0, 100.0);
        assert!(tracker.update(100.0, 400.0).is_empty());
    }
}
