use serde::{Deserialize, Serialize};

/// Extents of a scroll container, as read from the DOM.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollMetrics {
    pub scroll_left: f64,
    pub scroll_top: f64,
    pub scroll_width: f64,
    pub scroll_height: f64,
    pub client_width: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    /// Distance scrolled from the start on whichever axis is used.
    pub fn offset(&self) -> f64 {
        self.scroll_left.max(self.scroll_top)
    }

    /// Distance left to scroll on whichever axis is used.
    pub fn remaining(&self) -> f64 {
        let horizontal = self.scroll_width - self.scroll_left - self.client_width;
        let vertical = self.scroll_height - self.scroll_top - self.client_height;
        horizontal.max(vertical)
    }

    /// One button press worth of scrolling, on both axes so the same buttons
    /// serve horizontal and vertical layouts.
    pub fn step(&self, direction: ScrollDirection, fraction: f64) -> ScrollOffset {
        let sign = direction.sign();
        ScrollOffset {
            left: self.client_width * fraction * sign,
            top: self.client_height * fraction * sign,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Backward,
    Forward,
}

impl ScrollDirection {
    fn sign(self) -> f64 {
        match self {
            Self::Backward => -1.0,
            Self::Forward => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset {
    pub left: f64,
    pub top: f64,
}

/// Which scroll buttons are usable. Both start disabled until measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub can_scroll_backward: bool,
    pub can_scroll_forward: bool,
}

impl ScrollState {
    pub fn from_metrics(metrics: &ScrollMetrics) -> Self {
        // Sub-pixel layouts can leave tiny negative remainders at the edge.
        Self {
            can_scroll_backward: metrics.offset() > 0.0,
            can_scroll_forward: metrics.remaining() > 0.0,
        }
    }

    pub fn allows(&self, direction: ScrollDirection) -> bool {
        match direction {
            ScrollDirection::Backward => self.can_scroll_backward,
            ScrollDirection::Forward => self.can_scroll_forward,
        }
    }

    /// Scroll button for `direction` is inert at that edge.
    pub fn disabled(&self, direction: ScrollDirection) -> bool {
        !self.allows(direction)
    }

    /// Container has content beyond its visible extent.
    pub fn overflowing(&self) -> bool {
        self.can_scroll_backward || self.can_scroll_forward
    }

    /// Presence-only `overflowing` attribute value.
    pub fn overflowing_attribute(&self) -> Option<&'static str> {
        self.overflowing().then_some("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal(scroll_left: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_left,
            scroll_top: 0.0,
            scroll_width: 1000.0,
            scroll_height: 200.0,
            client_width: 400.0,
            client_height: 200.0,
        }
    }

    fn vertical(scroll_top: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_left: 0.0,
            scroll_top,
            scroll_width: 300.0,
            scroll_height: 900.0,
            client_width: 300.0,
            client_height: 300.0,
        }
    }

    #[test]
    fn at_start_only_forward_is_enabled() {
        let state = ScrollState::from_metrics(&horizontal(0.0));
        assert!(!state.can_scroll_backward);
        assert!(state.can_scroll_forward);
        assert!(state.overflowing());
    }

    #[test]
    fn at_end_only_backward_is_enabled() {
        let state = ScrollState::from_metrics(&horizontal(600.0));
        assert!(state.can_scroll_backward);
        assert!(!state.can_scroll_forward);
    }

    #[test]
    fn in_between_both_are_enabled() {
        let state = ScrollState::from_metrics(&horizontal(250.0));
        assert!(state.allows(ScrollDirection::Backward));
        assert!(state.allows(ScrollDirection::Forward));
    }

    #[test]
    fn vertical_layout_uses_top_offset() {
        assert!(!ScrollState::from_metrics(&vertical(0.0)).can_scroll_backward);
        let end = ScrollState::from_metrics(&vertical(600.0));
        assert!(end.can_scroll_backward);
        assert!(!end.can_scroll_forward);
    }

    #[test]
    fn content_that_fits_is_not_overflowing() {
        let metrics = ScrollMetrics {
            scroll_width: 400.0,
            scroll_height: 200.0,
            client_width: 400.0,
            client_height: 200.0,
            ..ScrollMetrics::default()
        };
        let state = ScrollState::from_metrics(&metrics);
        assert_eq!(state, ScrollState::default());
        assert!(!state.overflowing());
    }

    #[test]
    fn step_moves_both_axes_by_fraction_of_viewport() {
        let metrics = horizontal(0.0);
        assert_eq!(
            metrics.step(ScrollDirection::Forward, 0.5),
            ScrollOffset {
                left: 200.0,
                top: 100.0
            }
        );
        assert_eq!(
            metrics.step(ScrollDirection::Backward, 0.5),
            ScrollOffset {
                left: -200.0,
                top: -100.0
            }
        );
    }

    #[test]
    fn buttons_and_attribute_track_the_edges() {
        let start = ScrollState::from_metrics(&horizontal(0.0));
        assert!(start.disabled(ScrollDirection::Backward));
        assert!(!start.disabled(ScrollDirection::Forward));
        assert_eq!(start.overflowing_attribute(), Some(""));

        let end = ScrollState::from_metrics(&horizontal(600.0));
        assert!(!end.disabled(ScrollDirection::Backward));
        assert!(end.disabled(ScrollDirection::Forward));

        let idle = ScrollState::default();
        assert!(idle.disabled(ScrollDirection::Backward));
        assert!(idle.disabled(ScrollDirection::Forward));
        assert_eq!(idle.overflowing_attribute(), None);
    }
}
