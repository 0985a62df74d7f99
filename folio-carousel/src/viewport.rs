//! Viewport breakpoint observer
//!
//! Maps viewport width to the number of items shown side by side. The
//! observer keeps the last computed value so hosts can forward every resize
//! event and still only touch the engine when the layout tier changes.

use serde::{Deserialize, Serialize};

use crate::engine::CarouselEngine;
use crate::timers::TimerHost;

/// Two-tier responsive layout: narrow viewports show `narrow_items`, wider
/// ones `wide_items`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    /// Widths strictly below this (px) use the narrow layout.
    pub narrow_below_px: u32,
    pub narrow_items: usize,
    pub wide_items: usize,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            narrow_below_px: 768,
            narrow_items: 1,
            wide_items: 2,
        }
    }
}

impl Breakpoints {
    /// Items per view for a viewport width. Never returns 0.
    pub fn items_per_view(&self, width: u32) -> usize {
        let items = if width < self.narrow_below_px {
            self.narrow_items
        } else {
            self.wide_items
        };
        items.max(1)
    }
}

#[derive(Debug, Clone)]
pub struct BreakpointObserver {
    breakpoints: Breakpoints,
    width: u32,
    items_per_view: usize,
}

impl BreakpointObserver {
    /// Compute the initial layout synchronously so the first render is
    /// already correct, before any resize event arrives.
    pub fn new(breakpoints: Breakpoints, width: u32) -> Self {
        Self {
            breakpoints,
            width,
            items_per_view: breakpoints.items_per_view(width),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn items_per_view(&self) -> usize {
        self.items_per_view
    }

    /// Record a resize; returns the new items-per-view when the tier changed.
    pub fn observe(&mut self, width: u32) -> Option<usize> {
        self.width = width;
        let items = self.breakpoints.items_per_view(width);
        if items == self.items_per_view {
            return None;
        }
        self.items_per_view = items;
        Some(items)
    }

    /// Record a resize and push the result into the engine.
    pub fn apply<T, H: TimerHost>(
        &mut self,
        width: u32,
        engine: &mut CarouselEngine<T, H>,
    ) {
        self.observe(width);
        engine.set_items_per_view(self.items_per_view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        let bp = Breakpoints::default();
        assert_eq!(bp.items_per_view(0), 1);
        assert_eq!(bp.items_per_view(767), 1);
        assert_eq!(bp.items_per_view(768), 2);
        assert_eq!(bp.items_per_view(1920), 2);
    }

    #[test]
    fn zero_item_tiers_are_floored() {
        let bp = Breakpoints {
            narrow_below_px: 500,
            narrow_items: 0,
            wide_items: 0,
        };
        assert_eq!(bp.items_per_view(100), 1);
        assert_eq!(bp.items_per_view(900), 1);
    }

    #[test]
    fn observer_reports_only_tier_changes() {
        let mut observer = BreakpointObserver::new(Breakpoints::default(), 1280);
        assert_eq!(observer.items_per_view(), 2);
        assert_eq!(observer.observe(1024), None);
        assert_eq!(observer.observe(600), Some(1));
        assert_eq!(observer.observe(320), None);
        assert_eq!(observer.observe(800), Some(2));
        assert_eq!(observer.width(), 800);
    }
}
