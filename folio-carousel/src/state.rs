//! WindowState: index arithmetic for a fixed-size window over a collection

use std::ops::Range;

/// Position of the visible window within a collection.
///
/// Invariant: `current_index <= max_index()` after every mutation, where
/// `max_index = total_items.saturating_sub(items_per_view)`. Shrinking the
/// collection or growing the window clamps the index downward; nothing here
/// ever moves it back up on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowState {
    total_items: usize,
    items_per_view: usize,
    current_index: usize,
}

impl WindowState {
    pub fn new(total_items: usize, items_per_view: usize) -> Self {
        Self {
            total_items,
            items_per_view: items_per_view.max(1),
            current_index: 0,
        }
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn items_per_view(&self) -> usize {
        self.items_per_view
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Largest valid start index.
    #[inline]
    pub fn max_index(&self) -> usize {
        self.total_items.saturating_sub(self.items_per_view)
    }

    /// Number of discrete stopping positions (one dot per position).
    #[inline]
    pub fn indicator_count(&self) -> usize {
        self.max_index() + 1
    }

    /// Returns true when the window geometry changed.
    pub fn set_items_per_view(&mut self, items_per_view: usize) -> bool {
        let items_per_view = items_per_view.max(1);
        if items_per_view == self.items_per_view {
            return false;
        }
        self.items_per_view = items_per_view;
        self.clamp();
        true
    }

    /// Returns true when the collection length changed.
    pub fn set_total_items(&mut self, total_items: usize) -> bool {
        if total_items == self.total_items {
            return false;
        }
        self.total_items = total_items;
        self.clamp();
        true
    }

    /// Move one position right, wrapping from the last position to 0.
    /// Returns true if the index moved.
    pub fn step_forward(&mut self) -> bool {
        let next = if self.current_index >= self.max_index() {
            0
        } else {
            self.current_index + 1
        };
        self.replace_index(next)
    }

    /// Move one position left, wrapping from 0 to the last position.
    pub fn step_back(&mut self) -> bool {
        let prev = if self.current_index == 0 {
            self.max_index()
        } else {
            self.current_index - 1
        };
        self.replace_index(prev)
    }

    /// Jump to a position. Out-of-range requests land on the last position.
    pub fn jump_to(&mut self, index: usize) -> bool {
        self.replace_index(index.min(self.max_index()))
    }

    /// Index range of the items currently on screen.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.current_index.min(self.total_items);
        let end = (start + self.items_per_view).min(self.total_items);
        start..end
    }

    /// Width of one item as a percentage of the track viewport.
    pub fn item_width_percent(&self) -> f32 {
        100.0 / self.items_per_view as f32
    }

    /// Horizontal translation of the item track, in percent of the
    /// viewport, that brings `current_index` to the left edge.
    pub fn track_offset_percent(&self) -> f32 {
        self.current_index as f32 * self.item_width_percent()
    }

    fn replace_index(&mut self, index: usize) -> bool {
        if index == self.current_index {
            return false;
        }
        self.current_index = index;
        true
    }

    fn clamp(&mut self) {
        let max = self.max_index();
        if self.current_index > max {
            self.current_index = max;
        }
    }
}
