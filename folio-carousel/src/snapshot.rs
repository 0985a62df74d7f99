//! Render-facing view state

use serde::Serialize;

/// One dot in the position indicator strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
    /// Basic accessible label, e.g. "Go to certificate 3".
    pub label: String,
}

/// Everything a view needs to draw the carousel at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarouselSnapshot<T> {
    /// Items currently on screen, in order.
    pub window: Vec<T>,
    pub current_index: usize,
    pub items_per_view: usize,
    pub indicators: Vec<Indicator>,
    pub paused: bool,
    /// Track translation in percent of the viewport width.
    pub track_offset_percent: f32,
    pub previous_label: String,
    pub next_label: String,
    /// Engine revision this snapshot was taken at.
    pub revision: u64,
}

impl<T> CarouselSnapshot<T> {
    pub fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    pub fn active_indicator(&self) -> Option<usize> {
        self.indicators.iter().position(|dot| dot.active)
    }
}
