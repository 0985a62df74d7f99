//! CarouselEngine: the state machine behind every carousel instance
//!
//! Owns the window position, the pause bookkeeping, and the swipe recognizer.
//! It is strictly synchronous: timer effects are delegated to a
//! [`TimerHost`], and timer firings come back in as [`tick`] and [`resume`]
//! calls. One engine is owned by exactly one driver, so there is no interior
//! locking.
//!
//! [`tick`]: CarouselEngine::tick
//! [`resume`]: CarouselEngine::resume

use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

use crate::gesture::{SwipeDirection, SwipeRecognizer, TouchEvent};
use crate::pause::{PauseState, ResumeTicket};
use crate::snapshot::{CarouselSnapshot, Indicator};
use crate::state::WindowState;
use crate::timers::TimerHost;
use crate::types::{CarouselConfig, CarouselKey};

/// Windowed carousel over a shared, immutable collection of `T`, with its
/// timers delegated to `H`.
pub struct CarouselEngine<T, H: TimerHost> {
    key: CarouselKey,
    items: Arc<[T]>,
    config: CarouselConfig,
    window: WindowState,
    pause: PauseState,
    swipe: SwipeRecognizer,
    timers: H,
    autoplay_armed: bool,
    /// Bumped on every observable change; drivers re-render on change.
    revision: u64,
    disposed: bool,
}

impl<T, H: TimerHost> CarouselEngine<T, H> {
    /// Create an engine at index 0 with items-per-view derived from the
    /// current viewport width, and arm autoplay.
    pub fn mount(
        key: CarouselKey,
        items: impl Into<Arc<[T]>>,
        config: CarouselConfig,
        viewport_width: u32,
        timers: H,
    ) -> Self {
        let items = items.into();
        let items_per_view = config.breakpoints.items_per_view(viewport_width);
        let mut engine = Self {
            key,
            window: WindowState::new(items.len(), items_per_view),
            pause: PauseState::new(config.pause_mode),
            swipe: SwipeRecognizer::new(config.swipe_threshold_px),
            items,
            config,
            timers,
            autoplay_armed: false,
            revision: 0,
            disposed: false,
        };
        engine.sync_autoplay();
        debug!(
            carousel = %engine.key,
            items = engine.items.len(),
            items_per_view,
            viewport_width,
            "carousel mounted"
        );
        engine
    }

    /// Identity used in logs and errors.
    pub fn key(&self) -> &CarouselKey {
        &self.key
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Index of the first visible item.
    pub fn current_index(&self) -> usize {
        self.window.current_index()
    }

    pub fn items_per_view(&self) -> usize {
        self.window.items_per_view()
    }

    pub fn max_index(&self) -> usize {
        self.window.max_index()
    }

    pub fn window_state(&self) -> &WindowState {
        &self.window
    }

    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    pub fn is_hovered(&self) -> bool {
        self.pause.is_hovered()
    }

    /// Whether the autoplay timer is currently armed.
    pub fn is_autoplaying(&self) -> bool {
        self.autoplay_armed
    }

    pub fn pending_resume(&self) -> Option<ResumeTicket> {
        self.pause.pending_resume()
    }

    /// Bumped on every observable change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn timers(&self) -> &H {
        &self.timers
    }

    pub fn timers_mut(&mut self) -> &mut H {
        &mut self.timers
    }

    /// Breakpoint change. Clamps the index downward if needed and restarts
    /// a running autoplay period so the next advance is a full period away.
    pub fn set_items_per_view(&mut self, items_per_view: usize) {
        if self.disposed {
            return;
        }
        let before = self.window.current_index();
        if !self.window.set_items_per_view(items_per_view) {
            return;
        }
        debug!(
            carousel = %self.key,
            items_per_view = self.window.items_per_view(),
            from = before,
            to = self.window.current_index(),
            "items per view changed"
        );
        if self.autoplay_armed {
            self.timers.arm_autoplay(self.config.autoplay_interval());
        }
        self.bump();
    }

    /// Replace the collection, clamping the index if it shrank.
    pub fn set_items(&mut self, items: impl Into<Arc<[T]>>) {
        if self.disposed {
            return;
        }
        self.items = items.into();
        self.window.set_total_items(self.items.len());
        debug!(
            carousel = %self.key,
            items = self.items.len(),
            index = self.window.current_index(),
            "collection replaced"
        );
        self.bump();
    }

    /// Manual "next": wraps past the last position and starts a pause
    /// episode.
    pub fn next_item(&mut self) {
        self.navigate("next", WindowState::step_forward);
    }

    /// Manual "previous": wraps below 0 and starts a pause episode.
    pub fn previous_item(&mut self) {
        self.navigate("previous", WindowState::step_back);
    }

    /// Jump to an indicator position and start a pause episode. Indices past
    /// the last position land on the last position.
    pub fn go_to(&mut self, index: usize) {
        self.navigate("go_to", |window| window.jump_to(index));
    }

    /// Autoplay timer firing. Advances like `next_item` without pausing.
    /// Returns whether the index moved; a stray tick while paused is ignored.
    pub fn tick(&mut self) -> bool {
        if self.disposed || self.pause.is_paused() {
            trace!(carousel = %self.key, "ignoring autoplay tick while paused");
            return false;
        }
        let moved = self.window.step_forward();
        if moved {
            trace!(
                carousel = %self.key,
                index = self.window.current_index(),
                "autoplay advanced"
            );
            self.bump();
        }
        moved
    }

    /// Delayed-resume firing for a manual pause episode. Stale tickets
    /// (superseded by a later navigation) are ignored.
    pub fn resume(&mut self, ticket: ResumeTicket) {
        if self.disposed {
            return;
        }
        let was_paused = self.pause.is_paused();
        if !self.pause.finish_manual(ticket) {
            trace!(
                carousel = %self.key,
                ticket = ticket.id(),
                "ignoring stale resume"
            );
            return;
        }
        debug!(carousel = %self.key, ticket = ticket.id(), "manual pause elapsed");
        self.after_pause_change(was_paused);
    }

    /// Pointer entered (`true`) or left (`false`) the carousel.
    pub fn set_hovered(&mut self, hovered: bool) {
        if self.disposed {
            return;
        }
        let was_paused = self.pause.is_paused();
        self.pause.set_hovered(hovered);
        self.after_pause_change(was_paused);
    }

    /// Feed a raw touch event; a completed swipe navigates like the arrow
    /// buttons.
    pub fn handle_touch(&mut self, event: TouchEvent) -> Option<SwipeDirection> {
        if self.disposed {
            return None;
        }
        let swipe = self.swipe.handle(event)?;
        match swipe {
            SwipeDirection::Left => self.next_item(),
            SwipeDirection::Right => self.previous_item(),
        }
        Some(swipe)
    }

    /// Items currently visible, in order. Never wraps.
    pub fn visible_window(&self) -> &[T] {
        &self.items[self.window.visible_range()]
    }

    pub fn indicator_count(&self) -> usize {
        self.window.indicator_count()
    }

    pub fn active_indicator(&self) -> usize {
        self.window.current_index()
    }

    pub fn is_active_indicator(&self, index: usize) -> bool {
        index == self.window.current_index()
    }

    pub fn indicator_label(&self, index: usize) -> String {
        format!("Go to {} {}", self.config.label, index + 1)
    }

    pub fn previous_label(&self) -> String {
        format!("Previous {}", self.config.label)
    }

    pub fn next_label(&self) -> String {
        format!("Next {}", self.config.label)
    }

    pub fn indicators(&self) -> Vec<Indicator> {
        (0..self.indicator_count())
            .map(|index| Indicator {
                index,
                active: self.is_active_indicator(index),
                label: self.indicator_label(index),
            })
            .collect()
    }

    /// Tear down: release the autoplay timer and any pending resume. Every
    /// later call is a no-op. Also runs on drop.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        if self.autoplay_armed {
            self.timers.disarm_autoplay();
            self.autoplay_armed = false;
        }
        if let Some(ticket) = self.pause.take_pending() {
            self.timers.cancel_resume(ticket);
        }
        debug!(carousel = %self.key, "carousel disposed");
    }

    fn navigate(&mut self, action: &str, step: impl FnOnce(&mut WindowState) -> bool) {
        if self.disposed {
            trace!(carousel = %self.key, action, "ignoring navigation after dispose");
            return;
        }
        let was_paused = self.pause.is_paused();
        let moved = step(&mut self.window);

        let (superseded, ticket) = self.pause.begin_manual();
        if let Some(stale) = superseded {
            self.timers.cancel_resume(stale);
        }
        self.timers.schedule_resume(ticket, self.config.resume_delay());
        debug!(
            carousel = %self.key,
            action,
            index = self.window.current_index(),
            ticket = ticket.id(),
            "manual navigation"
        );

        self.sync_autoplay();
        if moved || was_paused != self.pause.is_paused() {
            self.bump();
        }
    }

    fn after_pause_change(&mut self, was_paused: bool) {
        self.sync_autoplay();
        if was_paused != self.pause.is_paused() {
            self.bump();
        }
    }

    /// Keep the autoplay timer armed exactly while not paused.
    fn sync_autoplay(&mut self) {
        let should_run = !self.disposed && !self.pause.is_paused();
        if should_run && !self.autoplay_armed {
            self.timers.arm_autoplay(self.config.autoplay_interval());
            self.autoplay_armed = true;
        } else if !should_run && self.autoplay_armed {
            self.timers.disarm_autoplay();
            self.autoplay_armed = false;
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T: Clone, H: TimerHost> CarouselEngine<T, H> {
    pub fn snapshot(&self) -> CarouselSnapshot<T> {
        CarouselSnapshot {
            window: self.visible_window().to_vec(),
            current_index: self.window.current_index(),
            items_per_view: self.window.items_per_view(),
            indicators: self.indicators(),
            paused: self.pause.is_paused(),
            track_offset_percent: self.window.track_offset_percent(),
            previous_label: self.previous_label(),
            next_label: self.next_label(),
            revision: self.revision,
        }
    }
}

impl<T, H: TimerHost> Drop for CarouselEngine<T, H> {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl<T, H: TimerHost> fmt::Debug for CarouselEngine<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselEngine")
            .field("key", &self.key)
            .field("items", &self.items.len())
            .field("window", &self.window)
            .field("pause", &self.pause)
            .field("autoplay_armed", &self.autoplay_armed)
            .field("revision", &self.revision)
            .field("disposed", &self.disposed)
            .field("timers", &std::any::type_name::<H>())
            .finish()
    }
}
