//! Timer effects requested by the engine.

use std::time::Duration;

use crate::pause::ResumeTicket;

/// Owns the two timers a carousel needs. The engine calls these on state
/// transitions; the host delivers firings back through
/// [`CarouselEngine::tick`](crate::CarouselEngine::tick) and
/// [`CarouselEngine::resume`](crate::CarouselEngine::resume).
#[cfg_attr(test, mockall::automock)]
pub trait TimerHost {
    /// Start (or restart) the repeating autoplay timer. The first firing is
    /// one full `period` from now; any previous autoplay timer is replaced.
    fn arm_autoplay(&mut self, period: Duration);

    /// Stop the autoplay timer. Must be a no-op when nothing is armed.
    fn disarm_autoplay(&mut self);

    /// Schedule a one-shot resume that reports `ticket` after `delay`.
    fn schedule_resume(&mut self, ticket: ResumeTicket, delay: Duration);

    /// Drop the pending resume for `ticket`, if it has not fired yet.
    fn cancel_resume(&mut self, ticket: ResumeTicket);
}
