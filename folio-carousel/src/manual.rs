//! Virtual-clock timer host
//!
//! Records what the engine asked for and fires it when the caller advances
//! the clock. Used by tests and by hosts that want deterministic stepping
//! without a runtime.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::engine::CarouselEngine;
use crate::pause::ResumeTicket;
use crate::timers::TimerHost;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Autoplay {
    period: Duration,
    next_due: Duration,
}

#[derive(Debug, Default, Clone)]
pub struct ManualTimers {
    now: Duration,
    autoplay: Option<Autoplay>,
    resumes: BTreeMap<ResumeTicket, Duration>,
}

enum Due {
    Resume(ResumeTicket),
    Autoplay,
}

impl ManualTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Period of the armed autoplay timer, if any.
    pub fn autoplay_period(&self) -> Option<Duration> {
        self.autoplay.map(|autoplay| autoplay.period)
    }

    pub fn autoplay_armed(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Tickets with a resume still scheduled, oldest first.
    pub fn pending_resumes(&self) -> Vec<ResumeTicket> {
        self.resumes.keys().copied().collect()
    }

    pub fn has_armed_timers(&self) -> bool {
        self.autoplay.is_some() || !self.resumes.is_empty()
    }

    /// Advance the clock by `by`, delivering every firing that falls inside
    /// the span in time order. A resume and an autoplay tick due at the same
    /// instant fire resume first. Returns the number of firings delivered.
    pub fn advance<T>(
        engine: &mut CarouselEngine<T, ManualTimers>,
        by: Duration,
    ) -> usize {
        let target = engine.timers().now + by;
        let mut fired = 0;

        while let Some((at, due)) = engine.timers().next_due(target) {
            let timers = engine.timers_mut();
            timers.now = at;
            match due {
                Due::Resume(ticket) => {
                    timers.resumes.remove(&ticket);
                    engine.resume(ticket);
                }
                Due::Autoplay => {
                    if let Some(autoplay) = timers.autoplay.as_mut() {
                        autoplay.next_due += autoplay.period;
                    }
                    engine.tick();
                }
            }
            fired += 1;
        }

        engine.timers_mut().now = target;
        fired
    }

    fn next_due(&self, limit: Duration) -> Option<(Duration, Due)> {
        let resume = self
            .resumes
            .iter()
            .map(|(ticket, at)| (*at, *ticket))
            .min();
        let autoplay = self.autoplay.map(|autoplay| autoplay.next_due);

        let next = match (resume, autoplay) {
            (Some((r_at, ticket)), Some(a_at)) if r_at <= a_at => {
                (r_at, Due::Resume(ticket))
            }
            (Some((r_at, ticket)), None) => (r_at, Due::Resume(ticket)),
            (_, Some(a_at)) => (a_at, Due::Autoplay),
            (None, None) => return None,
        };
        (next.0 <= limit).then_some(next)
    }
}

impl TimerHost for ManualTimers {
    fn arm_autoplay(&mut self, period: Duration) {
        let period = period.max(Duration::from_millis(1));
        self.autoplay = Some(Autoplay {
            period,
            next_due: self.now + period,
        });
    }

    fn disarm_autoplay(&mut self) {
        self.autoplay = None;
    }

    fn schedule_resume(&mut self, ticket: ResumeTicket, delay: Duration) {
        self.resumes.insert(ticket, self.now + delay);
    }

    fn cancel_resume(&mut self, ticket: ResumeTicket) {
        self.resumes.remove(&ticket);
    }
}
