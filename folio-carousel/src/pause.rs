//! Autoplay pause bookkeeping
//!
//! Two sources can suspend autoplay: pointer hover and manual navigation.
//! Manual navigation also schedules a delayed resume; every schedule is
//! stamped with a fresh [`ResumeTicket`] and only the newest ticket may
//! resume, so a late timer from an earlier click can never end a pause that
//! a later click started.

use crate::types::PauseMode;

/// Identifies one scheduled delayed resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResumeTicket(u64);

impl ResumeTicket {
    pub fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct PauseState {
    mode: PauseMode,
    /// The shared flag used by `PauseMode::Shared`.
    flag: bool,
    hovered: bool,
    pending_resume: Option<ResumeTicket>,
    issued: u64,
}

impl PauseState {
    pub fn new(mode: PauseMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn mode(&self) -> PauseMode {
        self.mode
    }

    pub fn is_paused(&self) -> bool {
        match self.mode {
            PauseMode::Shared => self.flag,
            PauseMode::Independent => {
                self.hovered || self.pending_resume.is_some()
            }
        }
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn pending_resume(&self) -> Option<ResumeTicket> {
        self.pending_resume
    }

    /// Start a manual pause episode. Returns the ticket it supersedes (the
    /// caller must cancel that timer) and the ticket to schedule.
    pub fn begin_manual(&mut self) -> (Option<ResumeTicket>, ResumeTicket) {
        self.issued += 1;
        let ticket = ResumeTicket(self.issued);
        let superseded = self.pending_resume.replace(ticket);
        self.flag = true;
        (superseded, ticket)
    }

    /// Complete a manual episode. Returns false for stale tickets.
    pub fn finish_manual(&mut self, ticket: ResumeTicket) -> bool {
        if self.pending_resume != Some(ticket) {
            return false;
        }
        self.pending_resume = None;
        self.flag = false;
        true
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
        self.flag = hovered;
    }

    /// Forget any pending resume, returning it so its timer can be cancelled.
    pub fn take_pending(&mut self) -> Option<ResumeTicket> {
        self.pending_resume.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_ticket_supersedes_older() {
        let mut pause = PauseState::new(PauseMode::Shared);
        let (none, first) = pause.begin_manual();
        assert!(none.is_none());
        let (superseded, second) = pause.begin_manual();
        assert_eq!(superseded, Some(first));
        assert!(second > first);

        assert!(!pause.finish_manual(first));
        assert!(pause.is_paused());
        assert!(pause.finish_manual(second));
        assert!(!pause.is_paused());
    }

    #[test]
    fn shared_mode_last_writer_wins() {
        let mut pause = PauseState::new(PauseMode::Shared);
        let (_, ticket) = pause.begin_manual();
        pause.set_hovered(true);
        pause.set_hovered(false);
        // Hover leave clears the shared flag despite the pending episode.
        assert!(!pause.is_paused());
        assert_eq!(pause.pending_resume(), Some(ticket));

        pause.set_hovered(true);
        assert!(pause.finish_manual(ticket));
        // And the delayed resume clears it despite the hover.
        assert!(!pause.is_paused());
        assert!(pause.is_hovered());
    }

    #[test]
    fn independent_mode_waits_for_both_sources() {
        let mut pause = PauseState::new(PauseMode::Independent);
        let (_, ticket) = pause.begin_manual();
        pause.set_hovered(true);
        pause.set_hovered(false);
        assert!(pause.is_paused());

        pause.set_hovered(true);
        assert!(pause.finish_manual(ticket));
        assert!(pause.is_paused());
        pause.set_hovered(false);
        assert!(!pause.is_paused());
    }
}
