//! Touch swipe recognition
//!
//! Turns a touch start/move/end sequence into at most one discrete swipe.
//! Only the horizontal coordinate matters.

/// Raw touch input, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchEvent {
    Start { x: f32 },
    Move { x: f32 },
    End,
}

/// Direction the finger travelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right to left; content follows, revealing the next item.
    Left,
    /// Finger moved left to right; reveals the previous item.
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeRecognizer {
    threshold: f32,
    start_x: Option<f32>,
    last_x: Option<f32>,
}

impl SwipeRecognizer {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.abs(),
            start_x: None,
            last_x: None,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Whether a gesture is in progress.
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    /// Feed one event; returns a direction when a gesture completes past the
    /// threshold.
    pub fn handle(&mut self, event: TouchEvent) -> Option<SwipeDirection> {
        match event {
            TouchEvent::Start { x } => {
                self.start_x = Some(x);
                self.last_x = None;
                None
            }
            TouchEvent::Move { x } => {
                if self.start_x.is_some() {
                    self.last_x = Some(x);
                }
                None
            }
            TouchEvent::End => self.finish(),
        }
    }

    fn finish(&mut self) -> Option<SwipeDirection> {
        // A tap (no move) or an end without a start never navigates.
        let start = self.start_x.take()?;
        let end = self.last_x.take()?;
        let distance = start - end;
        if distance > self.threshold {
            Some(SwipeDirection::Left)
        } else if distance < -self.threshold {
            Some(SwipeDirection::Right)
        } else {
            None
        }
    }
}
