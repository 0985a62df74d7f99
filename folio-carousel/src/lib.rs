//! Windowed carousel engine.
//!
//! A reusable, viewport-aware carousel that shows `items_per_view` items of a
//! fixed collection at a time, advances on an autoplay timer, pauses on
//! manual navigation or hover, and understands horizontal swipes. The crate
//! separates the pure pieces (window arithmetic, pause bookkeeping, gesture
//! recognition) from the timer plumbing:
//!
//! - [`CarouselEngine`] is the single source of truth. It never sleeps or
//!   spawns; timer effects go through a [`TimerHost`].
//! - [`ManualTimers`] drives an engine on a virtual clock (tests, headless
//!   hosts).
//! - [`CarouselHandle`] spawns a tokio task that owns an engine, subscribes
//!   to viewport width changes and publishes [`CarouselSnapshot`]s.
#![allow(missing_docs)]

pub mod engine;
pub mod error;
pub mod gesture;
pub mod manual;
pub mod pause;
pub mod runtime;
pub mod snapshot;
pub mod state;
pub mod timers;
pub mod types;
pub mod viewport;

pub use engine::CarouselEngine;
pub use error::CarouselError;
pub use gesture::{SwipeDirection, SwipeRecognizer, TouchEvent};
pub use manual::ManualTimers;
pub use pause::{PauseState, ResumeTicket};
pub use runtime::{CarouselHandle, TokioTimers};
pub use snapshot::{CarouselSnapshot, Indicator};
pub use state::WindowState;
pub use timers::TimerHost;
pub use types::*;
pub use viewport::{BreakpointObserver, Breakpoints};
