//! Tokio driver for a carousel engine
//!
//! [`CarouselHandle::spawn`] moves an engine into its own task. The task owns
//! the engine and both timers, so there are never two writers: commands,
//! viewport changes, and timer firings are serialized through a single
//! `select!` loop. Observers read [`CarouselSnapshot`]s from a watch channel.

use std::fmt;
use std::future::pending;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, Interval, MissedTickBehavior, Sleep};
use tracing::{debug, trace, warn};

use crate::engine::CarouselEngine;
use crate::error::{CarouselError, Result};
use crate::gesture::TouchEvent;
use crate::pause::ResumeTicket;
use crate::snapshot::CarouselSnapshot;
use crate::timers::TimerHost;
use crate::types::{CarouselConfig, CarouselKey};
use crate::viewport::BreakpointObserver;

const COMMAND_BUFFER: usize = 64;

struct PendingResume {
    ticket: ResumeTicket,
    sleep: Pin<Box<Sleep>>,
}

/// Which timer woke the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerFire {
    Autoplay,
    Resume(ResumeTicket),
}

/// [`TimerHost`] backed by tokio time. Only one resume is ever outstanding:
/// scheduling a new one replaces the old.
#[derive(Default)]
pub struct TokioTimers {
    autoplay: Option<Interval>,
    resume: Option<PendingResume>,
}

impl fmt::Debug for TokioTimers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokioTimers")
            .field("autoplay", &self.autoplay.as_ref().map(Interval::period))
            .field("resume", &self.resume.as_ref().map(|p| p.ticket))
            .finish()
    }
}

impl TokioTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn autoplay_armed(&self) -> bool {
        self.autoplay.is_some()
    }

    pub fn pending_resume(&self) -> Option<ResumeTicket> {
        self.resume.as_ref().map(|pending| pending.ticket)
    }

    /// Wait for the next timer firing. Pends forever when nothing is armed.
    /// Cancel safe: dropping the future loses no firing.
    pub async fn fired(&mut self) -> TimerFire {
        let Self { autoplay, resume } = self;
        let fire = tokio::select! {
            biased;
            ticket = resume_due(resume) => TimerFire::Resume(ticket),
            _ = next_autoplay(autoplay) => TimerFire::Autoplay,
        };
        if let TimerFire::Resume(ticket) = fire
            && self.pending_resume() == Some(ticket)
        {
            self.resume = None;
        }
        fire
    }
}

async fn next_autoplay(autoplay: &mut Option<Interval>) {
    match autoplay {
        Some(interval) => {
            interval.tick().await;
        }
        None => pending::<()>().await,
    }
}

async fn resume_due(resume: &mut Option<PendingResume>) -> ResumeTicket {
    match resume {
        Some(pending) => {
            pending.sleep.as_mut().await;
            pending.ticket
        }
        None => pending::<ResumeTicket>().await,
    }
}

impl TimerHost for TokioTimers {
    fn arm_autoplay(&mut self, period: Duration) {
        let period = period.max(Duration::from_millis(1));
        let mut interval =
            tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.autoplay = Some(interval);
    }

    fn disarm_autoplay(&mut self) {
        self.autoplay = None;
    }

    fn schedule_resume(&mut self, ticket: ResumeTicket, delay: Duration) {
        self.resume = Some(PendingResume {
            ticket,
            sleep: Box::pin(tokio::time::sleep(delay)),
        });
    }

    fn cancel_resume(&mut self, ticket: ResumeTicket) {
        if self.pending_resume() == Some(ticket) {
            self.resume = None;
        }
    }
}

enum Command<T> {
    Next,
    Previous,
    GoTo(usize),
    Hover(bool),
    Touch(TouchEvent),
    SetItems(Arc<[T]>),
    Dispose(oneshot::Sender<()>),
}

enum Wake<T> {
    Command(Option<Command<T>>),
    Viewport(bool),
    Timer(TimerFire),
}

/// Owner-side handle to a spawned carousel task. Dropping the handle aborts
/// the task, which disposes the engine and its timers.
pub struct CarouselHandle<T> {
    key: CarouselKey,
    commands: mpsc::Sender<Command<T>>,
    snapshots: watch::Receiver<CarouselSnapshot<T>>,
    task: Option<JoinHandle<()>>,
}

impl<T> fmt::Debug for CarouselHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselHandle")
            .field("key", &self.key)
            .field(
                "running",
                &self.task.as_ref().is_some_and(|task| !task.is_finished()),
            )
            .field("item_type", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T> CarouselHandle<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Mount an engine sized for the current viewport width and spawn its
    /// driver on the current tokio runtime. Later widths published on
    /// `viewport` re-evaluate the breakpoints.
    pub fn spawn(
        key: CarouselKey,
        items: impl Into<Arc<[T]>>,
        config: CarouselConfig,
        mut viewport: watch::Receiver<u32>,
    ) -> Self {
        let width = *viewport.borrow_and_update();
        let observer = BreakpointObserver::new(config.breakpoints, width);
        let engine = CarouselEngine::mount(
            key.clone(),
            items,
            config,
            width,
            TokioTimers::new(),
        );

        let (snapshot_tx, snapshots) = watch::channel(engine.snapshot());
        let (commands, command_rx) = mpsc::channel(COMMAND_BUFFER);
        let task = tokio::spawn(drive(
            engine,
            command_rx,
            viewport,
            observer,
            snapshot_tx,
        ));

        Self {
            key,
            commands,
            snapshots,
            task: Some(task),
        }
    }
}

impl<T> CarouselHandle<T> {
    pub fn key(&self) -> &CarouselKey {
        &self.key
    }

    pub async fn next_item(&self) -> Result<()> {
        self.send(Command::Next).await
    }

    pub async fn previous_item(&self) -> Result<()> {
        self.send(Command::Previous).await
    }

    pub async fn go_to(&self, index: usize) -> Result<()> {
        self.send(Command::GoTo(index)).await
    }

    pub async fn set_hovered(&self, hovered: bool) -> Result<()> {
        self.send(Command::Hover(hovered)).await
    }

    pub async fn touch(&self, event: TouchEvent) -> Result<()> {
        self.send(Command::Touch(event)).await
    }

    pub async fn set_items(&self, items: impl Into<Arc<[T]>>) -> Result<()> {
        self.send(Command::SetItems(items.into())).await
    }

    /// Latest published state.
    pub fn snapshot(&self) -> CarouselSnapshot<T>
    where
        T: Clone,
    {
        self.snapshots.borrow().clone()
    }

    /// A receiver that is notified on every published change.
    pub fn subscribe(&self) -> watch::Receiver<CarouselSnapshot<T>> {
        self.snapshots.clone()
    }

    /// Dispose the engine and wait for the task to exit. Later commands
    /// fail with [`CarouselError::Closed`]; disposing again is a no-op.
    pub async fn dispose(&mut self) -> Result<()> {
        if self.task.is_none() {
            return Ok(());
        }
        let (ack_tx, ack_rx) = oneshot::channel();
        self.send(Command::Dispose(ack_tx)).await?;
        ack_rx.await.map_err(|_| self.closed())?;
        if let Some(task) = self.task.take()
            && let Err(err) = task.await
        {
            warn!(carousel = %self.key, "carousel task ended abnormally: {err}");
        }
        Ok(())
    }

    async fn send(&self, command: Command<T>) -> Result<()> {
        self.commands
            .send(command)
            .await
            .map_err(|_| self.closed())
    }

    fn closed(&self) -> CarouselError {
        CarouselError::Closed(self.key.clone())
    }
}

impl<T> Drop for CarouselHandle<T> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn drive<T: Clone>(
    mut engine: CarouselEngine<T, TokioTimers>,
    mut commands: mpsc::Receiver<Command<T>>,
    mut viewport: watch::Receiver<u32>,
    mut observer: BreakpointObserver,
    snapshots: watch::Sender<CarouselSnapshot<T>>,
) {
    let mut published = engine.revision();
    let mut viewport_open = true;

    loop {
        let wake = tokio::select! {
            biased;
            command = commands.recv() => Wake::Command(command),
            changed = viewport.changed(), if viewport_open => {
                Wake::Viewport(changed.is_ok())
            }
            fire = engine.timers_mut().fired() => Wake::Timer(fire),
        };

        match wake {
            Wake::Command(None) => {
                debug!(carousel = %engine.key(), "all handles dropped");
                break;
            }
            Wake::Command(Some(Command::Dispose(ack))) => {
                engine.dispose();
                let _ = ack.send(());
                break;
            }
            Wake::Command(Some(command)) => apply(&mut engine, command),
            Wake::Viewport(true) => {
                let width = *viewport.borrow_and_update();
                trace!(carousel = %engine.key(), width, "viewport changed");
                observer.apply(width, &mut engine);
            }
            Wake::Viewport(false) => {
                debug!(
                    carousel = %engine.key(),
                    "viewport source closed; keeping last layout"
                );
                viewport_open = false;
            }
            Wake::Timer(TimerFire::Autoplay) => {
                engine.tick();
            }
            Wake::Timer(TimerFire::Resume(ticket)) => engine.resume(ticket),
        }

        if engine.revision() != published {
            published = engine.revision();
            snapshots.send_replace(engine.snapshot());
        }
    }
}

fn apply<T>(engine: &mut CarouselEngine<T, TokioTimers>, command: Command<T>) {
    match command {
        Command::Next => engine.next_item(),
        Command::Previous => engine.previous_item(),
        Command::GoTo(index) => engine.go_to(index),
        Command::Hover(hovered) => engine.set_hovered(hovered),
        Command::Touch(event) => {
            engine.handle_touch(event);
        }
        Command::SetItems(items) => engine.set_items(items),
        // Handled by the driver loop.
        Command::Dispose(_) => {}
    }
}
