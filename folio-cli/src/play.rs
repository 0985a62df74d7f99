//! `folio play`: run one carousel in real time against a line script.

use std::fmt;
use std::future::{Future, pending};
use std::io::Write;
use std::pin::Pin;
use std::time::Duration;

use anyhow::Context;
use clap::ValueEnum;
use folio_carousel::{CarouselConfig, CarouselHandle, CarouselKey, TouchEvent};
use folio_config::SiteConfig;
use folio_model::{CERTIFICATES, WORK_EXPERIENCE};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::watch;
use tokio::time::{Instant, Sleep};
use tracing::{debug, info};

use crate::render::{Card, cards, render_snapshot};
use crate::script::ScriptCommand;

/// The two carousels on the portfolio site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Showcase {
    Certificates,
    Experience,
}

impl Showcase {
    pub fn key(self) -> CarouselKey {
        match self {
            Showcase::Certificates => CarouselKey::Certificates,
            Showcase::Experience => CarouselKey::Experience,
        }
    }

    pub fn cards(self) -> Vec<Card> {
        match self {
            Showcase::Certificates => cards(CERTIFICATES),
            Showcase::Experience => cards(WORK_EXPERIENCE),
        }
    }

    pub fn config(self, site: &SiteConfig) -> CarouselConfig {
        site.carousel(&self.key()).clone()
    }
}

#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub showcase: Showcase,
    pub width: u32,
    pub duration: Option<Duration>,
    /// Emit one JSON snapshot per line instead of the text strip.
    pub json: bool,
}

/// Why the player stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayEnd {
    Quit,
    EndOfInput,
    Elapsed,
    Interrupted,
}

impl fmt::Display for PlayEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlayEnd::Quit => "quit",
            PlayEnd::EndOfInput => "end of input",
            PlayEnd::Elapsed => "duration elapsed",
            PlayEnd::Interrupted => "interrupted",
        })
    }
}

enum Event {
    Published,
    Closed,
    Line(Option<String>),
    WaitOver,
    Elapsed,
    Interrupted,
}

/// Drive a spawned carousel: print a line per published state change and
/// apply commands read from `input` until one of the stop conditions.
pub async fn play<R, W>(
    options: PlayOptions,
    config: CarouselConfig,
    input: R,
    out: &mut W,
    shutdown: impl Future<Output = ()>,
) -> anyhow::Result<PlayEnd>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let (width_tx, width_rx) = watch::channel(options.width);
    let mut handle = CarouselHandle::spawn(
        options.showcase.key(),
        options.showcase.cards(),
        config,
        width_rx,
    );
    let mut updates = handle.subscribe();
    writeln!(out, "{}", render_snapshot(&handle.snapshot(), options.json)?)?;

    let mut lines = input.lines();
    let mut reading = true;
    let mut wait: Option<Pin<Box<Sleep>>> = None;
    let mut deadline: Option<Pin<Box<Sleep>>> = options.duration.map(|d| {
        Box::pin(tokio::time::sleep_until(Instant::now() + d))
    });
    tokio::pin!(shutdown);

    let end = loop {
        let event = tokio::select! {
            changed = updates.changed() => match changed {
                Ok(()) => Event::Published,
                Err(_) => Event::Closed,
            },
            line = lines.next_line(), if reading && wait.is_none() => {
                Event::Line(line.context("failed to read command input")?)
            }
            _ = sleep_or_pend(&mut wait) => Event::WaitOver,
            _ = sleep_or_pend(&mut deadline) => Event::Elapsed,
            _ = &mut shutdown => Event::Interrupted,
        };

        match event {
            Event::Published => {
                let line =
                    render_snapshot(&updates.borrow_and_update(), options.json)?;
                writeln!(out, "{line}")?;
            }
            Event::Closed => break PlayEnd::Quit,
            Event::WaitOver => wait = None,
            Event::Elapsed => break PlayEnd::Elapsed,
            Event::Interrupted => break PlayEnd::Interrupted,
            Event::Line(None) => {
                reading = false;
                if deadline.is_none() {
                    break PlayEnd::EndOfInput;
                }
            }
            Event::Line(Some(line)) => {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                let command = match line.parse::<ScriptCommand>() {
                    Ok(command) => command,
                    Err(err) => {
                        writeln!(out, "? {err}")?;
                        continue;
                    }
                };
                debug!(?command, "script command");
                match command {
                    ScriptCommand::Quit => break PlayEnd::Quit,
                    ScriptCommand::Wait(duration) => {
                        wait = Some(Box::pin(tokio::time::sleep(duration)));
                    }
                    ScriptCommand::Resize(width) => {
                        width_tx.send_replace(width);
                    }
                    other => apply(&handle, other).await?,
                }
            }
        }
    };

    info!(carousel = %handle.key(), reason = %end, "player stopped");
    handle.dispose().await?;
    Ok(end)
}

async fn apply(
    handle: &CarouselHandle<Card>,
    command: ScriptCommand,
) -> anyhow::Result<()> {
    match command {
        ScriptCommand::Next => handle.next_item().await?,
        ScriptCommand::Previous => handle.previous_item().await?,
        // Indicators are numbered from 1 on screen.
        ScriptCommand::GoTo(number) => {
            handle.go_to(number.saturating_sub(1)).await?
        }
        ScriptCommand::Hover => handle.set_hovered(true).await?,
        ScriptCommand::Leave => handle.set_hovered(false).await?,
        ScriptCommand::Swipe { from, to } => {
            handle.touch(TouchEvent::Start { x: from }).await?;
            handle.touch(TouchEvent::Move { x: to }).await?;
            handle.touch(TouchEvent::End).await?;
        }
        ScriptCommand::Resize(_)
        | ScriptCommand::Wait(_)
        | ScriptCommand::Quit => {}
    }
    Ok(())
}

async fn sleep_or_pend(sleep: &mut Option<Pin<Box<Sleep>>>) {
    match sleep {
        Some(sleep) => sleep.as_mut().await,
        None => pending().await,
    }
}
