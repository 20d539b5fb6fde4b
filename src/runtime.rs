use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};
use log::{info, warn};

/// Redraw cadence; also how often the sample clock is polled without input.
pub const TICK_RATE_MS: u64 = 100;

/// Unified event type consumed by the app runner
#[derive(Clone, Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    Tick,
    /// the event source is gone; nothing more will arrive
    Closed,
}

/// An event together with the instant the runner picked it up.
///
/// The session's one-second clock is driven from `at`, so every event,
/// keys included, moves time forward.
#[derive(Clone, Debug)]
pub struct Step {
    pub event: AppEvent,
    pub at: Instant,
}

/// Source of terminal events (keyboard, resize, etc.)
pub trait EventSource: Send + 'static {
    /// Block for up to `timeout` waiting for an event.
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError>;
}

/// Production event source using crossterm
pub struct CrosstermEventSource {
    rx: Receiver<AppEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            match event::read() {
                // Windows reports releases too; the text box only cares about presses
                Ok(CtEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(CtEvent::Resize(_, _)) => {
                    if tx.send(AppEvent::Resize).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    // dropping tx surfaces as AppEvent::Closed on the other side
                    warn!("terminal event reader stopped: {e}");
                    break;
                }
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for CrosstermEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Channel-fed event source for headless tests
pub struct TestEventSource {
    rx: Receiver<AppEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<AppEvent>) -> Self {
        Self { rx }
    }
}

impl EventSource for TestEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<AppEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Where the runner reads the current instant from
pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Runner that advances the application one event/tick at a time
pub struct Runner<E: EventSource, C: Clock = SystemClock> {
    event_source: E,
    tick_interval: Duration,
    clock: C,
}

impl<E: EventSource> Runner<E, SystemClock> {
    pub fn new(event_source: E, tick_interval: Duration) -> Self {
        Self::with_clock(event_source, tick_interval, SystemClock)
    }
}

impl<E: EventSource, C: Clock> Runner<E, C> {
    pub fn with_clock(event_source: E, tick_interval: Duration, clock: C) -> Self {
        Self {
            event_source,
            tick_interval,
            clock,
        }
    }

    /// Blocks up to the tick interval and returns the next event, or Tick on
    /// timeout. A dead source yields Closed instead of spinning on ticks.
    pub fn step(&self) -> Step {
        let event = match self.event_source.recv_timeout(self.tick_interval) {
            Ok(ev) => ev,
            Err(RecvTimeoutError::Timeout) => AppEvent::Tick,
            Err(RecvTimeoutError::Disconnected) => {
                info!("event source disconnected");
                AppEvent::Closed
            }
        };

        Step {
            event,
            at: self.clock.now(),
        }
    }
}
