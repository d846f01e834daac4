//! Terminal event pump: a background task merging crossterm input with
//! tick and render pulses into a single stream of [`Event`]s.

use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind, MouseEvent};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;

/// Events consumed by the main loop.
#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    /// Terminal resized to (cols, rows).
    Resize(u16, u16),
    /// Animation / notification-decay pulse.
    Tick,
    /// Redraw pulse.
    Render,
}

/// Handle to the background pump. Dropping it (or calling [`stop`])
/// cancels the task.
///
/// [`stop`]: EventReader::stop
pub struct EventReader {
    rx: mpsc::UnboundedReceiver<Event>,
    cancel: CancellationToken,
}

impl EventReader {
    pub fn new(tick_rate: Duration, render_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        tokio::spawn(pump(tick_rate, render_rate, tx, cancel.clone()));
        Self { rx, cancel }
    }

    /// Next event, or `None` once the pump has stopped.
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

impl Drop for EventReader {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn pump(
    tick_rate: Duration,
    render_rate: Duration,
    tx: mpsc::UnboundedSender<Event>,
    cancel: CancellationToken,
) {
    let mut input = EventStream::new();
    let mut ticks = interval(tick_rate);
    let mut renders = interval(render_rate);
    // A stalled loop should resume at the normal cadence, not replay a
    // burst of stale pulses.
    ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
    renders.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            () = cancel.cancelled() => return,

            _ = ticks.tick() => {
                if tx.send(Event::Tick).is_err() {
                    return;
                }
            }

            _ = renders.tick() => {
                if tx.send(Event::Render).is_err() {
                    return;
                }
            }

            Some(Ok(term)) = input.next() => {
                if let Some(event) = translate(term)
                    && tx.send(event).is_err()
                {
                    return;
                }
            }
        }
    }
}

/// Map a crossterm event to ours. Key release/repeat and focus events
/// are dropped.
fn translate(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
        CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
        _ => None,
    }
}
