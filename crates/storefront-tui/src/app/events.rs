//! Event handling for the TUI

use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent, KeyEventKind};
use futures::{FutureExt, StreamExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::timer::TimerId;

/// Application events
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input
    Key(KeyEvent),
    /// Terminal resized
    Resize,
    /// Terminal tick (for animations)
    Tick,
    /// A splash timer ran out
    SplashElapsed(TimerId),
    /// Terminal input stopped and will not resume
    InputClosed(String),
}

/// Sender half handed to anything that produces events
pub type EventSender = mpsc::UnboundedSender<Event>;

/// Event handler that feeds terminal input and ticks into one channel
pub struct EventHandler {
    /// Sender for events
    sender: EventSender,
    /// Receiver for events
    receiver: mpsc::UnboundedReceiver<Event>,
    /// Background producers, stopped on drop
    tasks: Vec<JoinHandle<()>>,
}

impl EventHandler {
    /// Create a handler with no background producers
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            sender,
            receiver,
            tasks: Vec::new(),
        }
    }

    /// Create a handler reading the terminal and ticking at `tick_rate`
    pub fn spawn(tick_rate: Duration) -> Self {
        let mut handler = Self::new();
        handler.tasks.push(spawn_ticker(tick_rate, handler.sender()));
        handler.tasks.push(spawn_terminal_reader(handler.sender()));
        handler
    }

    /// Get a clone of the sender for other tasks to send events
    pub fn sender(&self) -> EventSender {
        self.sender.clone()
    }

    /// Try to receive the next event (non-blocking)
    pub fn try_recv(&mut self) -> Option<Event> {
        self.receiver.try_recv().ok()
    }

    /// Receive the next event
    pub async fn recv(&mut self) -> Option<Event> {
        self.receiver.recv().await
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

fn spawn_ticker(tick_rate: Duration, tx: EventSender) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(tick_rate);
        loop {
            interval.tick().await;
            if tx.send(Event::Tick).is_err() {
                break;
            }
        }
    })
}

fn spawn_terminal_reader(tx: EventSender) -> JoinHandle<()> {
    spawn_input_source(tx.clone(), read_terminal(tx))
}

/// Run an input source and report [`Event::InputClosed`] however it ends
fn spawn_input_source<F>(tx: EventSender, source: F) -> JoinHandle<()>
where
    F: Future<Output = String> + Send + 'static,
{
    tokio::spawn(async move {
        let reason = AssertUnwindSafe(source)
            .catch_unwind()
            .await
            .unwrap_or_else(|_| "terminal reader panicked".to_string());
        tracing::error!(%reason, "terminal input closed");
        let _ = tx.send(Event::InputClosed(reason));
    })
}

/// Forward terminal events until the stream fails or ends
async fn read_terminal(tx: EventSender) -> String {
    let mut reader = EventStream::new();
    while let Some(event) = reader.next().await {
        let forwarded = match event {
            Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                tx.send(Event::Key(key))
            }
            Ok(CrosstermEvent::Resize(_, _)) => tx.send(Event::Resize),
            Ok(_) => Ok(()),
            Err(e) => return format!("terminal input error: {}", e),
        };
        if forwarded.is_err() {
            return "event receiver dropped".to_string();
        }
    }
    "terminal input stream ended".to_string()
}
