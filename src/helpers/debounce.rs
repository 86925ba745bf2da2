//! Search debouncer
//!
//! Coalesces rapid search keystrokes before a server-side caller refetches:
//! one pending timer, reset on every submission, firing at most once per
//! burst with the latest term. Dropping the debouncer discards the pending
//! timer without firing.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, unbounded};

use crate::error::{Error, Result};

enum Msg {
    Term(String),
    Shutdown,
}

/// Debounces search-term submissions onto a callback
pub struct SearchDebouncer {
    tx: Sender<Msg>,
    handle: Option<JoinHandle<()>>,
}

impl SearchDebouncer {
    /// Spawn a debouncer firing `on_fire` after `delay` of keystroke silence
    pub fn new(delay: Duration, on_fire: impl Fn(String) + Send + 'static) -> Self {
        let (tx, rx) = unbounded();
        let handle = thread::spawn(move || run(rx, delay, on_fire));
        Self {
            tx,
            handle: Some(handle),
        }
    }

    /// Submit the latest search term, restarting the pending timer
    pub fn submit(&self, term: impl Into<String>) -> Result<()> {
        self.tx
            .send(Msg::Term(term.into()))
            .map_err(|e| Error::ChannelSend {
                message: format!("debouncer is gone: {e}"),
            })
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        let _ = self.tx.send(Msg::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn run(rx: Receiver<Msg>, delay: Duration, on_fire: impl Fn(String)) {
    loop {
        // Block until a burst starts.
        let mut pending = match rx.recv() {
            Ok(Msg::Term(term)) => term,
            Ok(Msg::Shutdown) | Err(_) => return,
        };
        // Restart the timer on every keystroke within the burst.
        loop {
            match rx.recv_timeout(delay) {
                Ok(Msg::Term(term)) => pending = term,
                Ok(Msg::Shutdown) => return,
                Err(RecvTimeoutError::Timeout) => {
                    on_fire(pending);
                    break;
                }
                Err(RecvTimeoutError::Disconnected) => return,
            }
        }
    }
}
