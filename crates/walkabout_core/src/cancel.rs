//! Cooperative cancellation for walks that may block on streams.

use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};
use parking_lot::Mutex;
use tracing::debug;

/// A cloneable cancellation token.
///
/// All clones share one signal. Cancelling any clone wakes every walk that is
/// blocked on a stream receive while holding the token, and stops walks before
/// their next step.
///
/// The signal is a zero-capacity channel that never carries a message:
/// cancelling drops the only sender, which disconnects every receiver at once.
#[derive(Debug, Clone)]
pub struct CancelToken {
    trigger: Arc<Mutex<Option<Sender<()>>>>,
    signal: Receiver<()>,
}

impl CancelToken {
    /// Creates a token that has not been cancelled.
    pub fn new() -> Self {
        let (tx, rx) = crossbeam_channel::bounded(0);
        Self {
            trigger: Arc::new(Mutex::new(Some(tx))),
            signal: rx,
        }
    }

    /// Cancels the token. Calling this more than once has no further effect.
    pub fn cancel(&self) {
        if self.trigger.lock().take().is_some() {
            debug!("Walk cancellation requested");
        }
    }

    /// Returns whether the token has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.trigger.lock().is_none()
    }

    /// Receiver that becomes ready (disconnected) once the token is cancelled.
    pub(crate) fn signal(&self) -> &Receiver<()> {
        &self.signal
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}
