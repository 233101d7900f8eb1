//! Streams: values delivered over time by a concurrent sender.
//!
//! A [`Stream`] is closed when every sender has been dropped. Walking a
//! stream blocks the calling thread on each receive, so the sending side
//! normally runs on another thread:
//!
//! ```rust
//! use std::thread;
//! use walkabout_core::{stream, walk};
//!
//! let (tx, rx) = stream::channel();
//! let producer = thread::spawn(move || {
//!     tx.send("Berlin").unwrap();
//!     tx.send("Katowice").unwrap();
//!     // dropping `tx` closes the stream
//! });
//!
//! let mut got = Vec::new();
//! walk(&rx, |s| got.push(s.to_string()));
//! producer.join().unwrap();
//! assert_eq!(got, vec!["Berlin", "Katowice"]);
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{Receiver, SendError, Sender, TryRecvError};

use crate::cancel::CancelToken;
use crate::value::Value;
use crate::walkable::Walkable;

/// Outcome of a single receive.
#[derive(Debug)]
pub(crate) enum Recv {
    Item(Value),
    Closed,
    Cancelled,
    TimedOut,
}

/// A type-erased blocking source of values.
trait Source: Send + Sync {
    fn recv(&self, cancel: Option<&CancelToken>, timeout: Option<Duration>) -> Recv;
}

impl<T> Source for Receiver<T>
where
    T: Walkable + Send + 'static,
{
    fn recv(&self, cancel: Option<&CancelToken>, timeout: Option<Duration>) -> Recv {
        // Fast path: nothing to race against.
        if cancel.is_none() && timeout.is_none() {
            return match Receiver::recv(self) {
                Ok(item) => Recv::Item(item.to_value()),
                Err(_) => Recv::Closed,
            };
        }

        // Anything already delivered wins over the deadline, even a zero one.
        match self.try_recv() {
            Ok(item) => return Recv::Item(item.to_value()),
            Err(TryRecvError::Disconnected) => return Recv::Closed,
            Err(TryRecvError::Empty) => {}
        }

        let never = crossbeam_channel::never::<()>();
        let cancelled = cancel.map_or(&never, CancelToken::signal);
        let deadline = match timeout {
            Some(timeout) => crossbeam_channel::after(timeout),
            None => crossbeam_channel::never(),
        };

        crossbeam_channel::select! {
            recv(self) -> msg => match msg {
                Ok(item) => Recv::Item(item.to_value()),
                Err(_) => Recv::Closed,
            },
            recv(cancelled) -> _ => Recv::Cancelled,
            recv(deadline) -> _ => Recv::TimedOut,
        }
    }
}

/// The receiving end of a stream of values.
///
/// Cloning a `Stream` shares the underlying channel: each item is received by
/// exactly one clone.
#[derive(Clone)]
pub struct Stream {
    source: Arc<dyn Source>,
}

impl Stream {
    /// Wraps any channel receiver whose items are walkable.
    pub fn from_receiver<T>(receiver: Receiver<T>) -> Self
    where
        T: Walkable + Send + 'static,
    {
        Self {
            source: Arc::new(receiver),
        }
    }

    pub(crate) fn recv(&self, cancel: Option<&CancelToken>, timeout: Option<Duration>) -> Recv {
        self.source.recv(cancel, timeout)
    }
}

impl fmt::Debug for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream").finish_non_exhaustive()
    }
}

/// The sending end of a stream. Dropping every sender closes the stream.
#[derive(Debug, Clone)]
pub struct StreamSender {
    tx: Sender<Value>,
}

impl StreamSender {
    /// Sends an item, blocking while a bounded stream is full.
    ///
    /// Fails only when every receiver has been dropped.
    pub fn send(&self, item: impl Walkable) -> Result<(), SendError<Value>> {
        self.tx.send(item.to_value())
    }

    /// Closes this sender. Equivalent to dropping it.
    pub fn close(self) {}
}

/// Creates an unbounded stream.
pub fn channel() -> (StreamSender, Stream) {
    let (tx, rx) = crossbeam_channel::unbounded();
    (StreamSender { tx }, Stream::from_receiver(rx))
}

/// Creates a stream that holds at most `cap` undelivered items.
///
/// A capacity of zero makes every send wait for a matching receive, like an
/// unbuffered channel.
pub fn bounded(cap: usize) -> (StreamSender, Stream) {
    let (tx, rx) = crossbeam_channel::bounded(cap);
    (StreamSender { tx }, Stream::from_receiver(rx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_recv_until_closed() {
        let (tx, rx) = channel();
        tx.send("a").unwrap();
        tx.send("b").unwrap();
        tx.close();

        assert!(matches!(rx.recv(None, None), Recv::Item(Value::String(s)) if s == "a"));
        assert!(matches!(rx.recv(None, None), Recv::Item(Value::String(s)) if s == "b"));
        assert!(matches!(rx.recv(None, None), Recv::Closed));
    }

    #[test]
    fn test_recv_times_out_on_open_stream() {
        let (_tx, rx) = channel();
        let result = rx.recv(None, Some(Duration::from_millis(10)));
        assert!(matches!(result, Recv::TimedOut));
    }

    #[test]
    fn test_buffered_items_beat_zero_timeout() {
        for _ in 0..200 {
            let (tx, rx) = channel();
            tx.send("a").unwrap();
            tx.close();

            let timeout = Some(Duration::ZERO);
            assert!(matches!(rx.recv(None, timeout), Recv::Item(Value::String(s)) if s == "a"));
            assert!(matches!(rx.recv(None, timeout), Recv::Closed));
        }
    }

    #[test]
    fn test_recv_observes_cancellation() {
        let (_tx, rx) = channel();
        let token = CancelToken::new();
        let remote = token.clone();

        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(5));
            remote.cancel();
        });

        let result = rx.recv(Some(&token), None);
        handle.join().unwrap();
        assert!(matches!(result, Recv::Cancelled));
    }

    #[test]
    fn test_unbuffered_stream_hands_over_items() {
        let (tx, rx) = bounded(0);
        let handle = thread::spawn(move || {
            tx.send("handoff").unwrap();
        });

        assert!(matches!(rx.recv(None, None), Recv::Item(Value::String(s)) if s == "handoff"));
        handle.join().unwrap();
        assert!(matches!(rx.recv(None, None), Recv::Closed));
    }

    #[test]
    fn test_typed_receiver_converts_items() {
        let (tx, rx) = crossbeam_channel::unbounded::<Option<String>>();
        tx.send(Some("inner".to_string())).unwrap();
        tx.send(None).unwrap();
        drop(tx);

        let stream = Stream::from_receiver(rx);
        assert!(matches!(stream.recv(None, None), Recv::Item(Value::Reference(Some(_)))));
        assert!(matches!(stream.recv(None, None), Recv::Item(Value::Reference(None))));
        assert!(matches!(stream.recv(None, None), Recv::Closed));
    }

    #[test]
    fn test_send_fails_without_receivers() {
        let (tx, rx) = channel();
        drop(rx);
        assert!(tx.send("lost").is_err());
    }
}
