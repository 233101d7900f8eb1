//! Request handlers that respect cancellation.
//!
//! A [`RequestContext`] stands in for the lifetime of an inbound request: it
//! is cancelled when the client goes away. [`Server`] starts a blocking fetch
//! in the background and races it against that cancellation, telling the
//! store to cancel if the request loses interest first. [`ContextServer`]
//! hands the context to the store instead and lets it stop on its own.

use std::future::Future;
use std::io;
use std::sync::Arc;

use thiserror::Error;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::watch;
use tracing::debug;

/// Error type for context-aware stores.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    /// The request was cancelled before the data was ready.
    #[error("request cancelled")]
    Cancelled,
}

/// The cancellation scope of a single request.
#[derive(Debug, Clone)]
pub struct RequestContext {
    cancelled: watch::Receiver<bool>,
}

/// Cancels the [`RequestContext`] it was created with.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl RequestContext {
    /// Creates a context that is never cancelled.
    pub fn new() -> Self {
        let (_tx, rx) = watch::channel(false);
        Self { cancelled: rx }
    }

    /// Creates a context together with the handle that cancels it.
    pub fn with_cancel() -> (Self, CancelHandle) {
        let (tx, rx) = watch::channel(false);
        (Self { cancelled: rx }, CancelHandle { tx })
    }

    /// Returns whether the context has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        *self.cancelled.borrow()
    }

    /// Completes once the context is cancelled. Never completes otherwise.
    pub async fn done(&self) {
        let mut rx = self.cancelled.clone();
        let changed = rx.wait_for(|cancelled| *cancelled).await.map(|_| ());
        if changed.is_err() {
            // Handle dropped without cancelling: this request runs to completion.
            std::future::pending::<()>().await;
        }
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelHandle {
    /// Cancels the context. Later calls have no further effect.
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

/// A data source with a blocking fetch that can be told to stop.
pub trait Store: Send + Sync + 'static {
    /// Fetches the response body. May block.
    fn fetch(&self) -> String;

    /// Asks an in-flight fetch to stop.
    fn cancel(&self);
}

/// Serves [`Store::fetch`] results, cancelling the store when the request goes away.
pub struct Server<S> {
    store: Arc<S>,
}

impl<S: Store> Server<S> {
    /// Creates a server backed by `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Handles one request.
    ///
    /// Writes the fetched data to `response` if it arrives before `ctx` is
    /// cancelled. Otherwise calls [`Store::cancel`] and writes nothing; the
    /// background fetch is left to finish on its own.
    pub async fn serve<W>(&self, ctx: &RequestContext, response: &mut W) -> io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let store = Arc::clone(&self.store);
        let fetch = tokio::task::spawn_blocking(move || store.fetch());

        tokio::select! {
            data = fetch => {
                let data = data.map_err(io::Error::other)?;
                response.write_all(data.as_bytes()).await?;
            }
            _ = ctx.done() => {
                debug!("Request cancelled before fetch completed, cancelling store");
                self.store.cancel();
            }
        }
        Ok(())
    }
}

/// A data source that watches the request context itself.
pub trait ContextStore: Send + Sync {
    /// Fetches the response body, returning [`ContextError::Cancelled`] if
    /// `ctx` is cancelled first.
    fn fetch(
        &self,
        ctx: &RequestContext,
    ) -> impl Future<Output = Result<String, ContextError>> + Send;
}

/// Serves [`ContextStore::fetch`] results.
pub struct ContextServer<S> {
    store: S,
}

impl<S: ContextStore> ContextServer<S> {
    /// Creates a server backed by `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Handles one request. Nothing is written if the store was cancelled.
    pub async fn serve<W>(&self, ctx: &RequestContext, response: &mut W) -> io::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        match self.store.fetch(ctx).await {
            Ok(data) => response.write_all(data.as_bytes()).await?,
            Err(e) => debug!("Fetch aborted: {}", e),
        }
        Ok(())
    }
}
