//! Walk functions for value traversal.
//!
//! [`Walker::walk_value`] classifies a value by [`Kind`](crate::Kind) and
//! hands it to the matching per-kind handler. Handlers recurse back through
//! the dispatcher for every child value.

use std::ops::ControlFlow;

use tracing::{debug, trace};

use crate::config::WalkConfig;
use crate::producer::Producer;
use crate::stream::{Recv, Stream};
use crate::value::Value;
use crate::walkable::Walkable;

use super::visit::{Interrupt, Visitor, WalkOutcome};

/// Walks values with a fixed configuration.
///
/// A `Walker` keeps no state between calls. One instance can be shared by
/// any number of threads walking independent values.
#[derive(Debug, Clone, Default)]
pub struct Walker {
    config: WalkConfig,
}

impl Walker {
    /// Creates a walker with the given configuration.
    pub fn new(config: WalkConfig) -> Self {
        Self { config }
    }

    /// Returns the walker's configuration.
    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    /// Walks anything walkable.
    ///
    /// A [`Value`] (or a pointer to one) is walked in place; other types are
    /// converted with [`Walkable::to_value`] first.
    pub fn walk<T, V>(&self, value: &T, visitor: &mut V) -> WalkOutcome
    where
        T: Walkable + ?Sized,
        V: Visitor + ?Sized,
    {
        self.walk_value(&value.as_value(), visitor)
    }

    /// Walks a value, calling `visitor` for every string reachable from it.
    ///
    /// Returns `Continue(())` when everything was visited, or the reason the
    /// walk stopped early. With the default configuration the only possible
    /// interruption is a visitor returning `Break`.
    pub fn walk_value<V>(&self, value: &Value, visitor: &mut V) -> WalkOutcome
    where
        V: Visitor + ?Sized,
    {
        let outcome = self.dispatch(value, visitor, 0);
        if let ControlFlow::Break(reason) = outcome {
            debug!("Walk interrupted: {}", reason);
        }
        outcome
    }

    fn dispatch<V>(&self, value: &Value, visitor: &mut V, depth: usize) -> WalkOutcome
    where
        V: Visitor + ?Sized,
    {
        if self.config.max_depth.is_some_and(|max| depth > max) {
            trace!(depth, kind = %value.kind(), "Skipping value beyond max depth");
            return ControlFlow::Continue(());
        }
        if self
            .config
            .cancel
            .as_ref()
            .is_some_and(|token| token.is_cancelled())
        {
            return ControlFlow::Break(Interrupt::Cancelled);
        }

        trace!(depth, kind = %value.kind(), "Dispatching value");

        match value {
            Value::String(s) => Self::walk_string(s, visitor),
            Value::Record(fields) => self.walk_record(fields, visitor, depth),
            Value::Reference(target) => self.walk_reference(target.as_deref(), visitor, depth),
            Value::Sequence(items) => self.walk_sequence(items, visitor, depth),
            Value::Mapping(entries) => self.walk_mapping(entries, visitor, depth),
            Value::Stream(stream) => self.walk_stream(stream, visitor, depth),
            Value::Producer(producer) => self.walk_producer(producer, visitor, depth),
            Value::Other => ControlFlow::Continue(()),
        }
    }

    #[inline]
    fn walk_string<V>(s: &str, visitor: &mut V) -> WalkOutcome
    where
        V: Visitor + ?Sized,
    {
        match visitor.visit_str(s) {
            ControlFlow::Continue(()) => ControlFlow::Continue(()),
            ControlFlow::Break(()) => ControlFlow::Break(Interrupt::Stopped),
        }
    }

    fn walk_record<V>(&self, fields: &[(String, Value)], visitor: &mut V, depth: usize) -> WalkOutcome
    where
        V: Visitor + ?Sized,
    {
        for (_, field) in fields {
            self.dispatch(field, visitor, depth + 1)?;
        }
        ControlFlow::Continue(())
    }

    fn walk_reference<V>(&self, target: Option<&Value>, visitor: &mut V, depth: usize) -> WalkOutcome
    where
        V: Visitor + ?Sized,
    {
        match target {
            // A reference adds no nesting level of its own.
            Some(value) => self.dispatch(value, visitor, depth),
            None => ControlFlow::Continue(()),
        }
    }

    fn walk_sequence<V>(&self, items: &[Value], visitor: &mut V, depth: usize) -> WalkOutcome
    where
        V: Visitor + ?Sized,
    {
        for item in items {
            self.dispatch(item, visitor, depth + 1)?;
        }
        ControlFlow::Continue(())
    }

    fn walk_mapping<V>(&self, entries: &[(Value, Value)], visitor: &mut V, depth: usize) -> WalkOutcome
    where
        V: Visitor + ?Sized,
    {
        for (_, value) in entries {
            self.dispatch(value, visitor, depth + 1)?;
        }
        ControlFlow::Continue(())
    }

    fn walk_producer<V>(&self, producer: &Producer, visitor: &mut V, depth: usize) -> WalkOutcome
    where
        V: Visitor + ?Sized,
    {
        let values = producer.call();
        debug!("Producer returned {} values", values.len());
        self.walk_sequence(&values, visitor, depth)
    }

    fn walk_stream<V>(&self, stream: &Stream, visitor: &mut V, depth: usize) -> WalkOutcome
    where
        V: Visitor + ?Sized,
    {
        let mut received = 0usize;
        loop {
            match stream.recv(self.config.cancel.as_ref(), self.config.stream_timeout) {
                Recv::Item(item) => {
                    received += 1;
                    self.dispatch(&item, visitor, depth + 1)?;
                }
                Recv::Closed => {
                    debug!("Stream closed after {} items", received);
                    return ControlFlow::Continue(());
                }
                Recv::Cancelled => return ControlFlow::Break(Interrupt::Cancelled),
                Recv::TimedOut => return ControlFlow::Break(Interrupt::TimedOut),
            }
        }
    }
}

/// Walks `value` with default settings, calling `visitor` once per discovered
/// string.
///
/// Blocks until every stream reachable from `value` has been closed by its
/// sender. Use [`walk_with`] to bound that wait.
pub fn walk<T>(value: &T, mut visitor: impl FnMut(&str))
where
    T: Walkable + ?Sized,
{
    // Closures never break and the default configuration never interrupts.
    let _ = Walker::default().walk(value, &mut visitor);
}

/// Walks `value` with an explicit configuration.
pub fn walk_with<T, V>(value: &T, visitor: &mut V, config: &WalkConfig) -> WalkOutcome
where
    T: Walkable + ?Sized,
    V: Visitor + ?Sized,
{
    Walker::new(config.clone()).walk(value, visitor)
}

/// Collects every discovered string, in walk order.
pub fn collect<T>(value: &T) -> Vec<String>
where
    T: Walkable + ?Sized,
{
    let mut found = Vec::new();
    walk(value, |s| found.push(s.to_string()));
    found
}
