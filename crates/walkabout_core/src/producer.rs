//! Zero-argument callables whose results are walked on demand.

use std::fmt;
use std::sync::Arc;

use crate::value::Value;
use crate::walkable::IntoValues;

/// A callable that yields values when the walker reaches it.
///
/// The walker invokes it exactly once per visit and walks the returned values
/// in return-position order.
#[derive(Clone)]
pub struct Producer {
    call: Arc<dyn Fn() -> Vec<Value> + Send + Sync>,
}

impl Producer {
    /// Wraps `f`. Its return type decides how many values it yields:
    /// `()` yields none, a tuple yields one per element, a `Vec` one per item.
    pub fn new<F, R>(f: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: IntoValues,
    {
        Self {
            call: Arc::new(move || f().into_values()),
        }
    }

    /// Invokes the callable.
    pub fn call(&self) -> Vec<Value> {
        (self.call)()
    }
}

impl fmt::Debug for Producer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Producer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_unit_return_yields_nothing() {
        let producer = Producer::new(|| ());
        assert!(producer.call().is_empty());
    }

    #[test]
    fn test_tuple_return_keeps_positions() {
        let producer = Producer::new(|| ("first", 7_u8, "third"));
        let values = producer.call();

        assert_eq!(values.len(), 3);
        assert_eq!(values[0].as_str(), Some("first"));
        assert!(values[1].is_other());
        assert_eq!(values[2].as_str(), Some("third"));
    }

    #[test]
    fn test_each_call_invokes_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let producer = Producer::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            vec!["x".to_string()]
        });

        producer.call();
        producer.call();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
