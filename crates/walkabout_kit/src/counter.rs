//! A counter that is safe to share between threads.

use parking_lot::Mutex;

/// A counter guarded by a mutex.
///
/// Share it behind an `Arc` (or a scoped borrow) and call [`Counter::inc`]
/// from as many threads as you like.
#[derive(Debug, Default)]
pub struct Counter {
    value: Mutex<u64>,
}

impl Counter {
    /// Creates a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the counter by one.
    pub fn inc(&self) {
        *self.value.lock() += 1;
    }

    /// Returns the current count.
    pub fn value(&self) -> u64 {
        *self.value.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn assert_counter(counter: &Counter, want: u64) {
        assert_eq!(counter.value(), want, "got {} want {}", counter.value(), want);
    }

    #[test]
    fn test_incrementing_three_times_leaves_it_at_three() {
        let counter = Counter::new();
        counter.inc();
        counter.inc();
        counter.inc();

        assert_counter(&counter, 3);
    }

    #[test]
    fn test_runs_safely_concurrently() {
        let wanted_count = 1000;
        let counter = Counter::new();

        thread::scope(|s| {
            for _ in 0..wanted_count {
                s.spawn(|| counter.inc());
            }
        });

        assert_counter(&counter, wanted_count);
    }

    #[test]
    fn test_shared_through_arc() {
        let counter = Arc::new(Counter::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let counter = Arc::clone(&counter);
                thread::spawn(move || {
                    for _ in 0..100 {
                        counter.inc();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_counter(&counter, 800);
    }
}
