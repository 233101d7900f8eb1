//! Visitor trait and traversal results.

use std::fmt;
use std::ops::ControlFlow;

/// Result type for visitor methods to control traversal.
///
/// - `ControlFlow::Continue(())` - keep walking
/// - `ControlFlow::Break(())` - stop the walk
pub type VisitResult = ControlFlow<()>;

/// Why a walk ended before visiting everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interrupt {
    /// The visitor returned `ControlFlow::Break`.
    Stopped,
    /// The walk's [`CancelToken`](crate::CancelToken) was cancelled.
    Cancelled,
    /// A stream item did not arrive within the configured timeout.
    TimedOut,
}

impl fmt::Display for Interrupt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interrupt::Stopped => f.write_str("stopped by visitor"),
            Interrupt::Cancelled => f.write_str("cancelled"),
            Interrupt::TimedOut => f.write_str("timed out waiting for stream item"),
        }
    }
}

/// Result of a configured walk: `Continue(())` once everything was visited.
pub type WalkOutcome = ControlFlow<Interrupt>;

/// Receives every string the walker discovers.
///
/// Any `FnMut(&str)` closure is a visitor that never stops the walk. Implement
/// the trait directly to stop early.
pub trait Visitor {
    /// Called once per discovered string.
    fn visit_str(&mut self, value: &str) -> VisitResult;
}

impl<F> Visitor for F
where
    F: FnMut(&str),
{
    #[inline]
    fn visit_str(&mut self, value: &str) -> VisitResult {
        self(value);
        ControlFlow::Continue(())
    }
}
