//! Visitor pattern for value traversal.
//!
//! # Overview
//!
//! - [`Visitor`] - receives every discovered string
//! - [`Walker`] - dispatches on a value's kind, configured by a [`WalkConfig`](crate::WalkConfig)
//! - [`walk`] - walk with default settings and a closure
//! - [`walk_with`] - walk with explicit settings, reporting interruptions
//! - [`collect`] - gather every discovered string into a `Vec`
//!
//! # Examples
//!
//! ## Closures
//!
//! ```rust
//! use std::collections::HashMap;
//! use walkabout_core::walk;
//!
//! let map = HashMap::from([("Foo", "Bar"), ("Baz", "Boz")]);
//!
//! let mut got = Vec::new();
//! walk(&map, |s| got.push(s.to_string()));
//! got.sort();
//! assert_eq!(got, vec!["Bar", "Boz"]);
//! ```
//!
//! ## Early Termination
//!
//! ```rust
//! use std::ops::ControlFlow;
//! use walkabout_core::{Interrupt, VisitResult, Visitor, WalkConfig, walk_with};
//!
//! struct FindFirst(Option<String>);
//!
//! impl Visitor for FindFirst {
//!     fn visit_str(&mut self, value: &str) -> VisitResult {
//!         self.0 = Some(value.to_string());
//!         ControlFlow::Break(()) // Stop traversal
//!     }
//! }
//!
//! let mut finder = FindFirst(None);
//! let outcome = walk_with(&vec!["a", "b"], &mut finder, &WalkConfig::default());
//! assert_eq!(outcome, ControlFlow::Break(Interrupt::Stopped));
//! assert_eq!(finder.0.as_deref(), Some("a"));
//! ```

mod visit;
mod walk;

pub use visit::{Interrupt, VisitResult, Visitor, WalkOutcome};
pub use walk::{Walker, collect, walk, walk_with};
