//! # walkabout_core
//!
//! A generic value walker that discovers every string reachable from a value.
//!
//! Values are described by the closed [`Value`] enum. Native Rust types (and
//! your own types) take part through the [`Walkable`] trait, which converts
//! them into a `Value`. The walker dispatches on the value's [`Kind`]:
//!
//! - `String` is delivered to the visitor
//! - `Record` fields are walked in declaration order
//! - `Reference` is followed when present
//! - `Sequence` elements are walked in index order
//! - `Mapping` values are walked (keys are not)
//! - `Stream` items are received until the stream closes
//! - `Producer` is called once and its results are walked in order
//! - `Other` is ignored
//!
//! ## Example
//!
//! ```rust
//! use walkabout_core::{Value, Walkable, walk};
//!
//! struct Profile {
//!     age: u32,
//!     city: String,
//! }
//!
//! impl Walkable for Profile {
//!     fn to_value(&self) -> Value {
//!         Value::record([("Age", self.age.to_value()), ("City", self.city.to_value())])
//!     }
//! }
//!
//! let profiles = vec![
//!     Profile { age: 33, city: "London".to_string() },
//!     Profile { age: 34, city: "Reykjavik".to_string() },
//! ];
//!
//! let mut got = Vec::new();
//! walk(&profiles, |s| got.push(s.to_string()));
//! assert_eq!(got, vec!["London", "Reykjavik"]);
//! ```
//!
//! Walking an open stream blocks until it closes. Use [`walk_with`] and a
//! [`WalkConfig`] carrying a [`CancelToken`] or a stream timeout to bound it.

pub mod cancel;
mod config;
mod error;
pub mod producer;
pub mod stream;
mod value;
pub mod visitor;
mod walkable;

pub use cancel::CancelToken;
pub use config::WalkConfig;
pub use error::ConfigError;
pub use producer::Producer;
pub use stream::{Stream, StreamSender};
pub use value::{Kind, Value};
pub use visitor::{Interrupt, VisitResult, Visitor, WalkOutcome, Walker, collect, walk, walk_with};
pub use walkable::{IntoValues, Walkable};
