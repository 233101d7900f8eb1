//! # walkabout_kit
//!
//! Standalone utilities that ship with the walker. None of them depend on
//! `walkabout_core`, and the walker never calls into them.
//!
//! - [`dictionary`] - word lookup with typed errors
//! - [`wallet`] - a balance with deposit and withdraw
//! - [`numeral`] - Roman numeral conversion
//! - [`racer`] - return whichever of two URLs answers first
//! - [`context`] - a handler that races a fetch against request cancellation
//! - [`counter`] - a counter that is safe to increment from many threads

pub mod context;
pub mod counter;
pub mod dictionary;
pub mod numeral;
pub mod racer;
pub mod wallet;

pub use context::{CancelHandle, ContextError, ContextServer, ContextStore, RequestContext, Server, Store};
pub use counter::Counter;
pub use dictionary::{Dictionary, DictionaryError};
pub use numeral::{NumeralError, from_roman, to_roman};
pub use racer::{RacerError, configurable_racer, racer};
pub use wallet::{Bitcoin, Wallet, WalletError};
