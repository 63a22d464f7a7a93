#![deny(clippy::expect_used, clippy::unwrap_used)]

//! The root of the pseudo connection library.
//! 伪连接库的根。
//!
//! A small state machine that fakes a connection handshake: `connect()`
//! enters `Connecting` and a cancellable timer completes it to `Connected`.
//! A single observer hears about every state assignment.

pub mod config;
pub mod connection;
pub mod error;
pub mod indicator;
pub mod observer;
pub mod state;

mod timer;

pub use config::{Config, NotifyPolicy};
pub use connection::PseudoConnection;
pub use error::{Error, Result};
pub use indicator::{IndicatorCommand, IndicatorState};
pub use observer::StateObserver;
pub use state::{ConnectionEvent, ConnectionState};
