//! Core systems for Pincell.
//!
//! This crate provides the foundational pieces shared by the Pincell
//! passcode control:
//!
//! - **Signal/Slot System**: Type-safe notification of state changes
//! - **Logging**: `tracing` targets and conventions for the library
//!
//! # Signal/Slot Example
//!
//! ```
//! use pincell_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
