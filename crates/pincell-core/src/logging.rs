//! Logging conventions for Pincell.
//!
//! Pincell uses the `tracing` crate for instrumentation. The library never
//! installs a subscriber itself; to see logs, install one in your
//! application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Every event carries an explicit target so logs can be filtered per
//! subsystem, e.g. `RUST_LOG=pincell::view=debug`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "pincell_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "pincell_core::signal";
    /// Passcode control target.
    pub const VIEW: &str = "pincell::view";
    /// Focus/edit state machine target.
    pub const MACHINE: &str = "pincell::machine";
}
