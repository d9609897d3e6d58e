//! # Mooring
//!
//! > *"Tie up before you board; cast off when you leave."*
//!
//! A small Rust library for scoped open/use/close resource discipline.
//!
//! ## Philosophy
//!
//! Some resources must be opened before use and closed afterwards, and the
//! close step must happen on **every** exit path: normal return, early
//! failure, even a panic. **Mooring** captures that discipline once, so
//! call sites cannot forget the cast-off:
//!
//! - implement [`Open`] and [`Close`] for your resource,
//! - run work against it with [`OpenClose::use_with`], or hold it open
//!   with an [`OpenGuard`] whose destructor closes.
//!
//! Close failures are discarded rather than propagated, so cleanup can
//! never mask the primary outcome. Enable the `tracing` feature to log
//! discarded close failures, or use [`OpenClose::try_use_with`] to
//! observe them as a [`UseError`].
//!
//! ## Quick Example
//!
//! ```rust
//! use mooring::{Open, Close, OpenClose};
//!
//! struct Device {
//!     powered: bool,
//! }
//!
//! impl Open for Device {
//!     type Error = String;
//!
//!     fn open(&mut self) -> Result<(), String> {
//!         self.powered = true;
//!         Ok(())
//!     }
//! }
//!
//! impl Close for Device {
//!     type Error = String;
//!
//!     fn close(&mut self) -> Result<(), String> {
//!         self.powered = false;
//!         Ok(())
//!     }
//! }
//!
//! let mut device = Device { powered: false };
//!
//! let reading = device.use_with(|d| {
//!     assert!(d.powered);
//!     Ok(21 * 2)
//! });
//!
//! assert_eq!(reading, Ok(42));
//! assert!(!device.powered);
//! ```
//!
//! ## Features
//!
//! - `async` - async mirror of the contract in the `scoped_async` module
//! - `tracing` - log discarded close failures at `warn` level

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod guard;
pub mod scoped;
#[cfg(feature = "async")]
pub mod scoped_async;
pub mod testing;

// Re-exports
pub use guard::OpenGuard;
pub use scoped::{Close, Open, OpenClose, UseError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::guard::OpenGuard;
    pub use crate::scoped::{Close, Open, OpenClose, UseError};
    #[cfg(feature = "async")]
    pub use crate::scoped_async::{AsyncClose, AsyncOpen, AsyncOpenClose};
}
