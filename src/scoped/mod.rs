//! The open/use/close capability contract and scoped-use helpers.
//!
//! A resource that must be opened before use and closed afterwards
//! implements [`Open`] and [`Close`]. Every such type automatically gets
//! [`OpenClose`], whose [`use_with`](OpenClose::use_with) method runs a
//! body against the resource with the close step guaranteed on every
//! exit path:
//!
//! ```rust
//! use mooring::{Open, Close, OpenClose};
//!
//! struct Session {
//!     connected: bool,
//! }
//!
//! impl Open for Session {
//!     type Error = String;
//!
//!     fn open(&mut self) -> Result<(), String> {
//!         self.connected = true;
//!         Ok(())
//!     }
//! }
//!
//! impl Close for Session {
//!     type Error = String;
//!
//!     fn close(&mut self) -> Result<(), String> {
//!         self.connected = false;
//!         Ok(())
//!     }
//! }
//!
//! let mut session = Session { connected: false };
//! let greeting = session.use_with(|s| {
//!     assert!(s.connected);
//!     Ok("hello".to_string())
//! });
//!
//! assert_eq!(greeting, Ok("hello".to_string()));
//! assert!(!session.connected);
//! ```
//!
//! # Close failures
//!
//! [`use_with`](OpenClose::use_with) discards close failures so that a
//! cleanup-time error can never mask the primary outcome. With the
//! `tracing` feature enabled, discarded failures are logged at `warn`
//! level instead of vanishing. Callers that need to observe cleanup
//! failures use [`try_use_with`](OpenClose::try_use_with), which returns
//! a [`UseError`] identifying the failing phase.

use std::fmt;

mod error;

pub use error::UseError;


/// A resource that must be opened before use.
///
/// `open` prepares the resource and may fail. Implementations own
/// whatever open-state they track; the scoped helpers never inspect it.
pub trait Open {
    /// Error produced when opening fails.
    type Error;

    /// Prepare the resource for use.
    fn open(&mut self) -> Result<(), Self::Error>;
}

/// A resource that must be closed after use.
pub trait Close {
    /// Error produced when closing fails.
    type Error;

    /// Release the resource.
    ///
    /// The scoped helpers treat close as best-effort: a failure here is
    /// discarded rather than propagated (see [`OpenClose::use_with`]).
    fn close(&mut self) -> Result<(), Self::Error>;
}

/// Scoped-use helpers for any resource that is both [`Open`] and [`Close`].
///
/// This trait is blanket-implemented; implement `Open` and `Close` and the
/// helpers come for free.
pub trait OpenClose: Open + Close {
    /// Run `body` against this resource, opening first and closing after.
    ///
    /// The close step runs exactly once per call, on every path:
    ///
    /// 1. `open()` runs. If it fails, `close()` still runs best-effort
    ///    (its outcome discarded), the body is never invoked, and the
    ///    open error is returned.
    /// 2. `body` runs with the opened resource.
    /// 3. `close()` runs whether the body succeeded or failed; a close
    ///    failure is discarded and never overrides the primary outcome.
    ///
    /// Two calls on the same resource open and close it twice; nothing
    /// is cached between invocations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mooring::{OpenClose, testing::MockResource};
    ///
    /// let mut mock = MockResource::new();
    /// let result = mock.use_with(|m| Ok(m.opens));
    ///
    /// assert_eq!(result, Ok(1));
    /// assert_eq!((mock.opens, mock.closes), (1, 1));
    /// ```
    fn use_with<T, F>(&mut self, body: F) -> Result<T, <Self as Open>::Error>
    where
        F: FnOnce(&mut Self) -> Result<T, <Self as Open>::Error>,
        <Self as Close>::Error: fmt::Debug,
    {
        if let Err(open_err) = self.open() {
            if let Err(close_err) = self.close() {
                discard_close_error(close_err);
            }
            return Err(open_err);
        }

        let result = body(self);

        if let Err(close_err) = self.close() {
            discard_close_error(close_err);
        }

        result
    }

    /// Like [`use_with`](OpenClose::use_with), but surfaces close failures.
    ///
    /// Returns a [`UseError`] identifying which phase failed. The
    /// ordering and close-exactly-once guarantees are identical to
    /// `use_with`; only the reporting differs. On an open failure the
    /// best-effort close outcome is still discarded, since there is no
    /// primary outcome to pair it with.
    ///
    /// Requires the open and close error types to coincide.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mooring::{OpenClose, UseError, testing::MockResource};
    ///
    /// let mut mock = MockResource::new().with_failing_close();
    /// let result = mock.try_use_with(|_| Ok(42));
    ///
    /// assert!(matches!(result, Err(UseError::Close(_))));
    /// assert_eq!((mock.opens, mock.closes), (1, 1));
    /// ```
    fn try_use_with<T, F>(&mut self, body: F) -> Result<T, UseError<<Self as Open>::Error>>
    where
        Self: Close<Error = <Self as Open>::Error>,
        F: FnOnce(&mut Self) -> Result<T, <Self as Open>::Error>,
        <Self as Open>::Error: fmt::Debug,
    {
        if let Err(open_err) = self.open() {
            if let Err(close_err) = self.close() {
                discard_close_error(close_err);
            }
            return Err(UseError::Open(open_err));
        }

        let body_result = body(self);
        let close_result = self.close();

        match (body_result, close_result) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(close_err)) => Err(UseError::Close(close_err)),
            (Err(body_err), Ok(())) => Err(UseError::Body(body_err)),
            (Err(body_err), Err(close_err)) => Err(UseError::Both {
                body: body_err,
                close: close_err,
            }),
        }
    }
}

impl<R: Open + Close + ?Sized> OpenClose for R {}

// Forwarding impls so guards and helpers work over borrowed or boxed
// resources, not just owned ones.

impl<R: Open + ?Sized> Open for &mut R {
    type Error = R::Error;

    fn open(&mut self) -> Result<(), Self::Error> {
        (**self).open()
    }
}

impl<R: Close + ?Sized> Close for &mut R {
    type Error = R::Error;

    fn close(&mut self) -> Result<(), Self::Error> {
        (**self).close()
    }
}

impl<R: Open + ?Sized> Open for Box<R> {
    type Error = R::Error;

    fn open(&mut self) -> Result<(), Self::Error> {
        (**self).open()
    }
}

impl<R: Close + ?Sized> Close for Box<R> {
    type Error = R::Error;

    fn close(&mut self) -> Result<(), Self::Error> {
        (**self).close()
    }
}

/// Discard a close failure without letting it propagate.
///
/// With the `tracing` feature enabled the failure is logged at `warn`
/// level; otherwise it is dropped silently.
pub(crate) fn discard_close_error<E: fmt::Debug>(err: E) {
    #[cfg(feature = "tracing")]
    tracing::warn!(error = ?err, "close failed during scoped cleanup, discarding");
    #[cfg(not(feature = "tracing"))]
    let _ = err;
}
