//! Async variants of the open/use/close contract (feature `async`).
//!
//! Mirrors the sync traits in [`crate::scoped`]: implement [`AsyncOpen`]
//! and [`AsyncClose`] and the blanket [`AsyncOpenClose`] provides
//! [`use_with`](AsyncOpenClose::use_with) with the same ordering and
//! close-exactly-once guarantees.
//!
//! The body closure inspects the opened resource synchronously and
//! returns an owned future; the returned future cannot hold the borrow
//! of the resource across its awaits.
//!
//! ```rust
//! use mooring::scoped_async::{AsyncOpen, AsyncClose, AsyncOpenClose};
//!
//! struct Conn {
//!     connected: bool,
//! }
//!
//! impl AsyncOpen for Conn {
//!     type Error = String;
//!
//!     async fn open(&mut self) -> Result<(), String> {
//!         self.connected = true;
//!         Ok(())
//!     }
//! }
//!
//! impl AsyncClose for Conn {
//!     type Error = String;
//!
//!     async fn close(&mut self) -> Result<(), String> {
//!         self.connected = false;
//!         Ok(())
//!     }
//! }
//!
//! # tokio_test::block_on(async {
//! let mut conn = Conn { connected: false };
//! let result = conn
//!     .use_with(|c| {
//!         assert!(c.connected);
//!         std::future::ready(Ok(42))
//!     })
//!     .await;
//!
//! assert_eq!(result, Ok(42));
//! assert!(!conn.connected);
//! # });
//! ```

use std::fmt;
use std::future::Future;

use crate::scoped::discard_close_error;

/// A resource that must be opened asynchronously before use.
pub trait AsyncOpen {
    /// Error produced when opening fails.
    type Error;

    /// Prepare the resource for use.
    #[allow(async_fn_in_trait)]
    async fn open(&mut self) -> Result<(), Self::Error>;
}

/// A resource that must be closed asynchronously after use.
pub trait AsyncClose {
    /// Error produced when closing fails.
    type Error;

    /// Release the resource.
    #[allow(async_fn_in_trait)]
    async fn close(&mut self) -> Result<(), Self::Error>;
}

/// Scoped-use helper for any resource that is both [`AsyncOpen`] and
/// [`AsyncClose`].
///
/// Blanket-implemented, like the sync [`OpenClose`](crate::OpenClose).
pub trait AsyncOpenClose: AsyncOpen + AsyncClose {
    /// Run `body` against this resource, opening first and closing after.
    ///
    /// Semantics match [`OpenClose::use_with`](crate::OpenClose::use_with):
    /// close runs exactly once on every path, a failed open is propagated
    /// without running the body (close still attempted best-effort), and
    /// close failures are discarded.
    #[allow(async_fn_in_trait)]
    async fn use_with<T, F, Fut>(&mut self, body: F) -> Result<T, <Self as AsyncOpen>::Error>
    where
        F: FnOnce(&mut Self) -> Fut,
        Fut: Future<Output = Result<T, <Self as AsyncOpen>::Error>>,
        <Self as AsyncClose>::Error: fmt::Debug,
    {
        if let Err(open_err) = self.open().await {
            if let Err(close_err) = self.close().await {
                discard_close_error(close_err);
            }
            return Err(open_err);
        }

        let fut = body(self);
        let result = fut.await;

        if let Err(close_err) = self.close().await {
            discard_close_error(close_err);
        }

        result
    }
}

impl<R: AsyncOpen + AsyncClose + ?Sized> AsyncOpenClose for R {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::ready;

    #[derive(Debug, Default)]
    struct AsyncMock {
        opens: usize,
        closes: usize,
        is_open: bool,
        fail_open: bool,
        fail_close: bool,
    }

    impl AsyncOpen for AsyncMock {
        type Error = String;

        async fn open(&mut self) -> Result<(), String> {
            self.opens += 1;
            if self.fail_open {
                return Err("open failed".to_string());
            }
            self.is_open = true;
            Ok(())
        }
    }

    impl AsyncClose for AsyncMock {
        type Error = String;

        async fn close(&mut self) -> Result<(), String> {
            self.closes += 1;
            self.is_open = false;
            if self.fail_close {
                return Err("close failed".to_string());
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn async_use_with_opens_then_closes() {
        let mut mock = AsyncMock::default();
        let result = mock
            .use_with(|m| {
                assert!(m.is_open);
                ready(Ok(42))
            })
            .await;

        assert_eq!(result, Ok(42));
        assert_eq!((mock.opens, mock.closes), (1, 1));
        assert!(!mock.is_open);
    }

    #[tokio::test]
    async fn async_use_with_closes_on_body_failure() {
        let mut mock = AsyncMock::default();
        let result: Result<(), String> = mock
            .use_with(|_| ready(Err("body failed".to_string())))
            .await;

        assert_eq!(result, Err("body failed".to_string()));
        assert_eq!(mock.closes, 1);
    }

    #[tokio::test]
    async fn async_use_with_skips_body_on_open_failure() {
        let mut mock = AsyncMock {
            fail_open: true,
            ..AsyncMock::default()
        };
        let mut body_ran = false;

        let result: Result<(), String> = mock
            .use_with(|_| {
                body_ran = true;
                ready(Ok(()))
            })
            .await;

        assert_eq!(result, Err("open failed".to_string()));
        assert!(!body_ran);
        assert_eq!(mock.closes, 1);
    }

    #[tokio::test]
    async fn async_use_with_discards_close_failure_after_failed_open() {
        let mut mock = AsyncMock {
            fail_open: true,
            fail_close: true,
            ..AsyncMock::default()
        };

        let result: Result<(), String> = mock.use_with(|_| ready(Ok(()))).await;

        assert_eq!(
            result,
            Err("open failed".to_string()),
            "best-effort close failure must not mask the open error"
        );
        assert_eq!((mock.opens, mock.closes), (1, 1));
        assert!(!mock.is_open);
    }

    #[tokio::test]
    async fn async_use_with_discards_close_failure() {
        let mut mock = AsyncMock {
            fail_close: true,
            ..AsyncMock::default()
        };
        let result = mock.use_with(|_| ready(Ok("kept"))).await;

        assert_eq!(result, Ok("kept"));
        assert_eq!(mock.closes, 1);
    }
}
