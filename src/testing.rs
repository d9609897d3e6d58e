//! Test doubles for the open/use/close contract.
//!
//! [`MockResource`] counts `open` and `close` invocations and tracks an
//! `is_open` flag, with opt-in failure injection for either step. It is
//! the canonical way to assert that a piece of code honours the scoped
//! discipline:
//!
//! ```rust
//! use mooring::{OpenClose, testing::MockResource};
//!
//! let mut mock = MockResource::new();
//! assert_eq!((mock.opens, mock.closes), (0, 0));
//!
//! mock.use_with(|m| {
//!     assert!(m.is_open);
//!     Ok(())
//! }).unwrap();
//!
//! assert_eq!((mock.opens, mock.closes), (1, 1));
//! assert!(!mock.is_open);
//! ```

use crate::{Close, Open};

/// A resource that records every open and close.
///
/// Counters track invocations, not successes: a failing `open` still
/// increments `opens`. Errors are plain `String`s so tests can match on
/// them directly.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MockResource {
    /// Number of times `open` has been invoked.
    pub opens: usize,
    /// Number of times `close` has been invoked.
    pub closes: usize,
    /// Whether the resource is currently open.
    pub is_open: bool,
    fail_open: bool,
    fail_close: bool,
}

impl MockResource {
    /// Create a mock that opens and closes cleanly.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `open` call fail with `"open failed"`.
    pub fn with_failing_open(mut self) -> Self {
        self.fail_open = true;
        self
    }

    /// Make every `close` call fail with `"close failed"`.
    pub fn with_failing_close(mut self) -> Self {
        self.fail_close = true;
        self
    }
}

impl Open for MockResource {
    type Error = String;

    fn open(&mut self) -> Result<(), String> {
        self.opens += 1;
        if self.fail_open {
            return Err("open failed".to_string());
        }
        self.is_open = true;
        Ok(())
    }
}

impl Close for MockResource {
    type Error = String;

    fn close(&mut self) -> Result<(), String> {
        self.closes += 1;
        self.is_open = false;
        if self.fail_close {
            return Err("close failed".to_string());
        }
        Ok(())
    }
}

/// Assert that a [`MockResource`] ended balanced: every open matched by
/// a close, and the resource left closed.
///
/// # Example
///
/// ```rust
/// use mooring::{assert_balanced, OpenClose, testing::MockResource};
///
/// let mut mock = MockResource::new();
/// mock.use_with(|_| Ok(())).unwrap();
/// assert_balanced!(mock);
/// ```
#[macro_export]
macro_rules! assert_balanced {
    ($mock:expr) => {
        match &$mock {
            mock => {
                assert_eq!(
                    mock.opens, mock.closes,
                    "expected opens ({}) to match closes ({})",
                    mock.opens, mock.closes
                );
                assert!(!mock.is_open, "expected resource to end closed");
            }
        }
    };
}
