//! Drop-based scoped acquisition.
//!
//! [`OpenGuard`] opens a resource on construction and closes it when the
//! guard is dropped, extending the close-on-every-exit-path guarantee to
//! early returns and panics. Close failures during drop are discarded,
//! matching [`use_with`](crate::OpenClose::use_with); use
//! [`OpenGuard::close`] to observe them explicitly.
//!
//! ```rust
//! use mooring::{OpenGuard, testing::MockResource};
//!
//! let mut mock = MockResource::new();
//! {
//!     let guard = OpenGuard::open(&mut mock).unwrap();
//!     assert!(guard.is_open);
//! } // dropped here, closing the resource
//!
//! assert_eq!((mock.opens, mock.closes), (1, 1));
//! ```

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::scoped::discard_close_error;
use crate::{Close, Open};

/// Guard that holds an opened resource and closes it on drop.
///
/// Construct with [`OpenGuard::open`]. The guard derefs to the resource,
/// so the scope body uses it directly.
#[must_use = "an OpenGuard closes its resource when dropped; dropping it immediately closes right away"]
pub struct OpenGuard<R>
where
    R: Close,
    <R as Close>::Error: fmt::Debug,
{
    resource: Option<R>,
}

impl<R> OpenGuard<R>
where
    R: Close,
    <R as Close>::Error: fmt::Debug,
{
    /// Open `resource` and wrap it in a guard.
    ///
    /// If opening fails, `close()` is still attempted best-effort (its
    /// outcome discarded) and the open error is returned, mirroring
    /// [`use_with`](crate::OpenClose::use_with).
    pub fn open(mut resource: R) -> Result<Self, <R as Open>::Error>
    where
        R: Open,
    {
        if let Err(open_err) = resource.open() {
            if let Err(close_err) = resource.close() {
                discard_close_error(close_err);
            }
            return Err(open_err);
        }
        Ok(OpenGuard {
            resource: Some(resource),
        })
    }

    /// Disarm the guard and return the resource without closing it.
    ///
    /// The caller takes over responsibility for closing.
    pub fn into_inner(mut self) -> R {
        self.resource
            .take()
            .expect("resource present until guard is consumed")
    }

    /// Close the resource now, surfacing any close error.
    ///
    /// This is the opt-in counterpart to the drop path, which discards
    /// close failures.
    pub fn close(mut self) -> Result<(), <R as Close>::Error> {
        let mut resource = self
            .resource
            .take()
            .expect("resource present until guard is consumed");
        resource.close()
    }
}

impl<R> Deref for OpenGuard<R>
where
    R: Close,
    <R as Close>::Error: fmt::Debug,
{
    type Target = R;

    fn deref(&self) -> &R {
        self.resource
            .as_ref()
            .expect("resource present until guard is consumed")
    }
}

impl<R> DerefMut for OpenGuard<R>
where
    R: Close,
    <R as Close>::Error: fmt::Debug,
{
    fn deref_mut(&mut self) -> &mut R {
        self.resource
            .as_mut()
            .expect("resource present until guard is consumed")
    }
}

impl<R> Drop for OpenGuard<R>
where
    R: Close,
    <R as Close>::Error: fmt::Debug,
{
    fn drop(&mut self) {
        if let Some(mut resource) = self.resource.take() {
            if let Err(close_err) = resource.close() {
                discard_close_error(close_err);
            }
        }
    }
}

impl<R> fmt::Debug for OpenGuard<R>
where
    R: Close,
    <R as Close>::Error: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenGuard")
            .field("resource", &"<resource>")
            .finish()
    }
}
