//! Error type for scoped-use operations with explicit close reporting.

/// Error returned by [`try_use_with`](crate::OpenClose::try_use_with).
///
/// Each variant identifies which phase of the open/use/close sequence
/// failed. The plain [`use_with`](crate::OpenClose::use_with) helper never
/// produces this type; it discards close failures and returns the open or
/// body error as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UseError<E> {
    /// Opening failed; the body was never invoked.
    Open(E),
    /// The body failed; close succeeded.
    Body(E),
    /// The body succeeded; close failed.
    Close(E),
    /// Both the body and close failed.
    Both {
        /// The error from the body.
        body: E,
        /// The error from the close step.
        close: E,
    },
}

impl<E> UseError<E> {
    /// Returns the open error, if any.
    pub fn open_error(&self) -> Option<&E> {
        match self {
            UseError::Open(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the body error, if any.
    pub fn body_error(&self) -> Option<&E> {
        match self {
            UseError::Body(e) | UseError::Both { body: e, .. } => Some(e),
            _ => None,
        }
    }

    /// Returns the close error, if any.
    pub fn close_error(&self) -> Option<&E> {
        match self {
            UseError::Close(e) | UseError::Both { close: e, .. } => Some(e),
            _ => None,
        }
    }

    /// Extract the primary error, preferring the body error over a
    /// close error when both failed.
    pub fn into_primary(self) -> E {
        match self {
            UseError::Open(e) | UseError::Body(e) | UseError::Close(e) => e,
            UseError::Both { body, .. } => body,
        }
    }

    /// Maps the error type using the provided function.
    pub fn map<F, E2>(self, f: F) -> UseError<E2>
    where
        F: Fn(E) -> E2,
    {
        match self {
            UseError::Open(e) => UseError::Open(f(e)),
            UseError::Body(e) => UseError::Body(f(e)),
            UseError::Close(e) => UseError::Close(f(e)),
            UseError::Both { body, close } => UseError::Both {
                body: f(body),
                close: f(close),
            },
        }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for UseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UseError::Open(e) => write!(f, "open failed: {}", e),
            UseError::Body(e) => write!(f, "{}", e),
            UseError::Close(e) => write!(f, "close failed: {}", e),
            UseError::Both { body, close } => {
                write!(f, "body failed: {}; close also failed: {}", body, close)
            }
        }
    }
}

impl<E: std::error::Error + 'static> std::error::Error for UseError<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UseError::Open(e) => Some(e),
            UseError::Body(e) => Some(e),
            UseError::Close(e) => Some(e),
            UseError::Both { body, .. } => Some(body),
        }
    }
}
