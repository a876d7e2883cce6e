//! Fixed marker errors that are compared by value.

use core::fmt::{self, Display};

/// A named, immutable error value meant to be declared once and matched with
/// [`is`](crate::is).
///
/// Two sentinels are equal when their messages are equal, so every sentinel
/// needs its own text. The `<nil>` marker used by
/// [`wrap_option`](crate::wrap_option) is a separate type, [`NilWrap`], and
/// never equals a `Sentinel`.
///
/// # Examples
///
/// ```
/// use error_wrap::{is, wrap, Sentinel};
///
/// static ERR_NOT_FOUND: Sentinel = Sentinel::new("not found");
///
/// let err = wrap(ERR_NOT_FOUND, "loading user 42");
/// assert_eq!(err.to_string(), "loading user 42: not found");
/// assert!(is(&err, &ERR_NOT_FOUND));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sentinel {
    message: &'static str,
}

impl Sentinel {
    /// Declares a sentinel with a fixed message.
    #[inline]
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }

    /// Returns the sentinel's message.
    #[inline]
    pub const fn message(&self) -> &'static str {
        self.message
    }
}

impl Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

impl std::error::Error for Sentinel {}

/// Marker error for a wrap of a missing error.
///
/// The only value is [`ERR_NIL_WRAP`]; it cannot be constructed outside this
/// crate, so a user-declared `Sentinel::new("<nil>")` does not match it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NilWrap {
    _private: (),
}

impl NilWrap {
    /// Returns the marker text, `<nil>`.
    #[inline]
    pub const fn message(&self) -> &'static str {
        "<nil>"
    }
}

impl Display for NilWrap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for NilWrap {}

/// Stands in for the missing error when [`wrap_option`](crate::wrap_option)
/// receives `None`.
///
/// Chains built this way render with a trailing `<nil>` and match this
/// marker through [`is`](crate::is).
pub static ERR_NIL_WRAP: NilWrap = NilWrap { _private: () };
