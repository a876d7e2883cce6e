//! Formatting macros for building error chains.
//!
//! - [`macro@crate::errorf`] - [`new`](crate::new) with a `format!` message.
//! - [`macro@crate::wrapf`] - [`wrap`](crate::wrap) with a `format!` message.
//! - [`macro@crate::wrapf_with_skip`] - [`wrap_with_skip`](crate::wrap_with_skip)
//!   with a `format!` message.
//! - [`macro@crate::bail`] - returns early with an [`errorf!`](crate::errorf) error.
//!
//! Every macro expands in place, so the recorded stack trace starts at the
//! function that invoked the macro.
//!
//! # Examples
//!
//! ```
//! use error_wrap::{errorf, wrapf};
//!
//! let attempt = 3;
//! let err = wrapf!(errorf!("some {:?}", "error"), "attempt {}", attempt);
//! assert_eq!(err.to_string(), "attempt 3: some \"error\"");
//! ```

/// Creates a new [`Error`](crate::Error) from a format string.
///
/// # Examples
///
/// ```
/// use error_wrap::errorf;
///
/// let user_id = 42;
/// let err = errorf!("user {} not found", user_id);
/// assert_eq!(err.to_string(), "user 42 not found");
/// ```
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)*) => {
        $crate::new(::std::format!($($arg)*))
    };
}

/// Wraps an error with a formatted message.
///
/// # Arguments
///
/// * `$err` - Any value accepted by [`wrap`](crate::wrap)
/// * the rest - `format!` arguments
///
/// # Examples
///
/// ```
/// use error_wrap::wrapf;
///
/// let err = wrapf!("connection refused", "dialing {}:{}", "db", 5432);
/// assert_eq!(err.to_string(), "dialing db:5432: connection refused");
/// ```
#[macro_export]
macro_rules! wrapf {
    ($err:expr, $($arg:tt)*) => {
        $crate::wrap($err, ::std::format!($($arg)*))
    };
}

/// Wraps an error with a formatted message, skipping `$skip` extra frames.
///
/// # Examples
///
/// ```
/// use error_wrap::{wrapf_with_skip, Error};
///
/// #[inline(never)]
/// fn annotate(err: Error, table: &str) -> Error {
///     wrapf_with_skip!(err, 1, "query on {}", table)
/// }
///
/// let err = annotate(error_wrap::new("deadlock"), "orders");
/// assert_eq!(err.to_string(), "query on orders: deadlock");
/// ```
#[macro_export]
macro_rules! wrapf_with_skip {
    ($err:expr, $skip:expr, $($arg:tt)*) => {
        $crate::wrap_with_skip($err, ::std::format!($($arg)*), $skip)
    };
}

/// Returns early with an error built by [`errorf!`](crate::errorf).
///
/// The error is converted with `From`, so the enclosing function may return
/// [`Error`](crate::Error) or any type it converts into, such as
/// [`BoxError`](crate::BoxError).
///
/// # Examples
///
/// ```
/// use error_wrap::{bail, Result};
///
/// fn check(port: u16) -> Result<u16> {
///     if port == 0 {
///         bail!("invalid port {}", port);
///     }
///     Ok(port)
/// }
///
/// assert_eq!(check(0).unwrap_err().to_string(), "invalid port 0");
/// assert_eq!(check(80).unwrap(), 80);
/// ```
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return ::core::result::Result::Err(::core::convert::From::from($crate::errorf!($($arg)*)))
    };
}
