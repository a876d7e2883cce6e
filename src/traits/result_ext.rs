//! Extension trait for wrapping the error side of a `Result`.
//!
//! This module provides [`ResultExt`], which wraps errors without verbose
//! `.map_err()` chains while still recording the caller's stack trace.
//!
//! # Examples
//!
//! ```
//! use error_wrap::traits::ResultExt;
//!
//! fn load_config() -> error_wrap::Result<String> {
//!     std::fs::read_to_string("config.toml").wrap("loading configuration file")
//! }
//!
//! assert!(load_config().is_err());
//! ```

use crate::types::{BoxError, Error, Message};

/// Extension trait for wrapping `Result` errors into an [`Error`] chain.
///
/// Both methods capture the stack at the call site of `wrap`/`wrap_with`, not
/// inside this crate.
///
/// # Examples
///
/// ## Chaining through layers
///
/// ```
/// use error_wrap::traits::ResultExt;
/// use error_wrap::Result;
///
/// fn parse(raw: &str) -> Result<u32> {
///     raw.parse::<u32>().wrap("parsing port")
/// }
///
/// fn configure(raw: &str) -> Result<u32> {
///     parse(raw).wrap("configuring listener")
/// }
///
/// let err = configure("eighty").unwrap_err();
/// assert_eq!(err.to_string(), "configuring listener: parsing port: invalid digit found in string");
/// ```
///
/// ## Lazy message
///
/// ```
/// use error_wrap::traits::ResultExt;
///
/// let user_id = 42;
/// let result: Result<(), &str> = Err("not found");
/// let err = result.wrap_with(|| format!("loading user {}", user_id)).unwrap_err();
/// assert_eq!(err.to_string(), "loading user 42: not found");
/// ```
pub trait ResultExt<T> {
    /// Wraps the error with a message.
    fn wrap<M: Into<Message>>(self, message: M) -> Result<T, Error>;

    /// Wraps the error with a message produced only on the error path.
    fn wrap_with<M, F>(self, f: F) -> Result<T, Error>
    where
        M: Into<Message>,
        F: FnOnce() -> M;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[inline(never)]
    fn wrap<M: Into<Message>>(self, message: M) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Error::add_or_create(Some(err.into()), message.into(), 0)),
        }
    }

    #[inline(never)]
    fn wrap_with<M, F>(self, f: F) -> Result<T, Error>
    where
        M: Into<Message>,
        F: FnOnce() -> M,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Error::add_or_create(Some(err.into()), f().into(), 0)),
        }
    }
}
