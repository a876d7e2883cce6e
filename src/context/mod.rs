//! Free functions for building and inspecting error chains.
//!
//! Key features:
//! - [`new`] / [`wrap`] / [`wrap_option`] create or extend an [`Error`] and
//!   record the caller's stack trace.
//! - [`wrap_with_skip`] lets helper layers keep the trace pointed at the real
//!   call site.
//! - [`is`], [`find`], [`unwrap`] and [`extract_stack_trace`] inspect any
//!   `dyn Error`, looking inside every member of the chains they meet.
//!
//! The formatted counterparts live in the macros module: [`errorf!`](crate::errorf),
//! [`wrapf!`](crate::wrapf) and [`wrapf_with_skip!`](crate::wrapf_with_skip).

use std::error::Error as StdError;

use crate::types::error_chain::{find_in, is_in};
use crate::types::{BoxError, Error, Message, StackTrace, ERR_NIL_WRAP};

/// Creates a chain holding a single message.
///
/// The stack trace starts at the caller of `new`.
///
/// # Examples
///
/// ```
/// let err = error_wrap::new("config file missing");
/// assert_eq!(err.to_string(), "config file missing");
/// ```
#[inline(never)]
pub fn new(message: impl Into<Message>) -> Error {
    Error::add_or_create(None, message.into(), 0)
}

/// Wraps `err` with a message.
///
/// If `err` is already an [`Error`], the message is appended to it and its
/// stack trace is kept unless the one captured here is deeper. Any other
/// error starts a new chain; when an [`Error`] is reachable through its
/// `source()` chain, that chain's deeper trace is carried over.
///
/// # Examples
///
/// ```
/// use error_wrap::wrap;
/// use std::io;
///
/// let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
/// let err = wrap(io_err, "opening settings");
/// assert_eq!(err.to_string(), "opening settings: no such file");
/// ```
#[inline(never)]
pub fn wrap<E, M>(err: E, message: M) -> Error
where
    E: Into<BoxError>,
    M: Into<Message>,
{
    Error::add_or_create(Some(err.into()), message.into(), 0)
}

/// Wraps an error that may be absent.
///
/// `None` is replaced by [`ERR_NIL_WRAP`], so the result is always a usable
/// chain whose message ends in `<nil>`.
///
/// # Examples
///
/// ```
/// use error_wrap::{is, wrap_option, ERR_NIL_WRAP};
/// use std::io;
///
/// let err = wrap_option(None::<io::Error>, "flushing buffer");
/// assert_eq!(err.to_string(), "flushing buffer: <nil>");
/// assert!(is(&err, &ERR_NIL_WRAP));
/// ```
#[inline(never)]
pub fn wrap_option<E, M>(err: Option<E>, message: M) -> Error
where
    E: Into<BoxError>,
    M: Into<Message>,
{
    let existing = match err {
        Some(err) => err.into(),
        None => BoxError::from(ERR_NIL_WRAP),
    };
    Error::add_or_create(Some(existing), message.into(), 0)
}

/// Like [`wrap`], skipping `skip` extra frames from the top of the trace.
///
/// Helpers that wrap on behalf of their caller pass `1` so the trace starts at
/// the helper's caller.
///
/// # Examples
///
/// ```
/// use error_wrap::{wrap_with_skip, Error};
///
/// #[inline(never)]
/// fn annotate(err: std::io::Error) -> Error {
///     wrap_with_skip(err, "storage layer", 1)
/// }
///
/// let err = annotate(std::io::Error::other("quota exceeded"));
/// assert_eq!(err.to_string(), "storage layer: quota exceeded");
/// ```
#[inline(never)]
pub fn wrap_with_skip<E, M>(err: E, message: M, skip: usize) -> Error
where
    E: Into<BoxError>,
    M: Into<Message>,
{
    Error::add_or_create(Some(err.into()), message.into(), skip)
}

/// Reports whether `target` appears anywhere in `err`.
///
/// The walk follows `source()` and, for every [`Error`] it meets, searches
/// each member of that chain.
///
/// # Examples
///
/// ```
/// use error_wrap::{is, wrap, Sentinel};
///
/// static ERR_EMPTY: Sentinel = Sentinel::new("queue empty");
/// static ERR_FULL: Sentinel = Sentinel::new("queue full");
///
/// let err = wrap(wrap(ERR_EMPTY, "pop"), "draining");
/// assert!(is(&err, &ERR_EMPTY));
/// assert!(!is(&err, &ERR_FULL));
/// ```
pub fn is<T>(err: &(dyn StdError + 'static), target: &T) -> bool
where
    T: StdError + PartialEq + 'static,
{
    is_in(err, target)
}

/// Returns the first error of type `T` found in `err`.
///
/// Uses the same walk as [`is`]; inside a chain, members are visited from the
/// original cause outward.
///
/// # Examples
///
/// ```
/// use error_wrap::{find, wrap};
/// use std::io;
///
/// let err = wrap(io::Error::new(io::ErrorKind::TimedOut, "slow peer"), "handshake");
/// let io_err = find::<io::Error>(&err).expect("io error in chain");
/// assert_eq!(io_err.kind(), io::ErrorKind::TimedOut);
/// ```
pub fn find<'a, T>(err: &'a (dyn StdError + 'static)) -> Option<&'a T>
where
    T: StdError + 'static,
{
    find_in::<T>(err)
}

/// Returns the error directly wrapped by `err`, if any.
///
/// For an [`Error`] with more than one member this is the original cause.
#[inline]
pub fn unwrap<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a (dyn StdError + 'static)> {
    err.source()
}

/// Returns the stack trace of the first [`Error`] found in `err`.
///
/// # Examples
///
/// ```
/// use error_wrap::{extract_stack_trace, new};
/// use std::io;
///
/// let plain = io::Error::other("plain");
/// assert!(extract_stack_trace(&plain).is_none());
///
/// let err = new("with trace");
/// assert!(extract_stack_trace(&err).is_some());
/// ```
pub fn extract_stack_trace(err: &(dyn StdError + 'static)) -> Option<StackTrace> {
    find_in::<Error>(err).map(|chain| chain.stack_trace().clone())
}
