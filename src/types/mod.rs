//! Error types and utilities.
//!
//! This module provides the error chain aggregate, the stack trace it
//! retains, and the plain error values that get wrapped into it.
//!
//! # Examples
//!
//! ```
//! use error_wrap::types::{Error, Sentinel};
//! use error_wrap::wrap;
//!
//! static ERR_CLOSED: Sentinel = Sentinel::new("connection closed");
//!
//! let err = wrap(ERR_CLOSED, "reading frame").wrap("serving client");
//!
//! println!("{}", err);
//! // Output: serving client: reading frame: connection closed
//! println!("{:#}", err);
//! // Output: the same line, then one `function\n\tfile:line` block per frame
//! ```
use smallvec::SmallVec;

pub mod error_chain;
pub mod error_formatter;
pub mod frame;
pub mod message;
pub mod sentinel;
pub mod stack_trace;

pub use error_chain::*;
pub use error_formatter::{ErrorFormatBuilder, ErrorFormatConfig, ErrorFormatter};
pub use frame::*;
pub use message::*;
pub use sentinel::*;
pub use stack_trace::*;

/// SmallVec-backed collection holding the members of a chain.
///
/// Uses inline storage for up to 2 elements, the `cause + message` shape of a
/// freshly wrapped foreign error.
pub type ErrorVec<E> = SmallVec<[E; 2]>;

/// Boxed, thread-safe error accepted by every wrapping entry point.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias defaulting to [`Error`].
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The error type, [`Error`] unless overridden
pub type Result<T, E = Error> = core::result::Result<T, E>;
