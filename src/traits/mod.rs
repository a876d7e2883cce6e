//! Extension traits for wrapping errors at the call site.
//!
//! - [`ResultExt`]: wraps the error side of any `Result` into an
//!   [`Error`](crate::Error) chain, recording the caller's stack trace.
//!
//! # Examples
//!
//! ```
//! use error_wrap::traits::ResultExt;
//!
//! let result: Result<(), std::num::ParseIntError> = "x".parse::<u8>().map(|_| ());
//! let err = result.wrap("reading retry count").unwrap_err();
//! assert!(err.to_string().starts_with("reading retry count: "));
//! ```

pub mod result_ext;

pub use result_ext::ResultExt;
