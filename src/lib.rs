//! Error chains that carry wrapped context messages and exactly one stack trace.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `error_wrap::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Wrapping through layers
//!
//! ```
//! use error_wrap::{errorf, wrap, wrapf};
//!
//! fn query() -> error_wrap::Error {
//!     errorf!("row {} locked", 7)
//! }
//!
//! fn repository() -> error_wrap::Error {
//!     wrap(query(), "updating balance")
//! }
//!
//! let err = wrapf!(repository(), "request {}", "a1b2");
//! assert_eq!(err.to_string(), "request a1b2: updating balance: row 7 locked");
//!
//! // The trace points at `query`, where the chain started.
//! let verbose = format!("{:#}", err);
//! assert!(verbose.starts_with("request a1b2: updating balance: row 7 locked"));
//! ```
//!
//! ## Matching through foreign wrappers
//!
//! ```
//! use error_wrap::{find, is, wrap, Sentinel};
//! use std::io;
//!
//! static ERR_NO_ROWS: Sentinel = Sentinel::new("no rows in result set");
//!
//! let err = wrap(ERR_NO_ROWS, "selecting user");
//! let trace = err.stack_trace().clone();
//! let err = io::Error::other(err); // foreign wrapper
//! let err = wrap(err, "handling request");
//!
//! assert!(find::<io::Error>(&err).is_some());
//! assert!(is(&err, &ERR_NO_ROWS));
//! assert_eq!(err.to_string(), "handling request: selecting user: no rows in result set");
//!
//! // The trace recorded before the foreign wrapper is carried over.
//! assert_eq!(err.stack_trace(), &trace);
//! ```
//!
//! ## Wrapping `Result`s
//!
//! ```
//! use error_wrap::prelude::*;
//!
//! fn read_settings() -> Result<String> {
//!     std::fs::read_to_string("/definitely/not/here.toml").wrap("reading settings")
//! }
//!
//! let err = read_settings().unwrap_err();
//! assert!(err.to_string().starts_with("reading settings: "));
//! assert!(err.stack_trace().depth() <= error_wrap::MAX_DEPTH);
//! ```

/// Free functions for creating, wrapping and inspecting chains
pub mod context;
/// Formatting macros (`errorf!`, `wrapf!`, ...)
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Extension traits for wrapping `Result` errors
pub mod traits;
/// Error chain, stack trace and sentinel types
pub mod types;

/// Advanced API level for library authors
pub mod advanced;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use context::*;
pub use traits::ResultExt;
pub use types::{
    BoxError, Error, ErrorFormatConfig, Frame, Message, NilWrap, Result, Sentinel, StackTrace,
    ERR_NIL_WRAP, MAX_DEPTH,
};
