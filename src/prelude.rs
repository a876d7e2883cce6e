//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_wrap::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`errorf!`], [`wrapf!`], [`bail!`]
//! - **Functions**: [`wrap`], [`wrap_option`], [`is`], [`find`], [`extract_stack_trace`]
//! - **Types**: [`Error`], [`Result`], [`Sentinel`]
//! - **Traits**: [`ResultExt`]
//!
//! # Examples
//!
//! ```
//! use error_wrap::prelude::*;
//!
//! fn open(path: &str) -> Result<std::fs::File> {
//!     std::fs::File::open(path).wrap("opening input")
//! }
//!
//! assert!(open("/no/such/input").is_err());
//! ```

// Macros
pub use crate::{bail, errorf, wrapf};

// Functions
pub use crate::context::{extract_stack_trace, find, is, wrap, wrap_option};

// Core types
pub use crate::types::{Error, Result, Sentinel};

// Traits
pub use crate::traits::ResultExt;
