//! Advanced API level for library authors and power users.
//!
//! This module exposes the stack-capture building blocks and the formatter
//! internals. Use these when wrapping this crate behind helpers of your own or
//! rendering chains in a custom layout.

// Stack capture
pub use crate::context::wrap_with_skip;
pub use crate::types::stack_trace::{StackTrace, MAX_DEPTH};
pub use crate::types::Frame;
pub use crate::wrapf_with_skip;

// Chain internals
pub use crate::context::unwrap;
pub use crate::types::{BoxError, ErrorVec, Message};

// Formatting
pub use crate::types::error_formatter::{ErrorFormatBuilder, ErrorFormatConfig, ErrorFormatter};
