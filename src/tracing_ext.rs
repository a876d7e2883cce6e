//! Tracing integration for error-wrap.
//!
//! Wraps errors with the name of the active `tracing` span, so the chain
//! message records where in the instrumented call tree the failure surfaced.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-wrap = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::Span;

use crate::types::{BoxError, Error, Message};

/// Extension trait for `Result` types to wrap errors with span context.
///
/// # Example
///
/// ```rust,ignore
/// use error_wrap::tracing_ext::ResultSpanExt;
///
/// fn process() -> error_wrap::Result<Data> {
///     let _guard = tracing::info_span!("process").entered();
///     do_work().with_current_span()
/// }
/// ```
pub trait ResultSpanExt<T> {
    /// Wraps an error with the current span's name.
    fn with_current_span(self) -> Result<T, Error>;

    /// Wraps an error with a specific span's name.
    fn with_span(self, span: &Span) -> Result<T, Error>;
}

impl<T, E> ResultSpanExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[inline(never)]
    fn with_current_span(self) -> Result<T, Error> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(Error::add_or_create(Some(e.into()), span_message(&Span::current()), 0)),
        }
    }

    #[inline(never)]
    fn with_span(self, span: &Span) -> Result<T, Error> {
        match self {
            Ok(v) => Ok(v),
            Err(e) => Err(Error::add_or_create(Some(e.into()), span_message(span), 0)),
        }
    }
}

/// Wraps an error with the current span's name.
///
/// # Example
///
/// ```rust,ignore
/// use error_wrap::tracing_ext::instrument_error;
///
/// let err = instrument_error(ApiError::NotFound);
/// // err renders as "in span 'handler': not found"
/// ```
#[inline(never)]
pub fn instrument_error<E: Into<BoxError>>(error: E) -> Error {
    Error::add_or_create(Some(error.into()), span_message(&Span::current()), 0)
}

/// Formats a span as a chain message. Disabled spans have no metadata.
fn span_message(span: &Span) -> Message {
    let name = span.metadata().map(|m| m.name()).unwrap_or("unknown");
    Message::new(format!("in span '{}'", name))
}
