//! The error chain aggregate.
//!
//! [`Error`] holds every error that took part in one logical failure, from the
//! original cause to the most recent wrap, plus the single deepest stack trace
//! observed while the chain was being built.
//!
//! Chains are extended by value: wrapping consumes the chain, appends the new
//! message and hands the same aggregate back. Members live behind `Arc`, so a
//! clone taken before a wrap is unaffected by it.

use std::sync::Arc;

use crate::types::{BoxError, ErrorVec, Message, StackTrace};

mod matching;
mod traits;

pub(crate) use matching::{find_in, is_in};

/// Frames between [`StackTrace::capture`] and the public constructor's caller:
/// `add_or_create` itself and the public constructor.
const BASE_SKIP: usize = 2;

/// Shared member of a chain.
pub(crate) type Member = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Error chain carrying wrapped messages and one retained stack trace.
///
/// Rendering with `{}` joins the members outermost first with `": "`.
/// `{:#}` and `{:?}` append the stack trace, one `function\n\tfile:line` block
/// per frame.
///
/// # Examples
///
/// ```
/// use error_wrap::{wrap, Error};
///
/// fn read() -> Error {
///     Error::new("connection reset")
/// }
///
/// let err = wrap(wrap(read(), "reading header"), "loading profile");
/// assert_eq!(err.to_string(), "loading profile: reading header: connection reset");
/// assert_eq!(err.len(), 3);
/// ```
#[must_use]
#[derive(Clone)]
pub struct Error {
    pub(crate) errors: ErrorVec<Member>,
    pub(crate) stack: StackTrace,
}

impl Error {
    /// Creates a chain with a single message and the caller's stack trace.
    #[inline(never)]
    pub fn new(message: impl Into<Message>) -> Self {
        Self::add_or_create(None, message.into(), 0)
    }

    /// Wraps this chain with another message.
    ///
    /// The chain keeps its stack trace unless the trace captured here is deeper.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_wrap::Error;
    ///
    /// let err = Error::new("disk full").wrap("saving snapshot");
    /// assert_eq!(err.to_string(), "saving snapshot: disk full");
    /// ```
    #[inline(never)]
    pub fn wrap(self, message: impl Into<Message>) -> Self {
        let existing: BoxError = Box::new(self);
        Self::add_or_create(Some(existing), message.into(), 0)
    }

    /// Creates a chain or extends the one found in `existing`.
    ///
    /// `extra_skip` counts additional helper frames between the public
    /// constructor and the call site that should head the stack trace.
    ///
    /// - `None`: a new chain holding only `new`.
    /// - an [`Error`]: `new` is appended; the retained trace is replaced only
    ///   by a strictly deeper one.
    /// - any other error: a new chain `[existing, new]`. If an [`Error`] is
    ///   reachable through `existing`'s sources and its trace is at least as
    ///   deep as the fresh one, that trace is reused.
    #[inline(never)]
    pub(crate) fn add_or_create(existing: Option<BoxError>, new: Message, extra_skip: usize) -> Self {
        let fresh = StackTrace::capture(BASE_SKIP + extra_skip);
        let new: Member = Arc::new(new);

        let existing = match existing {
            None => {
                #[cfg(feature = "tracing")]
                tracing::trace!(depth = fresh.depth(), "created error chain");

                let mut errors = ErrorVec::new();
                errors.push(new);
                return Self { errors, stack: fresh };
            },
            Some(existing) => existing,
        };

        let existing = match existing.downcast::<Error>() {
            Ok(chain) => return chain.extend(new, fresh),
            Err(other) => other,
        };

        let stack = match find_in::<Error>(&*existing) {
            Some(found) if found.stack.depth() >= fresh.depth() => {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    depth = found.stack.depth(),
                    previous_depth = fresh.depth(),
                    "restored stack trace through foreign error"
                );
                found.stack.clone()
            },
            _ => fresh,
        };

        let mut errors = ErrorVec::new();
        errors.push(Member::from(existing));
        errors.push(new);
        Self { errors, stack }
    }

    fn extend(mut self: Box<Self>, new: Member, fresh: StackTrace) -> Self {
        self.errors.push(new);
        if fresh.depth() > self.stack.depth() {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                depth = fresh.depth(),
                previous_depth = self.stack.depth(),
                members = self.errors.len(),
                "replaced stack trace with deeper capture"
            );
            self.stack = fresh;
        }
        *self
    }

    /// Returns the retained stack trace, innermost frame first.
    #[inline]
    pub fn stack_trace(&self) -> &StackTrace {
        &self.stack
    }

    /// Number of members in the chain. Never zero.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterates the members from the most recent wrap to the original cause.
    pub fn errors(&self) -> impl DoubleEndedIterator<Item = &(dyn std::error::Error + Send + Sync + 'static)> {
        self.errors.iter().rev().map(|member| &**member)
    }

    /// Returns the original cause, the first error that entered the chain.
    #[inline]
    pub fn root_cause(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        &*self.errors[0]
    }

    /// Reports whether any member matches `target`.
    ///
    /// Each member is searched through its own `source()` chain, so a target
    /// buried under foreign wrappers is still found.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_wrap::{wrap_option, ERR_NIL_WRAP};
    /// use std::io;
    ///
    /// let err = wrap_option(None::<io::Error>, "closing socket");
    /// assert!(err.is(&ERR_NIL_WRAP));
    /// ```
    pub fn is<T>(&self, target: &T) -> bool
    where
        T: std::error::Error + PartialEq + 'static,
    {
        self.errors.iter().any(|member| is_in(&**member, target))
    }

    /// Returns the first error of type `T` found in the chain.
    ///
    /// Members are searched in the order they joined the chain, original cause
    /// first, each through its own `source()` chain.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_wrap::{wrap, Sentinel};
    ///
    /// let err = wrap(Sentinel::new("timeout"), "fetching index");
    /// assert_eq!(err.find::<Sentinel>().map(|s| s.message()), Some("timeout"));
    /// ```
    pub fn find<T>(&self) -> Option<&T>
    where
        T: std::error::Error + 'static,
    {
        self.errors.iter().find_map(|member| find_in::<T>(&**member))
    }

    /// Returns a builder for customizing how the chain is rendered.
    #[must_use]
    #[inline]
    pub fn fmt(&self) -> crate::types::error_formatter::ErrorFormatBuilder<'_> {
        crate::types::error_formatter::ErrorFormatBuilder::new(self)
    }

    /// Renders the chain, outermost first, with a custom formatter.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_wrap::{wrap, ErrorFormatConfig};
    ///
    /// let err = wrap("refused", "connecting");
    /// assert_eq!(err.error_chain_with(ErrorFormatConfig::compact()), "connecting | refused");
    /// ```
    #[must_use]
    pub fn error_chain_with<F>(&self, formatter: F) -> String
    where
        F: crate::types::error_formatter::ErrorFormatter,
    {
        use core::fmt::Display;

        let items: Vec<&dyn Display> =
            self.errors.iter().rev().map(|member| member as &dyn Display).collect();
        formatter.format_chain(items.into_iter())
    }
}
