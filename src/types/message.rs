use core::fmt::{self, Display};
use std::borrow::Cow;

/// Plain text error produced by [`new`](crate::new) and by every wrap.
///
/// Static strings are stored without allocating.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message(Cow<'static, str>);

impl Message {
    #[inline]
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self(text.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for Message {}

impl From<&'static str> for Message {
    fn from(text: &'static str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
