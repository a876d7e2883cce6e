//! Error chain formatting utilities.

use crate::types::Error;
use core::fmt::Display;

/// Trait for customizing error chain formatting.
///
/// Items arrive outermost first unless the caller reversed them.
pub trait ErrorFormatter {
    fn format_item(&self, item: &dyn Display) -> String {
        item.to_string()
    }

    fn separator(&self) -> &str {
        ": "
    }

    fn format_chain<'a>(&self, chain: impl Iterator<Item = &'a dyn Display>) -> String {
        chain
            .map(|item| self.format_item(item))
            .collect::<Vec<_>>()
            .join(self.separator())
    }
}

/// Configuration-based error formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFormatConfig {
    pub separator: String,
    pub item_prefix: Option<String>,
    pub item_suffix: Option<String>,
    pub indent: String,
    pub cascade: bool,
    pub show_trace: bool,
}

impl Default for ErrorFormatConfig {
    fn default() -> Self {
        Self {
            separator: ": ".into(),
            item_prefix: None,
            item_suffix: None,
            indent: "  ".into(),
            cascade: false,
            show_trace: false,
        }
    }
}

impl ErrorFormatConfig {
    /// One member per line, each level indented one step further.
    #[inline]
    pub fn cascaded() -> Self {
        Self { separator: "\n".into(), cascade: true, ..Default::default() }
    }

    #[inline]
    pub fn compact() -> Self {
        Self { separator: " | ".into(), ..Default::default() }
    }

    /// Default rendering followed by the stack trace.
    #[inline]
    pub fn verbose() -> Self {
        Self { show_trace: true, ..Default::default() }
    }
}

impl ErrorFormatter for ErrorFormatConfig {
    fn format_item(&self, item: &dyn Display) -> String {
        let mut result = String::new();
        if let Some(prefix) = &self.item_prefix {
            result.push_str(prefix);
        }
        result.push_str(&item.to_string());
        if let Some(suffix) = &self.item_suffix {
            result.push_str(suffix);
        }
        result
    }

    fn separator(&self) -> &str {
        &self.separator
    }

    fn format_chain<'a>(&self, chain: impl Iterator<Item = &'a dyn Display>) -> String {
        let mut result = String::new();
        for (i, item) in chain.enumerate() {
            if i > 0 {
                result.push_str(&self.separator);
                if self.cascade {
                    for _ in 0..i {
                        result.push_str(&self.indent);
                    }
                }
            }
            result.push_str(&self.format_item(item));
        }
        result
    }
}

/// Builder for customizing error display output.
///
/// # Examples
///
/// ```
/// use error_wrap::wrap;
///
/// let err = wrap(wrap("refused", "connecting"), "syncing");
///
/// assert_eq!(err.fmt().with_separator(" <- ").to_string(), "syncing <- connecting <- refused");
/// assert_eq!(err.fmt().reverse_chain(true).to_string(), "refused: connecting: syncing");
/// assert_eq!(err.fmt().cascaded().to_string(), "syncing\n  connecting\n    refused");
/// ```
pub struct ErrorFormatBuilder<'a> {
    pub(crate) error: &'a Error,
    pub(crate) config: ErrorFormatConfig,
    pub(crate) reverse_chain: bool,
}

impl<'a> ErrorFormatBuilder<'a> {
    pub fn new(error: &'a Error) -> Self {
        Self { error, config: ErrorFormatConfig::default(), reverse_chain: false }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    /// Renders the original cause first.
    pub fn reverse_chain(mut self, reverse: bool) -> Self {
        self.reverse_chain = reverse;
        self
    }

    /// Appends `'\n'` and the stack trace when the trace has frames.
    pub fn show_trace(mut self, show: bool) -> Self {
        self.config.show_trace = show;
        self
    }

    pub fn compact(mut self) -> Self {
        self.config = ErrorFormatConfig { show_trace: self.config.show_trace, ..ErrorFormatConfig::compact() };
        self
    }

    pub fn cascaded(mut self) -> Self {
        self.config = ErrorFormatConfig { show_trace: self.config.show_trace, ..ErrorFormatConfig::cascaded() };
        self
    }

    pub fn with_config(mut self, config: ErrorFormatConfig) -> Self {
        self.config = config;
        self
    }
}

impl<'a> Display for ErrorFormatBuilder<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut items: Vec<&dyn Display> = Vec::with_capacity(self.error.len());
        for member in self.error.errors.iter() {
            items.push(member as &dyn Display);
        }
        if !self.reverse_chain {
            items.reverse();
        }

        f.write_str(&self.config.format_chain(items.into_iter()))?;

        let trace = self.error.stack_trace();
        if self.config.show_trace && trace.depth() > 0 {
            write!(f, "\n{}", trace)?;
        }

        Ok(())
    }
}
