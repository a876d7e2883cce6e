//! A single call-site record inside a [`StackTrace`](crate::types::StackTrace).

use core::fmt::{self, Display};

/// One resolved call site: function name, source file and line.
///
/// Frames are immutable once captured. A frame renders as
/// `"<function>\n\t<file>:<line>"`, the layout used by the verbose error output.
///
/// # Examples
///
/// ```
/// use error_wrap::Frame;
///
/// let frame = Frame::new("app::load_config", "src/config.rs", 42);
/// assert_eq!(frame.to_string(), "app::load_config\n\tsrc/config.rs:42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    /// Demangled function path, without the symbol hash.
    pub function: String,
    /// Source file as recorded in debug info.
    pub file: String,
    /// Line number, `0` when the symbolizer has no line information.
    pub line: u32,
}

impl Frame {
    /// Placeholder used when the symbolizer cannot name a function.
    pub const UNKNOWN_FUNCTION: &'static str = "<unknown>";

    /// Creates a frame from its parts.
    #[inline]
    pub fn new(function: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self { function: function.into(), file: file.into(), line }
    }

    pub(crate) fn from_symbol(symbol: &backtrace::Symbol) -> Self {
        let function = match symbol.name() {
            // `{:#}` drops the trailing `::h<hash>` of legacy mangled names.
            Some(name) => format!("{:#}", name),
            None => Self::UNKNOWN_FUNCTION.to_string(),
        };
        let file = symbol.filename().map(|path| path.display().to_string()).unwrap_or_default();

        Self { function, file, line: symbol.lineno().unwrap_or(0) }
    }
}

impl Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n\t{}:{}", self.function, self.file, self.line)
    }
}
