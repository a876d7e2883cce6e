//! Call-stack capture.
//!
//! [`StackTrace::capture`] walks the current thread's stack with the
//! [`backtrace`] crate, drops the unwinder's own frames plus a caller-chosen
//! number of frames above the capture routine, and stops as soon as it reaches
//! frames owned by the language runtime, the test harness or an async
//! scheduler. What remains is the application's view of the call path.

use core::fmt::{self, Display};
use core::ops::Deref;
use std::sync::Arc;

use crate::types::Frame;

/// Maximum number of frames retained by a single capture.
///
/// Deeper stacks are truncated silently.
pub const MAX_DEPTH: usize = 32;

/// Raw frames inspected before giving up on locating the capture routine.
const RAW_FRAME_LIMIT: usize = 256;

/// Symbol suffix identifying [`StackTrace::capture`] itself.
const CAPTURE_SYMBOL: &str = "StackTrace::capture";
const CAPTURE_SYMBOL_V0: &str = "StackTrace>::capture";

/// Function-name prefixes of runtime, harness and scheduler frames.
///
/// The walk stops at the first frame matching one of these.
const RUNTIME_PREFIXES: &[&str] = &[
    "std::rt::",
    "std::panicking::",
    "std::panic::",
    "std::thread::",
    "std::sys::",
    "std::sys_common::",
    "test::",
    "tokio::runtime::",
    "tokio::loom::",
    "tokio::task::",
    "__libc_start",
];

/// Closure-call shims the compiler inserts between frames; omitted from traces.
const SHIM_PATH: &str = "core::ops::function::";

/// Trait-impl form of a shim, e.g. `<fn() as core::ops::function::FnOnce<()>>::call_once`.
const SHIM_IMPL: &str = " as core::ops::function::";

/// Ordered call sites, innermost first.
///
/// Index 0 is the frame that requested the capture; increasing indices move
/// toward the process entry point. Storage is shared, so cloning a trace is a
/// reference-count bump.
///
/// Rendering joins the frames with `'\n'`, without a trailing newline.
///
/// # Examples
///
/// ```
/// use error_wrap::{Frame, StackTrace};
///
/// let trace: StackTrace = vec![
///     Frame::new("app::inner", "src/app.rs", 10),
///     Frame::new("app::outer", "src/app.rs", 20),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(trace.depth(), 2);
/// assert_eq!(trace.to_string(), "app::inner\n\tsrc/app.rs:10\napp::outer\n\tsrc/app.rs:20");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StackTrace {
    frames: Arc<[Frame]>,
}

impl StackTrace {
    /// Returns a trace without frames.
    #[inline]
    pub fn empty() -> Self {
        Self { frames: Arc::from(Vec::new()) }
    }

    /// Captures the current call stack.
    ///
    /// `skip` counts frames to omit above the caller of this function:
    /// `capture(0)` starts at the function calling `capture`, `capture(1)` at
    /// its caller, and so on. Frames belonging to the unwinder never count.
    ///
    /// The walk keeps at most [`MAX_DEPTH`] frames and ends before the first
    /// runtime, test-harness or scheduler frame. Capture never fails; when
    /// symbols are unavailable the result is simply shorter, possibly empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_wrap::StackTrace;
    ///
    /// #[inline(never)]
    /// fn here() -> StackTrace {
    ///     StackTrace::capture(0)
    /// }
    ///
    /// let trace = here();
    /// assert!(trace.depth() <= error_wrap::MAX_DEPTH);
    /// ```
    #[inline(never)]
    pub fn capture(skip: usize) -> Self {
        let mut raw = Vec::with_capacity(MAX_DEPTH);
        backtrace::trace(|frame| {
            raw.push(frame.clone());
            raw.len() < RAW_FRAME_LIMIT
        });

        let mut walk = Walk::Seeking;
        let mut frames = Vec::with_capacity(MAX_DEPTH);

        'outer: for raw_frame in &raw {
            let mut symbols = Vec::new();
            backtrace::resolve_frame(raw_frame, |symbol| symbols.push(Frame::from_symbol(symbol)));

            for frame in symbols {
                match walk {
                    Walk::Seeking => {
                        if is_capture_frame(&frame.function) {
                            walk = Walk::Skipping(skip);
                        }
                    },
                    Walk::Skipping(left) if left > 0 => walk = Walk::Skipping(left - 1),
                    Walk::Skipping(_) | Walk::Collecting => {
                        walk = Walk::Collecting;
                        if is_runtime_frame(&frame.function) {
                            break 'outer;
                        }
                        if is_shim_frame(&frame.function) {
                            continue;
                        }
                        frames.push(frame);
                        if frames.len() == MAX_DEPTH {
                            break 'outer;
                        }
                    },
                }
            }
        }

        Self { frames: frames.into() }
    }

    /// Number of frames in the trace.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Borrows the frames, innermost first.
    #[inline]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
}

enum Walk {
    Seeking,
    Skipping(usize),
    Collecting,
}

fn is_capture_frame(function: &str) -> bool {
    function.ends_with(CAPTURE_SYMBOL) || function.ends_with(CAPTURE_SYMBOL_V0)
}

/// Reports whether `function` belongs to the runtime rather than the application.
///
/// Trait-impl paths such as `<tokio::runtime::..>::poll` are matched without
/// their leading `<`.
fn is_runtime_frame(function: &str) -> bool {
    starts_with_any(function, RUNTIME_PREFIXES)
}

/// Reports whether `function` is a closure-call shim, either called directly
/// or through a `<T as core::ops::function::Fn*>` impl.
fn is_shim_frame(function: &str) -> bool {
    starts_with_any(function, &[SHIM_PATH]) || function.contains(SHIM_IMPL)
}

fn starts_with_any(function: &str, prefixes: &[&str]) -> bool {
    let path = function.strip_prefix('<').unwrap_or(function);
    prefixes.iter().any(|prefix| path.starts_with(prefix))
}

impl Default for StackTrace {
    fn default() -> Self {
        Self::empty()
    }
}

impl Deref for StackTrace {
    type Target = [Frame];

    #[inline]
    fn deref(&self) -> &[Frame] {
        &self.frames
    }
}

impl<'a> IntoIterator for &'a StackTrace {
    type Item = &'a Frame;
    type IntoIter = core::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

impl FromIterator<Frame> for StackTrace {
    fn from_iter<I: IntoIterator<Item = Frame>>(iter: I) -> Self {
        Self { frames: iter.into_iter().collect() }
    }
}

impl Display for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, frame) in self.frames.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            Display::fmt(frame, f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for StackTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.frames.iter()).finish()
    }
}
