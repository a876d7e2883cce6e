use crate::assert_leading_frames;
use error_wrap::{errorf, extract_stack_trace, new, wrap, wrap_option, wrapf, Error, Frame, Sentinel, StackTrace, MAX_DEPTH};
use std::fmt;
use std::io;

static ERR_GLOBAL: Sentinel = Sentinel::new("global error");

/// Wraps an error the way an unrelated library would: own message, `source()`
/// pointing at the wrapped value.
#[derive(Debug)]
struct ForeignError {
    message: &'static str,
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl ForeignError {
    fn new(message: &'static str, source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self { message, source: source.into() }
    }
}

impl fmt::Display for ForeignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message, self.source)
    }
}

impl std::error::Error for ForeignError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&*self.source)
    }
}

#[test]
fn stack_trace_restored_through_foreign_wrapper() {
    #[inline(never)]
    fn a() -> Error {
        errorf!("some {:?}", "error")
    }
    #[inline(never)]
    fn b() -> Error {
        wrapf!(a(), "{}", "b")
    }
    #[inline(never)]
    fn c() -> ForeignError {
        ForeignError::new("c", b())
    }
    #[inline(never)]
    fn d() -> Error {
        wrap(c(), "d")
    }

    let err = d();

    assert_eq!(err.to_string(), r#"d: c: b: some "error""#);
    let trace = extract_stack_trace(&err).expect("chain has a trace");
    assert_leading_frames(&trace, &["a", "b", "c", "d", "stack_trace_restored_through_foreign_wrapper"]);
}

#[test]
fn stack_trace_restored_through_two_foreign_wrappers() {
    #[inline(never)]
    fn a() -> Error {
        errorf!("some {:?}", "error")
    }
    #[inline(never)]
    fn b() -> ForeignError {
        ForeignError::new("b", a())
    }
    #[inline(never)]
    fn c() -> Error {
        wrapf!(b(), "{}", "c")
    }
    #[inline(never)]
    fn d() -> ForeignError {
        ForeignError::new("d", c())
    }
    #[inline(never)]
    fn e() -> Error {
        wrap(d(), "e")
    }

    let err = e();

    assert_eq!(err.to_string(), r#"e: d: c: b: some "error""#);
    let trace = extract_stack_trace(&err).expect("chain has a trace");
    assert_leading_frames(&trace, &["a", "b", "c", "d", "e", "stack_trace_restored_through_two_foreign_wrappers"]);
}

#[test]
fn stack_trace_restored_through_io_error() {
    #[inline(never)]
    fn a() -> Error {
        new("a")
    }
    #[inline(never)]
    fn b() -> io::Error {
        io::Error::other(a())
    }
    #[inline(never)]
    fn c() -> Error {
        wrap(b(), "c")
    }

    let err = c();

    assert_eq!(err.to_string(), "c: a");
    let trace = extract_stack_trace(&err).expect("chain has a trace");
    assert_leading_frames(&trace, &["a", "b", "c", "stack_trace_restored_through_io_error"]);
}

#[test]
fn extract_stack_trace_reaches_into_io_error() {
    let inner = new("inner");
    let expected = inner.stack_trace().clone();
    let err = io::Error::new(io::ErrorKind::InvalidData, inner);

    assert_eq!(extract_stack_trace(&err), Some(expected));
}

#[test]
fn restored_trace_is_never_shallower_than_the_wrapped_one() {
    #[inline(never)]
    fn a() -> Error {
        new("a")
    }
    #[inline(never)]
    fn b() -> ForeignError {
        ForeignError::new("b", a())
    }

    let inner_depth = a().stack_trace().depth();
    let err = wrap(b(), "c");

    assert!(err.stack_trace().depth() >= inner_depth);
}

#[test]
fn wrapping_a_global_sentinel_records_the_wrap_site() {
    #[inline(never)]
    fn a() -> Error {
        wrap(ERR_GLOBAL, "a")
    }
    #[inline(never)]
    fn b() -> Error {
        wrap(a(), "b")
    }

    let err = b();

    assert_eq!(err.to_string(), "b: a: global error");
    let trace = extract_stack_trace(&err).expect("chain has a trace");
    assert_leading_frames(&trace, &["a", "b", "wrapping_a_global_sentinel_records_the_wrap_site"]);
}

#[test]
fn wrapping_none_records_the_wrap_site() {
    #[inline(never)]
    fn a() -> Option<io::Error> {
        None
    }
    #[inline(never)]
    fn b() -> Error {
        wrap_option(a(), "b")
    }
    #[inline(never)]
    fn c() -> Error {
        wrap_option(a(), format!("{}", 1))
    }

    let err = b();
    assert_eq!(err.to_string(), "b: <nil>");
    assert_leading_frames(err.stack_trace(), &["b", "wrapping_none_records_the_wrap_site"]);

    let err = c();
    assert_eq!(err.to_string(), "1: <nil>");
    assert_leading_frames(err.stack_trace(), &["c", "wrapping_none_records_the_wrap_site"]);
}

#[test]
fn deeper_capture_replaces_shallower_trace() {
    #[inline(never)]
    fn deep(err: Error) -> Error {
        deeper(err)
    }
    #[inline(never)]
    fn deeper(err: Error) -> Error {
        wrap(err, "deep")
    }

    // Created at the top of the test, wrapped two calls further down.
    let err = new("shallow");
    let shallow_depth = err.stack_trace().depth();
    let err = deep(err);

    assert!(err.stack_trace().depth() > shallow_depth);
    assert_leading_frames(err.stack_trace(), &["deeper", "deep", "deeper_capture_replaces_shallower_trace"]);
}

#[test]
fn extract_stack_trace_without_chain_is_none() {
    let plain = ForeignError::new("plain", io::Error::other("io"));
    assert!(extract_stack_trace(&plain).is_none());
}

#[test]
fn extract_stack_trace_finds_chain_inside_foreign_error() {
    let inner = new("inner");
    let expected = inner.stack_trace().clone();
    let foreign = ForeignError::new("outer", inner);

    assert_eq!(extract_stack_trace(&foreign), Some(expected));
}

#[test]
fn captured_frames_carry_file_and_line() {
    let err = new("located");
    let frame = &err.stack_trace()[0];

    assert!(frame.file.ends_with(file!()), "unexpected file {:?}", frame.file);
    assert!(frame.line > 0);
}

#[test]
fn capture_is_bounded() {
    #[inline(never)]
    fn recurse(n: usize) -> StackTrace {
        if n == 0 {
            return StackTrace::capture(0);
        }
        std::hint::black_box(recurse(n - 1))
    }

    let trace = recurse(MAX_DEPTH * 2);
    assert_eq!(trace.depth(), MAX_DEPTH);
    assert!(trace.iter().all(|frame| frame.function.ends_with("::recurse")));
}

#[test]
fn capture_skip_moves_the_first_frame_outward() {
    #[inline(never)]
    fn inner(skip: usize) -> StackTrace {
        StackTrace::capture(skip)
    }
    #[inline(never)]
    fn outer(skip: usize) -> StackTrace {
        inner(skip)
    }

    assert_leading_frames(&outer(0), &["inner", "outer", "capture_skip_moves_the_first_frame_outward"]);
    assert_leading_frames(&outer(1), &["outer", "capture_skip_moves_the_first_frame_outward"]);
}

#[test]
fn trace_renders_frames_joined_by_newlines() {
    let trace: StackTrace =
        vec![Frame::new("app::a", "src/a.rs", 1), Frame::new("app::b", "src/b.rs", 2)].into_iter().collect();

    assert_eq!(trace.to_string(), "app::a\n\tsrc/a.rs:1\napp::b\n\tsrc/b.rs:2");
    assert_eq!(trace.frames().len(), 2);
}
