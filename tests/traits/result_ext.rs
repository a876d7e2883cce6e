use crate::assert_leading_frames;
use error_wrap::{is, new, Error, ResultExt, Sentinel};
use std::cell::Cell;

static ERR_TIMEOUT: Sentinel = Sentinel::new("timeout");

#[inline(never)]
fn fetch() -> Result<u32, Sentinel> {
    Err(ERR_TIMEOUT)
}

#[inline(never)]
fn load() -> error_wrap::Result<u32> {
    fetch().wrap("loading index")
}

#[test]
fn wrap_leaves_ok_untouched() {
    let result: Result<u32, Sentinel> = Ok(7);
    assert_eq!(result.wrap("unused").ok(), Some(7));
}

#[test]
fn wrap_records_message_and_call_site() {
    let err = load().unwrap_err();

    assert_eq!(err.to_string(), "loading index: timeout");
    assert!(is(&err, &ERR_TIMEOUT));
    assert_leading_frames(err.stack_trace(), &["load", "wrap_records_message_and_call_site"]);
}

#[test]
fn wrap_extends_an_existing_chain() {
    let err = load().wrap("serving request").unwrap_err();

    assert_eq!(err.to_string(), "serving request: loading index: timeout");
    assert_eq!(err.len(), 3);
    assert_leading_frames(err.stack_trace(), &["load", "wrap_extends_an_existing_chain"]);
}

#[test]
fn wrap_with_builds_message_only_on_error() {
    let calls = Cell::new(0);
    let message = || {
        calls.set(calls.get() + 1);
        format!("attempt {}", calls.get())
    };

    let ok: Result<(), Error> = Ok(());
    assert!(ok.wrap_with(message).is_ok());
    assert_eq!(calls.get(), 0);

    let failed: Result<(), Error> = Err(new("refused"));
    let err = failed.wrap_with(message).unwrap_err();
    assert_eq!(calls.get(), 1);
    assert_eq!(err.to_string(), "attempt 1: refused");
}

#[test]
fn wrap_accepts_string_errors() {
    let result: Result<(), String> = Err(String::from("bad header"));
    let err = result.wrap("parsing").unwrap_err();

    assert_eq!(err.to_string(), "parsing: bad header");
}
