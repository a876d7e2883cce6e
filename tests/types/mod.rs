use error_wrap::{new, wrap, Error, Message, Sentinel};
use std::error::Error as StdError;
use std::io;

pub mod stack_trace;

#[test]
fn wraps_render_most_recent_first() {
    let mut err = new("w0");
    for i in 1..=5 {
        err = wrap(err, format!("w{}", i));
    }

    assert_eq!(err.to_string(), "w5: w4: w3: w2: w1: w0");
    assert_eq!(err.len(), 6);
}

#[test]
fn wrapping_a_foreign_error_starts_a_two_member_chain() {
    let err = wrap(io::Error::new(io::ErrorKind::NotFound, "missing"), "opening");

    assert_eq!(err.len(), 2);
    assert_eq!(err.to_string(), "opening: missing");
}

#[test]
fn errors_iterates_outermost_first() {
    let err = wrap(Sentinel::new("root"), "middle").wrap("outer");

    let messages: Vec<String> = err.errors().map(|e| e.to_string()).collect();
    assert_eq!(messages, ["outer", "middle", "root"]);

    let reversed: Vec<String> = err.errors().rev().map(|e| e.to_string()).collect();
    assert_eq!(reversed, ["root", "middle", "outer"]);
}

#[test]
fn root_cause_is_the_first_member() {
    let err = wrap(Sentinel::new("root"), "middle").wrap("outer");

    assert_eq!(err.root_cause().to_string(), "root");
    assert!(err.root_cause().downcast_ref::<Sentinel>().is_some());
}

#[test]
fn single_message_chain_has_no_source() {
    let err = new("alone");
    assert!(err.source().is_none());
}

#[test]
fn wrapped_chain_reports_original_cause_as_source() {
    let err = wrap(io::Error::other("disk"), "saving");

    let source = err.source().expect("wrapped chain has a source");
    assert_eq!(source.to_string(), "disk");
    assert!(source.downcast_ref::<io::Error>().is_some());
}

#[test]
fn message_keeps_static_text_borrowed() {
    let msg = Message::from("static");
    assert_eq!(msg.as_str(), "static");
    assert_eq!(Message::from(String::from("owned")).to_string(), "owned");
}

#[test]
fn error_is_send_sync_and_static() {
    fn assert_bounds<T: Send + Sync + 'static>() {}
    assert_bounds::<Error>();
}

#[test]
fn error_converts_into_box_dyn_error() {
    fn fallible() -> Result<(), Box<dyn StdError + Send + Sync>> {
        Err::<(), _>(new("boxed"))?;
        Ok(())
    }

    let err = fallible().unwrap_err();
    assert_eq!(err.to_string(), "boxed");
    assert!(err.downcast_ref::<Error>().is_some());
}
