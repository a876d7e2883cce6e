use std::error::Error as StdError;
use std::io;

use super::Error;

/// Walks `err` and its `source()` chain looking for a value equal to `target`.
///
/// An [`Error`] met on the way is searched member by member instead of
/// through its own `source()`.
pub(crate) fn is_in<T>(err: &(dyn StdError + 'static), target: &T) -> bool
where
    T: StdError + PartialEq + 'static,
{
    let mut cursor = Some(err);
    while let Some(current) = cursor {
        if current.downcast_ref::<T>().is_some_and(|candidate| candidate == target) {
            return true;
        }
        if let Some(chain) = current.downcast_ref::<Error>() {
            return chain.is(target);
        }
        cursor = next(current);
    }
    false
}

/// Walks `err` and its `source()` chain for the first value of type `T`.
///
/// The current value is checked before an [`Error`] is descended into, so
/// `find_in::<Error>` returns the outermost chain.
pub(crate) fn find_in<'a, T>(err: &'a (dyn StdError + 'static)) -> Option<&'a T>
where
    T: StdError + 'static,
{
    let mut cursor = Some(err);
    while let Some(current) = cursor {
        if let Some(found) = current.downcast_ref::<T>() {
            return Some(found);
        }
        if let Some(chain) = current.downcast_ref::<Error>() {
            return chain.find::<T>();
        }
        cursor = next(current);
    }
    None
}

/// Next step of a walk.
///
/// `io::Error::source()` skips its payload and reports the payload's own
/// source, so a custom `io::Error` steps into the payload instead.
fn next<'a>(current: &'a (dyn StdError + 'static)) -> Option<&'a (dyn StdError + 'static)> {
    if let Some(payload) = current.downcast_ref::<io::Error>().and_then(io::Error::get_ref) {
        let payload: &(dyn StdError + 'static) = payload;
        return Some(payload);
    }
    current.source()
}
