//! Adapters at the edge between plain effects and the two-track model.
//!
//! `tee` adapts a dead-end function without touching panics. `try_catch` is
//! the one place where a panic becomes an ordinary failure value.

use super::error::RaisedCondition;
use crate::core::{fail, succeed, Outcome};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Wrap a dead-end function so it passes its input through.
///
/// `f` runs for its effect and its return value is discarded. A panic in
/// `f` propagates to the caller; `tee` never catches.
///
/// # Example
///
/// ```rust
/// use railway::lift::tee;
/// use std::cell::RefCell;
///
/// let seen = RefCell::new(Vec::new());
/// let record = tee(|n: &i32| seen.borrow_mut().push(*n));
///
/// assert_eq!(record(5), 5);
/// assert_eq!(*seen.borrow(), vec![5]);
/// ```
pub fn tee<I, R, Func>(f: Func) -> impl Fn(I) -> I
where
    Func: Fn(&I) -> R,
{
    move |input| {
        f(&input);
        input
    }
}

/// Lift a function that may panic into a switch.
///
/// A normal return becomes `Success(value)`. A panic is captured for this
/// call only, converted to a [`RaisedCondition`], and passed to `handler`
/// to produce the failure payload.
///
/// # Example
///
/// ```rust
/// use railway::core::Outcome;
/// use railway::lift::try_catch;
///
/// let divide = try_catch(|(a, b): (i32, i32)| a / b, |c| c.message().to_string());
///
/// assert_eq!(divide((10, 2)), Outcome::Success(5));
/// assert!(divide((1, 0)).is_failure());
/// ```
pub fn try_catch<S1, S2, F, Func, Handler>(
    f: Func,
    handler: Handler,
) -> impl Fn(S1) -> Outcome<S2, F>
where
    Func: Fn(S1) -> S2,
    Handler: Fn(RaisedCondition) -> F,
{
    move |input| {
        let func = &f;
        match catch_unwind(AssertUnwindSafe(move || func(input))) {
            Ok(value) => succeed(value),
            Err(payload) => {
                let condition = RaisedCondition::from_payload(payload);
                tracing::debug!(
                    condition = %condition,
                    "captured panic at try_catch boundary"
                );
                fail(handler(condition))
            }
        }
    }
}
