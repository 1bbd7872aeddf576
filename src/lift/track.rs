//! Lifting plain functions onto the two-track model.

use crate::core::{either, fail, succeed, Outcome};
use crate::sequence::{bind, compose};

/// Lift a total function into a switch that always succeeds.
///
/// `switch(f)(s)` equals `Success(f(s))`. The failure type is left open so
/// the switch slots into any chain.
///
/// # Example
///
/// ```rust
/// use railway::core::Outcome;
/// use railway::lift::switch;
///
/// let double = switch(|n: i32| n * 2);
/// let outcome: Outcome<i32, String> = double(21);
///
/// assert_eq!(outcome, Outcome::Success(42));
/// ```
pub fn switch<S1, S2, F, Func>(f: Func) -> impl Fn(S1) -> Outcome<S2, F>
where
    Func: Fn(S1) -> S2,
{
    compose(f, succeed::<S2, F>)
}

/// Lift a plain function onto the success track of an outcome.
///
/// Failures pass through unchanged.
pub fn map<S1, S2, F, Func>(f: Func) -> impl Fn(Outcome<S1, F>) -> Outcome<S2, F>
where
    Func: Fn(S1) -> S2,
{
    bind(switch::<S1, S2, F, Func>(f))
}

/// Remap both tracks of an outcome.
///
/// Equal to `either(compose(on_success, succeed), compose(on_failure, fail))`.
///
/// # Example
///
/// ```rust
/// use railway::core::{fail, succeed, Outcome};
/// use railway::lift::double_map;
///
/// let remap = double_map(|s: &str| s.to_uppercase(), |code: u16| format!("error {code}"));
///
/// assert_eq!(remap(succeed("abc")), Outcome::Success("ABC".to_string()));
/// assert_eq!(remap(fail(404)), Outcome::Failure("error 404".to_string()));
/// ```
pub fn double_map<S1, S2, F1, F2, OnSuccess, OnFailure>(
    on_success: OnSuccess,
    on_failure: OnFailure,
) -> impl Fn(Outcome<S1, F1>) -> Outcome<S2, F2>
where
    OnSuccess: Fn(S1) -> S2,
    OnFailure: Fn(F1) -> F2,
{
    either(
        compose(on_success, succeed::<S2, F2>),
        compose(on_failure, fail::<S2, F2>),
    )
}

/// Lift a function returning a standard `Result` into a switch.
///
/// `Err` values are remapped through `handler` onto the failure track.
pub fn lift_result<S1, S2, E, F, Func, Handler>(
    f: Func,
    handler: Handler,
) -> impl Fn(S1) -> Outcome<S2, F>
where
    Func: Fn(S1) -> Result<S2, E>,
    Handler: Fn(E) -> F,
{
    move |input| Outcome::from(f(input)).map_failure(&handler)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switch_always_succeeds() {
        let len = switch::<_, _, (), _>(|s: &str| s.len());

        assert_eq!(len("four"), Outcome::Success(4));
        assert_eq!(len(""), Outcome::Success(0));
    }

    #[test]
    fn map_transforms_success() {
        let add_one = map(|n: i32| n + 1);
        let outcome: Outcome<i32, String> = succeed(1);

        assert_eq!(add_one(outcome), Outcome::Success(2));
    }

    #[test]
    fn map_preserves_failure() {
        let add_one = map(|n: i32| n + 1);
        let outcome: Outcome<i32, String> = fail("kept".to_string());

        assert_eq!(add_one(outcome), Outcome::Failure("kept".to_string()));
    }

    #[test]
    fn map_composes_with_bind() {
        let pipeline = compose(
            map(|n: i32| n * 2),
            bind(|n: i32| if n > 10 { fail("too big") } else { succeed(n) }),
        );

        assert_eq!(pipeline(succeed(3)), Outcome::Success(6));
        assert_eq!(pipeline(succeed(6)), Outcome::Failure("too big"));
    }

    #[test]
    fn double_map_remaps_success() {
        let remap = double_map(|n: i32| n.to_string(), |e: String| e.len());

        assert_eq!(remap(succeed(12)), Outcome::Success("12".to_string()));
    }

    #[test]
    fn double_map_remaps_failure() {
        let remap = double_map(|n: i32| n.to_string(), |e: String| e.len());

        assert_eq!(remap(fail("abcd".to_string())), Outcome::Failure(4));
    }

    #[test]
    fn lift_result_maps_ok_and_err() {
        let parse = lift_result(
            |s: &str| s.parse::<i32>(),
            |e: std::num::ParseIntError| format!("parse: {e}"),
        );

        assert_eq!(parse("17"), Outcome::Success(17));
        assert!(matches!(parse("x"), Outcome::Failure(msg) if msg.starts_with("parse: ")));
    }
}
