//! Chaining switch functions with `bind`.

use super::compose::compose;
use crate::core::{either, fail, Outcome};

/// Turn a switch function into a function over outcomes.
///
/// Applied to `Success(s)` the result behaves as `switch(s)`. Applied to
/// `Failure(e)` it returns `Failure(e)` and the switch is never called.
///
/// # Example
///
/// ```rust
/// use railway::core::{fail, succeed, Outcome};
/// use railway::sequence::bind;
///
/// let positive = |n: i32| {
///     if n > 0 {
///         succeed(n)
///     } else {
///         fail("not positive".to_string())
///     }
/// };
/// let checked = bind(positive);
///
/// assert_eq!(checked(succeed(5)), Outcome::Success(5));
/// assert_eq!(checked(succeed(-1)), Outcome::Failure("not positive".to_string()));
/// assert_eq!(checked(fail("earlier".to_string())), Outcome::Failure("earlier".to_string()));
/// ```
pub fn bind<S, S1, F, Switch>(switch: Switch) -> impl Fn(Outcome<S, F>) -> Outcome<S1, F>
where
    Switch: Fn(S) -> Outcome<S1, F>,
{
    either(switch, fail::<S1, F>)
}

/// Feed an outcome into a switch function.
///
/// Equal to `bind(switch)(outcome)`.
pub fn pipe_switch<S, S1, F, Switch>(outcome: Outcome<S, F>, switch: Switch) -> Outcome<S1, F>
where
    Switch: Fn(S) -> Outcome<S1, F>,
{
    bind(switch)(outcome)
}

/// Compose two switch functions into one (Kleisli composition).
///
/// The second switch only runs when the first succeeds.
///
/// # Example
///
/// ```rust
/// use railway::core::{fail, succeed, Outcome};
/// use railway::sequence::compose_switch;
///
/// let not_empty = |s: String| if s.is_empty() { fail("empty") } else { succeed(s) };
/// let short = |s: String| if s.len() >= 5 { fail("long") } else { succeed(s) };
/// let validate = compose_switch(not_empty, short);
///
/// assert_eq!(validate(String::new()), Outcome::Failure("empty"));
/// assert_eq!(validate("123456".to_string()), Outcome::Failure("long"));
/// assert_eq!(validate("1234".to_string()), Outcome::Success("1234".to_string()));
/// ```
pub fn compose_switch<I, S, S1, F, First, Second>(
    first: First,
    second: Second,
) -> impl Fn(I) -> Outcome<S1, F>
where
    First: Fn(I) -> Outcome<S, F>,
    Second: Fn(S) -> Outcome<S1, F>,
{
    compose(first, bind(second))
}
