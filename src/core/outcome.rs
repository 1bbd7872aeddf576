//! The `Outcome` type: exactly one of a success or a failure payload.

use serde::{Deserialize, Serialize};
use stillwater::Validation;

/// A two-track value holding either a success payload or a failure payload.
///
/// Exactly one variant is active. Equality is structural: two successes are
/// equal when their payloads are, two failures likewise, and a success never
/// equals a failure.
///
/// # Example
///
/// ```rust
/// use railway::core::{fail, succeed, Outcome};
///
/// let ok: Outcome<i32, String> = succeed(3);
/// let err: Outcome<i32, String> = fail("boom".to_string());
///
/// assert_eq!(ok, Outcome::Success(3));
/// assert_ne!(ok, err);
/// assert!(err.is_failure());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome<S, F> {
    /// The success track
    Success(S),

    /// The failure track
    Failure(F),
}

/// Put a value on the success track.
///
/// Total: there is no way for this to fail.
pub fn succeed<S, F>(value: S) -> Outcome<S, F> {
    Outcome::Success(value)
}

/// Put an error on the failure track.
///
/// Total: there is no way for this to fail.
pub fn fail<S, F>(error: F) -> Outcome<S, F> {
    Outcome::Failure(error)
}

/// Build a function that dispatches on the variant of an outcome.
///
/// `on_success` receives the success payload, `on_failure` the failure
/// payload, and whichever branch runs produces the resulting outcome. The
/// other combinators of this crate are expressed through this function.
///
/// # Example
///
/// ```rust
/// use railway::core::{either, fail, succeed, Outcome};
///
/// let describe = either(
///     |n: i32| succeed::<String, usize>(format!("got {n}")),
///     |e: String| fail(e.len()),
/// );
///
/// assert_eq!(describe(succeed(7)), Outcome::Success("got 7".to_string()));
/// assert_eq!(describe(fail("bad".to_string())), Outcome::Failure(3));
/// ```
pub fn either<S, F, S2, F2, OnSuccess, OnFailure>(
    on_success: OnSuccess,
    on_failure: OnFailure,
) -> impl Fn(Outcome<S, F>) -> Outcome<S2, F2>
where
    OnSuccess: Fn(S) -> Outcome<S2, F2>,
    OnFailure: Fn(F) -> Outcome<S2, F2>,
{
    move |outcome| outcome.either(&on_success, &on_failure)
}

impl<S, F> Outcome<S, F> {
    /// Check if this outcome is on the success track.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Check if this outcome is on the failure track.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Take the success payload, discarding a failure.
    pub fn success(self) -> Option<S> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Take the failure payload, discarding a success.
    pub fn failure(self) -> Option<F> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Borrow both payloads.
    pub fn as_ref(&self) -> Outcome<&S, &F> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Dispatch on the active variant.
    ///
    /// Method form of [`either`]: applies `on_success` or `on_failure` and
    /// returns the outcome that branch produces.
    pub fn either<S2, F2, OnSuccess, OnFailure>(
        self,
        on_success: OnSuccess,
        on_failure: OnFailure,
    ) -> Outcome<S2, F2>
    where
        OnSuccess: FnOnce(S) -> Outcome<S2, F2>,
        OnFailure: FnOnce(F) -> Outcome<S2, F2>,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Collapse both tracks into a single plain value.
    pub fn fold<T, OnSuccess, OnFailure>(self, on_success: OnSuccess, on_failure: OnFailure) -> T
    where
        OnSuccess: FnOnce(S) -> T,
        OnFailure: FnOnce(F) -> T,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Chain a switch function onto the success track.
    ///
    /// The switch only runs for a success; a failure passes through
    /// unchanged and the switch is never called.
    ///
    /// # Example
    ///
    /// ```rust
    /// use railway::core::{fail, succeed, Outcome};
    ///
    /// let halve = |n: i32| {
    ///     if n % 2 == 0 {
    ///         succeed(n / 2)
    ///     } else {
    ///         fail(format!("{n} is odd"))
    ///     }
    /// };
    ///
    /// assert_eq!(succeed(8).flat_map(halve), Outcome::Success(4));
    /// assert_eq!(succeed(3).flat_map(halve), Outcome::Failure("3 is odd".to_string()));
    /// ```
    pub fn flat_map<S1, Switch>(self, switch: Switch) -> Outcome<S1, F>
    where
        Switch: FnOnce(S) -> Outcome<S1, F>,
    {
        self.either(switch, fail)
    }

    /// Transform the success payload, leaving a failure untouched.
    pub fn map<S1, Func>(self, f: Func) -> Outcome<S1, F>
    where
        Func: FnOnce(S) -> S1,
    {
        self.flat_map(|value| succeed(f(value)))
    }

    /// Transform the failure payload, leaving a success untouched.
    pub fn map_failure<F1, Func>(self, f: Func) -> Outcome<S, F1>
    where
        Func: FnOnce(F) -> F1,
    {
        self.either(succeed, |error| fail(f(error)))
    }

    /// Remap both tracks at once.
    pub fn double_map<S1, F1, OnSuccess, OnFailure>(
        self,
        on_success: OnSuccess,
        on_failure: OnFailure,
    ) -> Outcome<S1, F1>
    where
        OnSuccess: FnOnce(S) -> S1,
        OnFailure: FnOnce(F) -> F1,
    {
        self.either(|value| succeed(on_success(value)), |error| fail(on_failure(error)))
    }

    /// Convert into a standard library `Result`.
    pub fn into_result(self) -> Result<S, F> {
        self.into()
    }
}

impl<S, F> From<Result<S, F>> for Outcome<S, F> {
    fn from(result: Result<S, F>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<S, F> From<Outcome<S, F>> for Result<S, F> {
    fn from(outcome: Outcome<S, F>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

impl<S, F> From<Validation<S, F>> for Outcome<S, F> {
    fn from(validation: Validation<S, F>) -> Self {
        match validation {
            Validation::Success(value) => Self::Success(value),
            Validation::Failure(error) => Self::Failure(error),
        }
    }
}

impl<S, F> From<Outcome<S, F>> for Validation<S, F> {
    fn from(outcome: Outcome<S, F>) -> Self {
        match outcome {
            Outcome::Success(value) => Validation::Success(value),
            Outcome::Failure(error) => Validation::Failure(error),
        }
    }
}
