//! The `plus` combiner.

use crate::core::{fail, succeed, Outcome};

/// A configured way of joining two switches.
///
/// Holds the function that merges two successes and the function that
/// merges the failures. Build one with [`plus`] and apply it to any pair of
/// switches with [`Plus::both`].
#[derive(Clone)]
pub struct Plus<CombineSuccesses, CombineFailures> {
    combine_successes: CombineSuccesses,
    combine_failures: CombineFailures,
}

/// Create a combiner from a success merger and a failure merger.
///
/// The failure merger receives the failure payloads in switch order: one
/// payload when a single switch failed, two when both did.
pub fn plus<CombineSuccesses, CombineFailures>(
    combine_successes: CombineSuccesses,
    combine_failures: CombineFailures,
) -> Plus<CombineSuccesses, CombineFailures> {
    Plus {
        combine_successes,
        combine_failures,
    }
}

impl<CombineSuccesses, CombineFailures> Plus<CombineSuccesses, CombineFailures> {
    /// Join two switches into one that evaluates both on the same input.
    ///
    /// Both switches always run, first then second. The outcomes combine as:
    ///
    /// | first        | second       | result                                  |
    /// |--------------|--------------|-----------------------------------------|
    /// | `Success(a)` | `Success(b)` | `Success(combine_successes(a, b))`      |
    /// | `Failure(x)` | `Success(_)` | `Failure(combine_failures(vec![x]))`    |
    /// | `Success(_)` | `Failure(y)` | `Failure(combine_failures(vec![y]))`    |
    /// | `Failure(x)` | `Failure(y)` | `Failure(combine_failures(vec![x, y]))` |
    pub fn both<I, S1, S2, F, AS, AF, First, Second>(
        self,
        first: First,
        second: Second,
    ) -> impl Fn(I) -> Outcome<AS, AF>
    where
        I: Clone,
        First: Fn(I) -> Outcome<S1, F>,
        Second: Fn(I) -> Outcome<S2, F>,
        CombineSuccesses: Fn(S1, S2) -> AS,
        CombineFailures: Fn(Vec<F>) -> AF,
    {
        let Plus {
            combine_successes,
            combine_failures,
        } = self;

        move |input: I| {
            let left = first(input.clone());
            let right = second(input);

            let failures = match (left, right) {
                (Outcome::Success(a), Outcome::Success(b)) => {
                    return succeed(combine_successes(a, b));
                }
                (Outcome::Failure(x), Outcome::Success(_)) => vec![x],
                (Outcome::Success(_), Outcome::Failure(y)) => vec![y],
                (Outcome::Failure(x), Outcome::Failure(y)) => vec![x, y],
            };

            tracing::trace!(failures = failures.len(), "plus accumulated failures");
            fail(combine_failures(failures))
        }
    }
}
