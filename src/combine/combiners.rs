//! Stock combining functions for use with `plus`.

/// Keep the first of two successes.
pub fn take_first<A, B>(first: A, _second: B) -> A {
    first
}

/// Keep the last of two successes.
pub fn take_last<A, B>(_first: A, last: B) -> B {
    last
}

/// Collect failure payloads in switch order.
pub fn accumulate<F>(failures: Vec<F>) -> Vec<F> {
    failures
}

/// Flatten failures that are themselves lists of errors.
pub fn concat<T>(failures: Vec<Vec<T>>) -> Vec<T> {
    failures.into_iter().flatten().collect()
}
