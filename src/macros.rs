//! Variadic sugar over the named composition functions.

/// Compose any number of functions left to right.
///
/// `compose!(f, g, h)` expands to `compose(f, compose(g, h))`.
///
/// # Example
///
/// ```
/// use railway::compose;
///
/// let f = compose!(|n: i32| n + 1, |n: i32| n * 2, |n: i32| n.to_string());
///
/// assert_eq!(f(4), "10");
/// ```
#[macro_export]
macro_rules! compose {
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {
        $crate::sequence::compose($f, $crate::compose!($($rest),+))
    };
}

/// Compose any number of switch functions (Kleisli composition).
///
/// Each switch runs only while the previous ones succeeded.
///
/// # Example
///
/// ```
/// use railway::core::{fail, succeed, Outcome};
/// use railway::kleisli;
///
/// let validate = kleisli!(
///     |s: &'static str| if s.is_empty() { fail("empty") } else { succeed(s) },
///     |s: &'static str| if s.len() > 3 { fail("long") } else { succeed(s) },
///     |s: &'static str| succeed(s.len()),
/// );
///
/// assert_eq!(validate("abc"), Outcome::Success(3));
/// assert_eq!(validate(""), Outcome::Failure("empty"));
/// assert_eq!(validate("abcd"), Outcome::Failure("long"));
/// ```
#[macro_export]
macro_rules! kleisli {
    ($f:expr $(,)?) => {
        $f
    };
    ($f:expr, $($rest:expr),+ $(,)?) => {
        $crate::sequence::compose_switch($f, $crate::kleisli!($($rest),+))
    };
}

/// Feed a value through any number of functions.
///
/// `pipe!(x, f, g)` expands to `pipe(pipe(x, f), g)`.
///
/// # Example
///
/// ```
/// use railway::pipe;
///
/// let shouted = pipe!("rail", str::to_uppercase, |s: String| s + "WAY");
///
/// assert_eq!(shouted, "RAILWAY");
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };
    ($value:expr, $f:expr $(, $rest:expr)* $(,)?) => {
        $crate::pipe!($crate::sequence::pipe($value, $f) $(, $rest)*)
    };
}
