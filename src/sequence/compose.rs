//! Plain function composition and data piping.

/// Compose two functions left to right.
///
/// `compose(f, g)(a)` equals `g(f(a))`. Composition is associative, so
/// nested compositions may be grouped either way.
///
/// # Example
///
/// ```rust
/// use railway::sequence::compose;
///
/// let add_then_double = compose(|n: i32| n + 1, |n: i32| n * 2);
///
/// assert_eq!(add_then_double(3), 8);
/// ```
pub fn compose<A, B, C, First, Second>(first: First, second: Second) -> impl Fn(A) -> C
where
    First: Fn(A) -> B,
    Second: Fn(B) -> C,
{
    move |input| second(first(input))
}

/// Feed a value into a function.
///
/// Purely notational: `pipe(value, f)` is `f(value)`.
pub fn pipe<A, B, Func>(value: A, f: Func) -> B
where
    Func: FnOnce(A) -> B,
{
    f(value)
}

/// Method form of [`pipe`], available on every sized value.
///
/// # Example
///
/// ```rust
/// use railway::sequence::Pipe;
///
/// let shouted = "hello".pipe(str::to_uppercase);
///
/// assert_eq!(shouted, "HELLO");
/// ```
pub trait Pipe: Sized {
    /// Apply `f` to `self`.
    fn pipe<B, Func>(self, f: Func) -> B
    where
        Func: FnOnce(Self) -> B,
    {
        f(self)
    }
}

impl<T> Pipe for T {}
