//! Parallel combination of switches with failure accumulation.
//!
//! Sequential chaining stops at the first failure. `plus` instead runs two
//! switches against the same input and keeps every failure, which is what
//! validation of independent fields needs.
//!
//! # Example
//!
//! ```rust
//! use railway::combine::{accumulate, plus, take_last};
//! use railway::core::{fail, succeed, Outcome};
//!
//! let positive = |n: i32| if n > 0 { succeed(n) } else { fail("not positive") };
//! let even = |n: i32| if n % 2 == 0 { succeed(n) } else { fail("odd") };
//!
//! let validate = plus(take_last, accumulate).both(positive, even);
//!
//! assert_eq!(validate(4), Outcome::Success(4));
//! assert_eq!(validate(-3), Outcome::Failure(vec!["not positive", "odd"]));
//! ```

mod combiners;
mod plus;

pub use combiners::{accumulate, concat, take_first, take_last};
pub use plus::{plus, Plus};
