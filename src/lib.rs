//! Railway: railway oriented programming for Rust
//!
//! A small algebra for chaining fallible, single-input operations. Values
//! travel on two tracks: a success track and a failure track. Once a value
//! is on the failure track, the rest of the chain passes it through without
//! calling user code.
//!
//! # Core Concepts
//!
//! - **Outcome**: the two-track value, `Success(S)` or `Failure(F)`
//! - **Switch**: a function from a plain value to an `Outcome`
//! - **Bind**: lifts a switch into a function over outcomes
//! - **Lifting**: adapters for plain, dead-end, and panicking functions
//! - **Plus**: runs two switches on one input and accumulates failures
//!
//! Panics are only ever turned into failures by [`lift::try_catch`]. Every
//! other combinator lets them unwind.
//!
//! # Example
//!
//! ```rust
//! use railway::prelude::*;
//!
//! fn not_empty(s: String) -> Outcome<String, String> {
//!     if s.is_empty() {
//!         fail("empty".to_string())
//!     } else {
//!         succeed(s)
//!     }
//! }
//!
//! fn not_too_long(s: String) -> Outcome<String, String> {
//!     if s.len() >= 5 {
//!         fail("long".to_string())
//!     } else {
//!         succeed(s)
//!     }
//! }
//!
//! let validate = compose_switch(
//!     compose_switch(switch(|s: String| s.trim().to_string()), not_empty),
//!     not_too_long,
//! );
//!
//! assert_eq!(validate("  ".to_string()), Outcome::Failure("empty".to_string()));
//! assert_eq!(validate("123456".to_string()), Outcome::Failure("long".to_string()));
//! assert_eq!(validate(" 1234 ".to_string()), Outcome::Success("1234".to_string()));
//! ```

mod macros;

pub mod combine;
pub mod core;
pub mod lift;
pub mod sequence;

// Re-export commonly used types
pub use crate::core::{either, fail, succeed, Outcome};
pub use lift::RaisedCondition;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::combine::{accumulate, concat, plus, take_first, take_last, Plus};
    pub use crate::core::{either, fail, succeed, Outcome};
    pub use crate::lift::{double_map, lift_result, map, switch, tee, try_catch, RaisedCondition};
    pub use crate::sequence::{bind, compose, compose_switch, pipe, pipe_switch, Pipe};
    pub use crate::{compose, kleisli, pipe};
}
