//! Function composition and outcome chaining.
//!
//! Plain composition (`compose`, `pipe`) works on ordinary functions.
//! Chaining (`bind`, `pipe_switch`, `compose_switch`) works on switch
//! functions, which take a plain value and return an [`Outcome`].
//!
//! Once a chain is on the failure track, every later step passes the
//! failure through without calling user code.
//!
//! [`Outcome`]: crate::core::Outcome

mod chain;
mod compose;

pub use chain::{bind, compose_switch, pipe_switch};
pub use compose::{compose, pipe, Pipe};
