//! Adapters from plain, dead-end, and panicking functions into the
//! two-track world.
//!
//! - `switch` and `map` lift total functions
//! - `double_map` remaps both tracks
//! - `lift_result` adapts functions returning a standard `Result`
//! - `tee` adapts dead-end functions
//! - `try_catch` converts panics into failures

mod boundary;
pub mod error;
mod track;

pub use boundary::{tee, try_catch};
pub use error::RaisedCondition;
pub use track::{double_map, lift_result, map, switch};
