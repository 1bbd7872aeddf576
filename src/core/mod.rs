//! Core two-track type and its constructors.
//!
//! This module contains the value at the center of the algebra:
//! - `Outcome`, a closed success/failure sum type
//! - `succeed` and `fail`, the total constructors
//! - `either`, the single point of pattern dispatch
//!
//! Everything here is pure. Outcomes never mutate in place; every
//! transformation returns a new value.

mod outcome;

pub use outcome::{either, fail, succeed, Outcome};
