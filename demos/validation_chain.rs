//! Validation Chain
//!
//! This example chains switch functions so the first failure stops the
//! rest of the pipeline.
//!
//! Key concepts:
//! - Switch functions return an `Outcome`
//! - `kleisli!` composes switches left to right
//! - `try_catch` turns a panicking step into a failure
//! - `tee` runs a side effect without changing the value
//!
//! Run with: cargo run --example validation_chain

use railway::prelude::*;

fn not_empty(s: String) -> Outcome<String, String> {
    if s.is_empty() {
        fail("empty".to_string())
    } else {
        succeed(s)
    }
}

fn not_too_long(s: String) -> Outcome<String, String> {
    if s.len() >= 5 {
        fail("long".to_string())
    } else {
        succeed(s)
    }
}

fn main() {
    println!("=== Validation Chain Example ===\n");

    let parse = try_catch(
        |s: String| match s.parse::<u32>() {
            Ok(n) => n * 2,
            Err(_) => panic!("not a number: {s}"),
        },
        |c| c.message().to_string(),
    );

    let validate = kleisli!(
        switch(tee(|s: &String| println!("  checking {s:?}"))),
        not_empty,
        not_too_long,
        parse,
    );

    for input in ["", "123456", "1234", "abc"] {
        match validate(input.to_string()) {
            Outcome::Success(value) => println!("  ok: {value}"),
            Outcome::Failure(error) => println!("  rejected: {error}"),
        }
    }

    println!("\n=== Example Complete ===");
}
