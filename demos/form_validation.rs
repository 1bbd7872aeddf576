//! Form Validation
//!
//! This example validates independent fields with `plus`, collecting every
//! error instead of stopping at the first one.
//!
//! Run with: cargo run --example form_validation

use railway::prelude::*;

#[derive(Clone, Debug)]
struct Person {
    first_name: String,
    last_name: String,
}

fn first_name_not_blank(person: Person) -> Outcome<Person, String> {
    if person.first_name.trim().is_empty() {
        fail("FirstName cannot be blank".to_string())
    } else {
        succeed(person)
    }
}

fn last_name_not_blank(person: Person) -> Outcome<Person, String> {
    if person.last_name.trim().is_empty() {
        fail("LastName cannot be blank".to_string())
    } else {
        succeed(person)
    }
}

fn main() {
    println!("=== Form Validation Example ===\n");

    let validate = plus(take_last, accumulate).both(first_name_not_blank, last_name_not_blank);

    let people = [("", ""), ("", "last"), ("first", "last")];
    for (first_name, last_name) in people {
        let person = Person {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        };

        let report = validate(person).fold(
            |p| format!("valid: {} {}", p.first_name, p.last_name),
            |errors| format!("invalid: {}", errors.join(", ")),
        );
        println!("  ({first_name:?}, {last_name:?}) -> {report}");
    }

    println!("\n=== Example Complete ===");
}
