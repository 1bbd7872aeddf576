//! End-to-end validation scenarios built from the public API.

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

#[derive(Clone, Debug, PartialEq)]
struct Person {
    first_name: String,
    last_name: String,
}

impl Person {
    fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }
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

#[test]
fn validation_chain_stops_at_first_failure() {
    let validate = compose_switch(not_empty, not_too_long);

    assert_eq!(validate(String::new()), Outcome::Failure("empty".to_string()));
    assert_eq!(validate("123456".to_string()), Outcome::Failure("long".to_string()));
    assert_eq!(validate("1234".to_string()), Outcome::Success("1234".to_string()));
}

#[test]
fn validation_chain_via_macro_and_pipe() {
    let validate = kleisli!(not_empty, not_too_long);

    let piped = pipe_switch(succeed("abc".to_string()), validate);

    assert_eq!(piped, Outcome::Success("abc".to_string()));
}

#[test]
fn plus_accumulates_field_errors() {
    let validate = plus(take_last, accumulate).both(first_name_not_blank, last_name_not_blank);

    assert_eq!(
        validate(Person::new("", "")),
        Outcome::Failure(vec![
            "FirstName cannot be blank".to_string(),
            "LastName cannot be blank".to_string(),
        ])
    );
    assert_eq!(
        validate(Person::new("", "last")),
        Outcome::Failure(vec!["FirstName cannot be blank".to_string()])
    );
    assert_eq!(
        validate(Person::new("first", "last")),
        Outcome::Success(Person::new("first", "last"))
    );
}

#[test]
fn double_map_uppercases_or_reports_condition() {
    let remap = double_map(
        |s: String| s.to_uppercase(),
        |c: RaisedCondition| c.message().to_string(),
    );

    assert_eq!(remap(succeed("abc".to_string())), Outcome::Success("ABC".to_string()));

    let condition = RaisedCondition::Message("disk on fire".to_string());
    assert_eq!(remap(fail(condition)), Outcome::Failure("disk on fire".to_string()));
}

#[test]
fn try_catch_feeds_double_map() {
    let risky = try_catch(
        |s: String| {
            if s == "boom" {
                panic!("exploded on {s}");
            }
            s
        },
        |c| c,
    );
    let pipeline = compose(
        risky,
        double_map(|s: String| s.to_uppercase(), |c: RaisedCondition| c.to_string()),
    );

    assert_eq!(pipeline("ok".to_string()), Outcome::Success("OK".to_string()));
    assert_eq!(
        pipeline("boom".to_string()),
        Outcome::Failure("exploded on boom".to_string())
    );
}

#[test]
fn tee_logs_inside_a_chain() {
    let log = std::cell::RefCell::new(Vec::new());
    let pipeline = compose_switch(
        switch(tee(|s: &String| log.borrow_mut().push(s.clone()))),
        not_too_long,
    );

    assert_eq!(pipeline("hi".to_string()), Outcome::Success("hi".to_string()));
    assert_eq!(pipeline("toolong".to_string()), Outcome::Failure("long".to_string()));
    assert_eq!(*log.borrow(), vec!["hi".to_string(), "toolong".to_string()]);
}

#[test]
fn failure_track_bypasses_later_steps() {
    let calls = std::cell::Cell::new(0);
    let counting = |s: String| {
        calls.set(calls.get() + 1);
        succeed::<String, String>(s)
    };

    let chain = kleisli!(not_empty, counting, map_to_len);

    assert_eq!(chain(String::new()), Outcome::Failure("empty".to_string()));
    assert_eq!(calls.get(), 0);
    assert_eq!(chain("four".to_string()), Outcome::Success(4));
    assert_eq!(calls.get(), 1);
}

fn map_to_len(s: String) -> Outcome<usize, String> {
    succeed(s.len())
}

#[test]
fn outcomes_interoperate_with_question_mark() {
    fn run(input: &str) -> Result<usize, String> {
        let checked = not_empty(input.to_string()).into_result()?;
        Ok(checked.len())
    }

    assert_eq!(run("abc"), Ok(3));
    assert_eq!(run(""), Err("empty".to_string()));
}
