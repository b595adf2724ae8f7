//! Full menu-simulator sessions over scripted input.

mod common;

use common::{script, transcript};
use retort::repl::run_menu;

const COURSES: [&str; 2] = ["Mathematics", "Physics"];

#[test]
fn login_register_logout_happy_path() {
    let input = script(&[
        "1",               // login
        "ada@example.com", // email
        "Ada",             // name
        "1",               // register a course
        "1",               // Mathematics
        "2",               // logout
    ]);
    let mut out = Vec::new();

    let session = run_menu(input, &mut out, &COURSES).unwrap();
    let output = transcript(out);

    assert!(output.contains("Welcome Ada! You are now logged in."));
    assert!(output.contains("Thank you! You have successfully registered for 'Mathematics'."));
    assert!(output.contains("You have been logged out. Goodbye!"));
    assert_eq!(session.registered(), ["Mathematics"]);
    assert!(!session.logged_in());
}

#[test]
fn second_registration_of_the_same_course_is_rejected() {
    let input = script(&[
        "1", "ada@example.com", "Ada",
        "1", "1", // register Mathematics
        "1", "1", // register Mathematics again
        "2",
    ]);
    let mut out = Vec::new();

    let session = run_menu(input, &mut out, &COURSES).unwrap();
    let output = transcript(out);

    assert!(output.contains("You have already registered for this course."));
    assert_eq!(session.registered().len(), 1);
}

#[test]
fn bad_menu_and_course_choices_re_prompt() {
    let input = script(&[
        "x",   // not a number
        "7",   // out of menu range
        "-1",  // numeric, still out of range
        "1", "ada@example.com", "Ada",
        "1", "three", // course choice not a number
        "1", "3",     // course choice out of range
        "2",
    ]);
    let mut out = Vec::new();

    let session = run_menu(input, &mut out, &COURSES).unwrap();
    let output = transcript(out);

    assert_eq!(
        output.matches("Invalid input. Please enter a number.").count(),
        1
    );
    assert_eq!(
        output
            .matches("Invalid option. Please choose between 1 and 2.")
            .count(),
        2
    );
    assert!(output.contains("Please enter a valid number."));
    assert!(output.contains("Invalid course number selected."));
    assert!(session.registered().is_empty());
}

#[test]
fn exit_option_and_exit_keyword_both_end_the_loop() {
    let mut out = Vec::new();
    run_menu(script(&["2"]), &mut out, &COURSES).unwrap();
    assert!(transcript(out).contains("Goodbye!"));

    let mut out = Vec::new();
    run_menu(script(&["QUIT"]), &mut out, &COURSES).unwrap();
    assert!(transcript(out).contains("Goodbye!"));
}

#[test]
fn end_of_input_ends_the_loop_gracefully() {
    let mut out = Vec::new();
    let session = run_menu(script(&[]), &mut out, &COURSES);
    assert!(session.is_ok());
}
