//! The course-registration menu simulator.

use super::{EXIT_WORDS, ReplError, is_exit, read_line};
use retort_core::{HandlerTag, Outcome, Pattern, Registry, RegistryBuilder, RegistryError};
use retort_std::presets::course_menu;
use retort_std::resolve::resolve_code;
use retort_std::session::{RegisterOutcome, Session};
use std::io::{BufRead, Write};
use tracing::debug;

const LOGIN: HandlerTag = HandlerTag("login");
const EXIT: HandlerTag = HandlerTag("exit");
const REGISTER: HandlerTag = HandlerTag("register");
const LOGOUT: HandlerTag = HandlerTag("logout");

/// The two fixed top-level menus, one per login state.
struct Menus {
    logged_out: Registry,
    logged_in: Registry,
}

impl Menus {
    fn build() -> Result<Self, RegistryError> {
        Ok(Self {
            logged_out: RegistryBuilder::new()
                .invoke(Pattern::Code(1), LOGIN)
                .invoke(Pattern::Code(2), EXIT)
                .build()?,
            logged_in: RegistryBuilder::new()
                .invoke(Pattern::Code(1), REGISTER)
                .invoke(Pattern::Code(2), LOGOUT)
                .build()?,
        })
    }
}

/// Drive the menu simulator until exit, logout, or end of input.
///
/// Returns the finished [`Session`] so callers (and tests) can inspect the
/// registered-course set.
pub fn run_menu<R, W, S>(
    mut input: R,
    mut out: W,
    courses: &[S],
) -> Result<Session, ReplError>
where
    R: BufRead,
    W: Write,
    S: AsRef<str>,
{
    let menus = Menus::build()?;
    let picker = course_menu(courses)?;
    let mut session = Session::new();

    loop {
        writeln!(out)?;
        writeln!(out, "===== LMS Menu =====")?;
        let menu = if session.logged_in() {
            writeln!(out, "1. Register a Course")?;
            writeln!(out, "2. Logout")?;
            &menus.logged_in
        } else {
            writeln!(out, "1. Login")?;
            writeln!(out, "2. Exit")?;
            &menus.logged_out
        };
        write!(out, "Select an option: ")?;
        out.flush()?;

        let Some(line) = read_line(&mut input)? else {
            break;
        };
        if is_exit(&line, &EXIT_WORDS) {
            writeln!(out, "Goodbye!")?;
            break;
        }

        let outcome = resolve_code(&line, menu);
        debug!(input = %line, logged_in = session.logged_in(), "menu turn");
        let tag = match outcome {
            Outcome::Matched(rule) => rule.tag(),
            Outcome::InvalidInput => {
                writeln!(out, "Invalid input. Please enter a number.")?;
                continue;
            }
            _ => {
                writeln!(out, "Invalid option. Please choose between 1 and 2.")?;
                continue;
            }
        };

        match tag {
            Some(LOGIN) => {
                write!(out, "Enter your email to login: ")?;
                out.flush()?;
                let Some(email) = read_line(&mut input)? else {
                    break;
                };
                write!(out, "Enter your name: ")?;
                out.flush()?;
                let Some(name) = read_line(&mut input)? else {
                    break;
                };
                session.login(email.trim(), name.trim());
                let name = session.name().unwrap_or_default();
                writeln!(out, "Welcome {name}! You are now logged in.")?;
            }
            Some(EXIT) => {
                writeln!(out, "Goodbye!")?;
                break;
            }
            Some(REGISTER) => {
                register_turn(&mut input, &mut out, courses, &picker, &mut session)?;
            }
            Some(LOGOUT) => {
                writeln!(out, "You have been logged out. Goodbye!")?;
                if session.logout() {
                    break;
                }
            }
            _ => {}
        }
    }
    Ok(session)
}

/// One pass through the course submenu.
fn register_turn<R, W, S>(
    input: &mut R,
    out: &mut W,
    courses: &[S],
    picker: &Registry,
    session: &mut Session,
) -> Result<(), ReplError>
where
    R: BufRead,
    W: Write,
    S: AsRef<str>,
{
    writeln!(out)?;
    writeln!(out, "Available Courses:")?;
    for (index, course) in courses.iter().enumerate() {
        writeln!(out, "{}. {}", index + 1, course.as_ref())?;
    }
    write!(out, "Enter the number of the course you want to register: ")?;
    out.flush()?;

    let Some(line) = read_line(input)? else {
        return Ok(());
    };
    match resolve_code(&line, picker) {
        Outcome::Matched(rule) => {
            let course = rule.reply_text().unwrap_or_default();
            match session.register(course) {
                RegisterOutcome::Registered => {
                    writeln!(out)?;
                    writeln!(
                        out,
                        "Thank you! You have successfully registered for '{course}'."
                    )?;
                }
                RegisterOutcome::AlreadyRegistered => {
                    writeln!(out)?;
                    writeln!(out, "You have already registered for this course.")?;
                }
                RegisterOutcome::NotLoggedIn => {
                    writeln!(out, "Please log in before registering.")?;
                }
            }
        }
        Outcome::InvalidInput => writeln!(out, "Please enter a valid number.")?,
        _ => writeln!(out, "Invalid course number selected.")?,
    }
    Ok(())
}
