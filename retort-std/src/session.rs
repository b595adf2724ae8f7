//! The menu simulator's per-run session.
//!
//! Two states, `LoggedOut` and `LoggedIn`; login and logout move between
//! them and course registration is a self-loop on `LoggedIn`. A session is
//! created at loop entry and discarded at exit; nothing persists across
//! runs.

/// Login state of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginState {
    /// No student is logged in. The initial state.
    LoggedOut,
    /// A student is logged in.
    LoggedIn {
        /// Login email.
        email: String,
        /// Display name.
        name: String,
    },
}

/// Result of a course registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    /// The course was added to the registered set.
    Registered,
    /// The course was already in the set; the set is unchanged.
    AlreadyRegistered,
    /// Registration requires being logged in.
    NotLoggedIn,
}

/// Per-run mutable state for the menu simulator.
///
/// The dispatcher never touches a session; the caller mutates it in
/// response to resolved menu choices.
pub struct Session {
    state: LoginState,
    registered: Vec<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A fresh session in the `LoggedOut` state with no registrations.
    pub fn new() -> Self {
        Self {
            state: LoginState::LoggedOut,
            registered: Vec::new(),
        }
    }

    /// Current login state.
    pub fn state(&self) -> &LoginState {
        &self.state
    }

    /// Whether a student is logged in.
    pub fn logged_in(&self) -> bool {
        matches!(self.state, LoginState::LoggedIn { .. })
    }

    /// The logged-in student's display name, if any.
    pub fn name(&self) -> Option<&str> {
        match &self.state {
            LoginState::LoggedIn { name, .. } => Some(name),
            LoginState::LoggedOut => None,
        }
    }

    /// Transition to `LoggedIn` with the given credentials.
    pub fn login(&mut self, email: impl Into<String>, name: impl Into<String>) {
        self.state = LoginState::LoggedIn {
            email: email.into(),
            name: name.into(),
        };
    }

    /// Transition to `LoggedOut`.
    ///
    /// Returns `true` as a terminate-session signal to the caller; ending
    /// the loop (or the process) is the caller's decision, not this
    /// machine's.
    pub fn logout(&mut self) -> bool {
        self.state = LoginState::LoggedOut;
        true
    }

    /// Register a course, preserving the no-duplicates invariant.
    pub fn register(&mut self, course: &str) -> RegisterOutcome {
        if !self.logged_in() {
            return RegisterOutcome::NotLoggedIn;
        }
        if self.registered.iter().any(|c| c == course) {
            return RegisterOutcome::AlreadyRegistered;
        }
        self.registered.push(course.to_string());
        RegisterOutcome::Registered
    }

    /// Registered courses in registration order.
    pub fn registered(&self) -> &[String] {
        &self.registered
    }
}

#[cfg(test)]
mod tests {
    use super::{LoginState, RegisterOutcome, Session};

    #[test]
    fn starts_logged_out_and_empty() {
        let session = Session::new();
        assert_eq!(*session.state(), LoginState::LoggedOut);
        assert!(session.registered().is_empty());
    }

    #[test]
    fn login_then_logout_round_trip() {
        let mut session = Session::new();
        session.login("ada@example.com", "Ada");
        assert!(session.logged_in());
        assert_eq!(session.name(), Some("Ada"));

        assert!(session.logout());
        assert!(!session.logged_in());
    }

    #[test]
    fn duplicate_registration_leaves_the_set_unchanged() {
        let mut session = Session::new();
        session.login("ada@example.com", "Ada");

        assert_eq!(session.register("Mathematics"), RegisterOutcome::Registered);
        assert_eq!(
            session.register("Mathematics"),
            RegisterOutcome::AlreadyRegistered
        );
        assert_eq!(session.registered(), ["Mathematics"]);
    }

    #[test]
    fn registration_requires_login() {
        let mut session = Session::new();
        assert_eq!(session.register("Physics"), RegisterOutcome::NotLoggedIn);
        assert!(session.registered().is_empty());
    }

    #[test]
    fn registrations_survive_logout_within_the_run() {
        let mut session = Session::new();
        session.login("ada@example.com", "Ada");
        session.register("Physics");
        session.logout();
        // The set belongs to the run, not the login.
        assert_eq!(session.registered(), ["Physics"]);
    }
}
