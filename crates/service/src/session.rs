use models::user::{Role, User};
use tracing::info;

/// Visible-state tier derived from the last successful login.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Anonymous,
    StandardUser,
    Administrator,
}

/// Result of a login attempt. A credential mismatch is the normal
/// no-transition branch, not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Granted(SessionState),
    Rejected { hint: &'static str },
}

/// Retry prompt shown on mismatch, kept from the source behavior.
pub const RETRY_HINT: &str =
    "Invalid credentials. Try username: admin, password: admin123";

/// Presentation-layer gate deciding which views are shown.
///
/// Login compares the submitted pair against the loaded user list with
/// plain case-sensitive string equality. This is NOT a security
/// mechanism: there is no hashing, no session token, and nothing here
/// protects the data. Real authentication and authorization require a
/// trusted backend and are out of scope for this application.
#[derive(Debug)]
pub struct SessionGate {
    users: Vec<User>,
    state: SessionState,
}

impl SessionGate {
    pub fn new(users: Vec<User>) -> Self {
        Self { users, state: SessionState::Anonymous }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_logged_in(&self) -> bool {
        self.state != SessionState::Anonymous
    }

    pub fn is_admin(&self) -> bool {
        self.state == SessionState::Administrator
    }

    /// Transition out of the current state only on an exact match; the
    /// matched user's role picks the destination.
    pub fn login(&mut self, username: &str, password: &str) -> LoginOutcome {
        let matched = self
            .users
            .iter()
            .find(|u| u.username == username && u.password == password);
        match matched {
            Some(user) => {
                self.state = match user.role {
                    Role::Administrator => SessionState::Administrator,
                    Role::Standard => SessionState::StandardUser,
                };
                info!(username = %user.username, role = ?user.role, "login_granted");
                LoginOutcome::Granted(self.state)
            }
            None => {
                info!(username, "login_rejected");
                LoginOutcome::Rejected { hint: RETRY_HINT }
            }
        }
    }

    pub fn logout(&mut self) {
        if self.is_logged_in() {
            info!("logout");
        }
        self.state = SessionState::Anonymous;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Vec<User> {
        vec![
            User {
                username: "admin".into(),
                password: "admin123".into(),
                role: Role::Administrator,
            },
            User {
                username: "ana".into(),
                password: "secret".into(),
                role: Role::Standard,
            },
        ]
    }

    #[test]
    fn admin_credentials_grant_administrator() {
        let mut gate = SessionGate::new(users());
        let outcome = gate.login("admin", "admin123");
        assert_eq!(outcome, LoginOutcome::Granted(SessionState::Administrator));
        assert!(gate.is_admin());
    }

    #[test]
    fn standard_user_gets_standard_state() {
        let mut gate = SessionGate::new(users());
        gate.login("ana", "secret");
        assert_eq!(gate.state(), SessionState::StandardUser);
        assert!(gate.is_logged_in());
        assert!(!gate.is_admin());
    }

    #[test]
    fn wrong_password_means_no_transition() {
        let mut gate = SessionGate::new(users());
        let outcome = gate.login("admin", "wrong");
        assert!(matches!(outcome, LoginOutcome::Rejected { .. }));
        assert_eq!(gate.state(), SessionState::Anonymous);
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let mut gate = SessionGate::new(users());
        assert!(matches!(gate.login("Admin", "admin123"), LoginOutcome::Rejected { .. }));
        assert!(matches!(gate.login("admin", "Admin123"), LoginOutcome::Rejected { .. }));
    }

    #[test]
    fn logout_returns_to_anonymous() {
        let mut gate = SessionGate::new(users());
        gate.login("admin", "admin123");
        gate.logout();
        assert_eq!(gate.state(), SessionState::Anonymous);
    }

    #[test]
    fn empty_user_list_rejects_everyone() {
        let mut gate = SessionGate::new(Vec::new());
        assert!(matches!(gate.login("admin", "admin123"), LoginOutcome::Rejected { .. }));
    }
}
