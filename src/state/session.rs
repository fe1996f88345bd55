//! Session Lifecycle
//!
//! Client-side view of the server session. The session is a tri-state value:
//! `Unknown` until the mount-time profile probe resolves, then `Anonymous` or
//! `Authenticated`. The username only exists in the authenticated variant, so
//! it cannot be observed without a live session.

/// Client-side session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Session {
    /// Profile probe has not resolved yet.
    Unknown,
    /// Checked, no valid server session.
    Anonymous,
    /// Logged in under this username.
    Authenticated { username: String },
}

impl Default for Session {
    fn default() -> Self {
        Session::Unknown
    }
}

impl Session {
    /// Session resulting from a profile probe response.
    ///
    /// Any outcome without a username (rejection, missing field, transport
    /// failure) maps to `Anonymous`; the probe never surfaces an error.
    pub fn from_probe(username: Option<String>) -> Self {
        match username {
            Some(name) => Session::Authenticated { username: name },
            None => Session::Anonymous,
        }
    }

    /// Session after a successful login or register.
    pub fn logged_in(username: String) -> Self {
        Session::Authenticated { username }
    }

    /// Session after logout, regardless of the previous state.
    pub fn logged_out() -> Self {
        Session::Anonymous
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    /// Username of the logged-in user, if any.
    pub fn username(&self) -> Option<&str> {
        match self {
            Session::Authenticated { username } => Some(username),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_with_username_authenticates() {
        let session = Session::from_probe(Some("alice".to_string()));
        assert!(session.is_authenticated());
        assert_eq!(session.username(), Some("alice"));
    }

    #[test]
    fn test_probe_without_username_is_anonymous() {
        let session = Session::from_probe(None);
        assert_eq!(session, Session::Anonymous);
        assert!(!session.is_authenticated());
        assert_eq!(session.username(), None);
    }

    #[test]
    fn test_initial_state_is_unknown() {
        assert_eq!(Session::default(), Session::Unknown);
        assert!(!Session::default().is_authenticated());
    }

    #[test]
    fn test_logout_always_ends_anonymous() {
        assert_eq!(Session::logged_out(), Session::Anonymous);
    }

    #[test]
    fn test_login_sets_username() {
        let session = Session::logged_in("bob".to_string());
        assert_eq!(session.username(), Some("bob"));
    }
}
