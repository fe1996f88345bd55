//! Global Application State
//!
//! Reactive state management using Leptos signals. All mutable client state
//! lives in one injectable [`AppState`]; components receive it through
//! context and never hold ambient globals.

use leptos::*;

use crate::state::session::Session;

/// Global application state provided to all components
#[derive(Clone)]
pub struct AppState {
    /// Current session, owned exclusively by the session methods below
    pub session: RwSignal<Session>,
    /// Bumped on every explicit session transition; stale probe results
    /// from before the bump are discarded
    pub session_epoch: RwSignal<u32>,
    /// Show the prediction section
    pub show_predict: RwSignal<bool>,
    /// Show the history section
    pub show_history: RwSignal<bool>,
    /// Show the login/register modal
    pub show_auth_modal: RwSignal<bool>,
    /// Register form instead of login form inside the modal
    pub show_register: RwSignal<bool>,
    /// Dark theme flag, independent of auth state
    pub dark_mode: RwSignal<bool>,
    /// Last predicted delay in minutes
    pub result: RwSignal<Option<f64>>,
    /// Prediction history rows, newest first (server order)
    pub history: RwSignal<Vec<PredictionRecord>>,
    /// Error message (for toasts)
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Neutral info message (for toasts)
    pub notice: RwSignal<Option<String>>,
}

/// One prediction request as submitted to the API
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PredictionRequest {
    pub date: String,
    pub temperature: f64,
    pub rain: u8,
    pub fog: u8,
    pub visibility: f64,
    pub windspeed: f64,
}

/// One row of the per-user prediction history
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct PredictionRecord {
    pub date: String,
    pub temperature: f64,
    pub rain: u8,
    pub fog: u8,
    pub visibility: f64,
    pub windspeed: f64,
    pub predicted_delay: f64,
}

/// Provide global state to the component tree
pub fn provide_app_state() {
    provide_context(AppState::new());
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            session: create_rw_signal(Session::Unknown),
            session_epoch: create_rw_signal(0),
            show_predict: create_rw_signal(false),
            show_history: create_rw_signal(false),
            show_auth_modal: create_rw_signal(false),
            show_register: create_rw_signal(false),
            dark_mode: create_rw_signal(false),
            result: create_rw_signal(None),
            history: create_rw_signal(Vec::new()),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
            notice: create_rw_signal(None),
        }
    }

    // ============ Session coordinator ============

    /// Apply a profile probe result, unless the session moved on while the
    /// probe was in flight.
    pub fn apply_probe(&self, epoch_at_start: u32, username: Option<String>) {
        if self.session_epoch.get_untracked() == epoch_at_start {
            self.session.set(Session::from_probe(username));
        }
    }

    /// Successful login or register: adopt the server-returned username and
    /// close the auth modal.
    pub fn set_authenticated(&self, username: String) {
        self.session.set(Session::logged_in(username));
        self.session_epoch.update(|e| *e += 1);
        self.show_auth_modal.set(false);
    }

    /// Logout: clear the session and everything derived from it. Runs
    /// unconditionally, whether or not the logout call reached the server.
    pub fn clear_session(&self) {
        self.session.set(Session::logged_out());
        self.session_epoch.update(|e| *e += 1);
        self.result.set(None);
        self.history.set(Vec::new());
        self.show_predict.set(false);
        self.show_history.set(false);
    }

    // ============ View-state controller ============

    /// Home: hide both sections
    pub fn go_home(&self) {
        self.show_predict.set(false);
        self.show_history.set(false);
    }

    /// Predict: show the form, hide history, drop any previous result
    pub fn enter_predict_view(&self) {
        self.show_predict.set(true);
        self.show_history.set(false);
        self.result.set(None);
    }

    /// History: show the table, hide the form
    pub fn enter_history_view(&self) {
        self.show_history.set(true);
        self.show_predict.set(false);
    }

    pub fn toggle_theme(&self) {
        self.dark_mode.update(|dark| *dark = !*dark);
    }

    // ============ Notifications ============

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    /// Show an info message (auto-clears after timeout)
    pub fn show_notice(&self, message: &str) {
        self.notice.set(Some(message.to_string()));

        let notice_signal = self.notice;
        gloo_timers::callback::Timeout::new(3000, move || {
            notice_signal.set(None);
        })
        .forget();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_runtime(f: impl FnOnce()) {
        let runtime = create_runtime();
        f();
        runtime.dispose();
    }

    #[test]
    fn test_login_authenticates_and_closes_modal() {
        with_runtime(|| {
            let state = AppState::new();
            state.show_auth_modal.set(true);

            state.set_authenticated("alice".to_string());

            assert!(state.session.get_untracked().is_authenticated());
            assert_eq!(
                state.session.get_untracked().username(),
                Some("alice")
            );
            assert!(!state.show_auth_modal.get_untracked());
        });
    }

    #[test]
    fn test_logout_clears_dependent_state() {
        with_runtime(|| {
            let state = AppState::new();
            state.set_authenticated("alice".to_string());
            state.result.set(Some(12.0));
            state.history.set(vec![PredictionRecord {
                date: "2025-01-01".to_string(),
                temperature: 4.0,
                rain: 1,
                fog: 0,
                visibility: 800.0,
                windspeed: 30.0,
                predicted_delay: 12.0,
            }]);
            state.show_predict.set(true);
            state.show_history.set(true);

            state.clear_session();

            assert_eq!(state.session.get_untracked(), Session::Anonymous);
            assert_eq!(state.session.get_untracked().username(), None);
            assert_eq!(state.result.get_untracked(), None);
            assert!(state.history.get_untracked().is_empty());
            assert!(!state.show_predict.get_untracked());
            assert!(!state.show_history.get_untracked());
        });
    }

    #[test]
    fn test_stale_probe_result_is_discarded() {
        with_runtime(|| {
            let state = AppState::new();
            let epoch = state.session_epoch.get_untracked();

            // User logs out while the probe is still in flight
            state.clear_session();
            state.apply_probe(epoch, Some("alice".to_string()));

            assert_eq!(state.session.get_untracked(), Session::Anonymous);
        });
    }

    #[test]
    fn test_fresh_probe_result_is_applied() {
        with_runtime(|| {
            let state = AppState::new();
            let epoch = state.session_epoch.get_untracked();

            state.apply_probe(epoch, Some("alice".to_string()));
            assert_eq!(
                state.session.get_untracked().username(),
                Some("alice")
            );
        });
    }

    #[test]
    fn test_probe_without_username_stays_anonymous() {
        with_runtime(|| {
            let state = AppState::new();
            let epoch = state.session_epoch.get_untracked();

            state.apply_probe(epoch, None);

            assert_eq!(state.session.get_untracked(), Session::Anonymous);
        });
    }

    #[test]
    fn test_predict_view_drops_previous_result() {
        with_runtime(|| {
            let state = AppState::new();
            state.result.set(Some(7.5));
            state.show_history.set(true);

            state.enter_predict_view();

            assert!(state.show_predict.get_untracked());
            assert!(!state.show_history.get_untracked());
            assert_eq!(state.result.get_untracked(), None);
        });
    }

    #[test]
    fn test_sections_are_mutually_exclusive() {
        with_runtime(|| {
            let state = AppState::new();

            state.enter_predict_view();
            state.enter_history_view();
            assert!(!state.show_predict.get_untracked());
            assert!(state.show_history.get_untracked());

            state.go_home();
            assert!(!state.show_predict.get_untracked());
            assert!(!state.show_history.get_untracked());
        });
    }

    #[test]
    fn test_theme_toggle_is_independent_of_auth() {
        with_runtime(|| {
            let state = AppState::new();
            assert!(!state.dark_mode.get_untracked());

            state.toggle_theme();
            assert!(state.dark_mode.get_untracked());
            assert_eq!(state.session.get_untracked(), Session::Unknown);

            state.toggle_theme();
            assert!(!state.dark_mode.get_untracked());
        });
    }
}
