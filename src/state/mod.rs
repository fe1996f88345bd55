//! State Management
//!
//! Session lifecycle and the injectable global application state.

pub mod global;
pub mod session;

pub use global::{provide_app_state, AppState, PredictionRecord, PredictionRequest};
pub use session::Session;
