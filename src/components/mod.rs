//! UI Components
//!
//! Leptos components for the single page.

pub mod auth_modal;
pub mod hero;
pub mod history_table;
pub mod nav;
pub mod predict_form;
pub mod scroll;
pub mod toast;

pub use auth_modal::AuthModal;
pub use hero::{Hero, TrainShowcase};
pub use history_table::HistoryTable;
pub use nav::Nav;
pub use predict_form::PredictForm;
pub use toast::Toast;
