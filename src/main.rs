//! Train Delay Predictor
//!
//! Browser front end for the Train Delay Predictor, built with Leptos (WASM).
//!
//! # Features
//!
//! - Login / register with a cookie-based server session
//! - Weather-driven delay prediction form
//! - Per-user prediction history
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All data lives behind a remote HTTP API; every call carries
//! the browser's session cookie.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
