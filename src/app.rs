//! App Root Component
//!
//! Top-level layout, the mount-time session probe, and theme mirroring.

use leptos::*;

use crate::api;
use crate::components::{AuthModal, Hero, HistoryTable, Nav, PredictForm, Toast, TrainShowcase};
use crate::state::global::{provide_app_state, AppState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_app_state();

    let state = use_context::<AppState>().expect("AppState not found");

    // Resolve the session once on mount. Failures stay silent: the visitor
    // is simply anonymous. The epoch guard drops the result if the user
    // logged in or out while the probe was in flight.
    let state_for_probe = state.clone();
    create_effect(move |_| {
        let state = state_for_probe.clone();
        spawn_local(async move {
            let epoch = state.session_epoch.get_untracked();
            match api::fetch_profile().await {
                Ok(username) => state.apply_probe(epoch, username),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Profile probe failed: {}", e).into(),
                    );
                    state.apply_probe(epoch, None);
                }
            }
        });
    });

    // Mirror the theme flag onto the document root so the whole page restyles
    let dark_mode = state.dark_mode;
    create_effect(move |_| {
        let class = if dark_mode.get() { "dark" } else { "" };
        if let Some(root) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element())
        {
            root.set_class_name(class);
        }
    });

    let session = state.session;
    let show_predict = state.show_predict;
    let show_history = state.show_history;
    let show_auth_modal = state.show_auth_modal;

    view! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 text-gray-900 dark:text-white flex flex-col">
            // Navigation header
            <Nav />

            <main class="flex-1">
                <Hero />
                <TrainShowcase />

                // Prediction section, for a live session only
                {move || {
                    (session.get().is_authenticated() && show_predict.get())
                        .then(|| view! { <PredictForm /> })
                }}

                // History section, for a live session only
                {move || {
                    (session.get().is_authenticated() && show_history.get())
                        .then(|| view! { <HistoryTable /> })
                }}

                <ContactSection />
            </main>

            <Footer />

            // Login/register modal
            {move || show_auth_modal.get().then(|| view! { <AuthModal /> })}

            // Toast notifications
            <Toast />
        </div>
    }
}

/// Contact section, presentational only
#[component]
fn ContactSection() -> impl IntoView {
    view! {
        <section class="container mx-auto px-4 py-16">
            <div class="bg-white dark:bg-gray-800 rounded-xl p-6 max-w-2xl mx-auto shadow
                        border border-gray-200 dark:border-gray-700 text-center">
                <h2 class="text-2xl font-bold mb-2">"📬 Contact Us"</h2>
                <p class="text-gray-500 dark:text-gray-400 mb-6">
                    "Have questions or suggestions? We'd love to hear from you!"
                </p>

                <form class="space-y-4 text-left">
                    <input
                        type="text"
                        placeholder="Your Name"
                        required=true
                        class="w-full bg-gray-100 dark:bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-300 dark:border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <input
                        type="email"
                        placeholder="Your Email"
                        required=true
                        class="w-full bg-gray-100 dark:bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-300 dark:border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <textarea
                        placeholder="Your Message"
                        rows="4"
                        required=true
                        class="w-full bg-gray-100 dark:bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-300 dark:border-gray-600 focus:border-primary-500 focus:outline-none"
                    ></textarea>
                    <button
                        type="submit"
                        class="w-full bg-primary-600 hover:bg-primary-700 text-white
                               rounded-lg py-3 font-semibold transition-colors"
                    >
                        "Send Message"
                    </button>
                </form>
            </div>
        </section>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-white dark:bg-gray-800 border-t border-gray-200 dark:border-gray-700 py-4">
            <p class="text-center text-sm text-gray-500 dark:text-gray-400">
                "© 2025 Train Delay Predictor | All Rights Reserved"
            </p>
        </footer>
    }
}
