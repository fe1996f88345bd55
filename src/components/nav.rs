//! Navigation Component
//!
//! Header bar with brand, section switches, theme toggle, and session
//! controls. All view-state transitions start here.

use leptos::*;

use crate::api;
use crate::components::scroll::{scroll_to_section_soon, scroll_to_top};
use crate::state::global::AppState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let state_for_home = state.clone();
    let go_home = move |_| {
        state_for_home.go_home();
        scroll_to_top();
    };

    let state_for_theme = state.clone();
    let toggle_theme = move |_| state_for_theme.toggle_theme();

    let state_for_sections = state.clone();
    let state_for_session = state;

    view! {
        <nav class="sticky top-0 z-40 bg-white dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700 shadow-sm">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Brand
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">"🚆"</span>
                        <span class="text-xl font-bold">"Train Delay Predictor"</span>
                    </div>

                    // Navigation buttons
                    <div class="flex items-center space-x-1">
                        <NavButton label="Home" on_click=go_home />

                        // Predict and History only exist for a live session
                        {move || {
                            let state = state_for_sections.clone();
                            if state.session.get().is_authenticated() {
                                let state_predict = state.clone();
                                let open_predict = move |_| {
                                    state_predict.enter_predict_view();
                                    scroll_to_section_soon("predict-section");
                                };

                                let open_history = move |_| {
                                    state.enter_history_view();
                                    scroll_to_section_soon("history-section");

                                    let state = state.clone();
                                    spawn_local(async move {
                                        match api::fetch_history().await {
                                            Ok(rows) => state.history.set(rows),
                                            Err(_) => {
                                                state.show_error("Failed to fetch history.");
                                            }
                                        }
                                    });
                                };

                                view! {
                                    <NavButton label="Predict" on_click=open_predict />
                                    <NavButton label="History" on_click=open_history />
                                }
                                .into_view()
                            } else {
                                view! {}.into_view()
                            }
                        }}

                        <NavButton label="Theme" on_click=toggle_theme />

                        // Session controls
                        {move || {
                            let state = state_for_session.clone();
                            if let Some(name) = state.session.get().username().map(str::to_string) {
                                let handle_logout = move |_| {
                                    let state = state.clone();
                                    spawn_local(async move {
                                        // The local session is cleared whether or not
                                        // the server heard about the logout
                                        if let Err(e) = api::logout().await {
                                            web_sys::console::error_1(
                                                &format!("Logout request failed: {}", e).into(),
                                            );
                                        }
                                        state.clear_session();
                                        state.show_notice("Logged out successfully!");
                                    });
                                };

                                view! {
                                    <span class="px-3 py-2 text-sm text-gray-500 dark:text-gray-400">
                                        "👤 " {name}
                                    </span>
                                    <button
                                        on:click=handle_logout
                                        class="px-4 py-2 rounded-lg text-sm font-medium bg-red-600 hover:bg-red-700 text-white transition-colors"
                                    >
                                        "Logout"
                                    </button>
                                }
                                .into_view()
                            } else {
                                let open_modal = move |_| {
                                    state.show_register.set(false);
                                    state.show_auth_modal.set(true);
                                };

                                view! {
                                    <button
                                        on:click=open_modal
                                        class="px-4 py-2 rounded-lg text-sm font-medium bg-primary-600 hover:bg-primary-700 text-white transition-colors"
                                    >
                                        "Login / Register"
                                    </button>
                                }
                                .into_view()
                            }
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Plain navigation button
#[component]
fn NavButton(
    label: &'static str,
    on_click: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    view! {
        <button
            on:click=on_click
            class="px-4 py-2 rounded-lg text-gray-600 dark:text-gray-300 hover:text-gray-900
                   dark:hover:text-white hover:bg-gray-100 dark:hover:bg-gray-700 transition-colors"
        >
            {label}
        </button>
    }
}
