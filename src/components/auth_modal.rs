//! Auth Modal
//!
//! Login / register modal. One modal, two forms, switched by a flag; a
//! successful submit authenticates the session and closes the modal.

use leptos::*;

use crate::api;
use crate::components::scroll::scroll_to_top_soon;
use crate::state::global::AppState;

/// Delay before scrolling back to the top after a successful login
const WELCOME_SCROLL_DELAY_MS: u32 = 300;

/// Login / register modal overlay
#[component]
pub fn AuthModal() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let show_register = state.show_register;
    let close = move |_| state.show_auth_modal.set(false);

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-white dark:bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4 shadow-xl">
                <div class="flex justify-end">
                    <button
                        on:click=close
                        class="text-gray-400 hover:text-gray-900 dark:hover:text-white text-xl"
                    >
                        "×"
                    </button>
                </div>

                {move || {
                    if show_register.get() {
                        view! { <RegisterForm /> }.into_view()
                    } else {
                        view! { <LoginForm /> }.into_view()
                    }
                }}

                <p
                    on:click=move |_| show_register.update(|register| *register = !*register)
                    class="mt-4 text-sm text-primary-600 hover:underline cursor-pointer text-center"
                >
                    {move || {
                        if show_register.get() {
                            "Already have an account? Login"
                        } else {
                            "New user? Register"
                        }
                    }}
                </p>
            </div>
        </div>
    }
}

/// Login form: username + password, inline error on rejection
#[component]
fn LoginForm() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let u = username.get();
        let p = password.get();

        set_submitting.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            match api::login(&u, &p).await {
                Ok(confirmed) => {
                    set_error.set(None);
                    state_clone.set_authenticated(confirmed);
                    state_clone.show_success("Welcome!");
                    scroll_to_top_soon(WELCOME_SCROLL_DELAY_MS);
                }
                Err(e) => {
                    set_error.set(Some(e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <h3 class="text-xl font-semibold mb-4">"Login"</h3>

        {move || {
            error.get().map(|message| view! {
                <p class="text-red-500 text-sm mb-3">{message}</p>
            })
        }}

        <form on:submit=on_submit class="space-y-4">
            <input
                type="text"
                placeholder="Username"
                required=true
                prop:value=move || username.get()
                on:input=move |ev| set_username.set(event_target_value(&ev))
                class="w-full bg-gray-100 dark:bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-300 dark:border-gray-600 focus:border-primary-500 focus:outline-none"
            />
            <input
                type="password"
                placeholder="Password"
                required=true
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
                class="w-full bg-gray-100 dark:bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-300 dark:border-gray-600 focus:border-primary-500 focus:outline-none"
            />
            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-400
                       text-white rounded-lg py-3 font-semibold transition-colors"
            >
                {move || if submitting.get() { "Logging in..." } else { "Login" }}
            </button>
        </form>
    }
}

/// Register form: username + email + password, auto-login on HTTP 201
#[component]
fn RegisterForm() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let (username, set_username) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (message, set_message) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let u = username.get();
        let e = email.get();
        let p = password.get();

        set_submitting.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            match api::register(&u, &e, &p).await {
                Ok(registration) => {
                    if let Some(name) = registration.logged_in_as {
                        state_clone.set_authenticated(name);
                        state_clone.show_success("Welcome!");
                        scroll_to_top_soon(WELCOME_SCROLL_DELAY_MS);
                    } else {
                        set_message.set(Some(registration.message));
                    }
                }
                Err(e) => {
                    set_message.set(Some(e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <h3 class="text-xl font-semibold mb-4">"Register"</h3>

        {move || {
            message.get().map(|text| {
                let color = if text.contains("successfully") {
                    "text-green-500 text-sm mb-3"
                } else {
                    "text-red-500 text-sm mb-3"
                };
                view! { <p class=color>{text}</p> }
            })
        }}

        <form on:submit=on_submit class="space-y-4">
            <input
                type="text"
                placeholder="Enter username"
                required=true
                prop:value=move || username.get()
                on:input=move |ev| set_username.set(event_target_value(&ev))
                class="w-full bg-gray-100 dark:bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-300 dark:border-gray-600 focus:border-primary-500 focus:outline-none"
            />
            <input
                type="email"
                placeholder="Enter email"
                required=true
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
                class="w-full bg-gray-100 dark:bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-300 dark:border-gray-600 focus:border-primary-500 focus:outline-none"
            />
            <input
                type="password"
                placeholder="Enter password"
                required=true
                prop:value=move || password.get()
                on:input=move |ev| set_password.set(event_target_value(&ev))
                class="w-full bg-gray-100 dark:bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-300 dark:border-gray-600 focus:border-primary-500 focus:outline-none"
            />
            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-400
                       text-white rounded-lg py-3 font-semibold transition-colors"
            >
                {move || if submitting.get() { "Registering..." } else { "Register" }}
            </button>
        </form>
    }
}
