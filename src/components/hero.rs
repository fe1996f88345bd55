//! Hero & Showcase
//!
//! Landing sections: the hero banner with the call-to-action and the static
//! train showcase cards.

use leptos::*;

use crate::state::global::AppState;

/// Hero banner; the call-to-action only shows for anonymous visitors
#[component]
pub fn Hero() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let session = state.session;

    let open_modal = move |_| {
        state.show_register.set(false);
        state.show_auth_modal.set(true);
    };

    view! {
        <section class="bg-gradient-to-b from-primary-600 to-primary-800 text-white">
            <div class="container mx-auto px-4 py-24 text-center">
                <h1 class="text-4xl md:text-5xl font-bold mb-4">
                    "Predict Train Delays with Ease"
                </h1>
                <p class="text-lg text-primary-100 mb-8">
                    "Stay ahead of schedule with AI-powered predictions"
                </p>

                {move || {
                    if session.get().is_authenticated() {
                        view! {}.into_view()
                    } else {
                        view! {
                            <button
                                on:click=open_modal.clone()
                                class="px-8 py-3 bg-white text-primary-700 hover:bg-primary-50
                                       rounded-lg font-semibold text-lg transition-colors"
                            >
                                "Get Started"
                            </button>
                        }
                        .into_view()
                    }
                }}
            </div>
        </section>
    }
}

/// Static showcase cards
#[component]
pub fn TrainShowcase() -> impl IntoView {
    const TRAINS: [(&str, &str, &str); 4] = [
        ("🚄", "High-Speed", "Experience the future of travel."),
        ("🚆", "Express", "Fast & reliable long-distance service."),
        ("🚈", "Regional", "Comfortable regional journeys."),
        ("🚂", "Freight", "Efficient cargo transport."),
    ];

    view! {
        <section class="container mx-auto px-4 py-16">
            <h2 class="text-2xl font-bold text-center mb-8">"🚄 Explore Our Trains"</h2>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4">
                {TRAINS
                    .into_iter()
                    .map(|(icon, name, description)| view! {
                        <div class="bg-white dark:bg-gray-800 rounded-xl p-6 text-center shadow
                                    border border-gray-200 dark:border-gray-700">
                            <div class="text-4xl mb-3">{icon}</div>
                            <h3 class="font-semibold mb-1">{name}</h3>
                            <p class="text-sm text-gray-500 dark:text-gray-400">{description}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
