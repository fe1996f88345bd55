//! History Table
//!
//! Past predictions of the current user, or a placeholder when there are
//! none yet.

use leptos::*;

use crate::state::global::{AppState, PredictionRecord};

/// History section component
#[component]
pub fn HistoryTable() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let history = state.history;

    view! {
        <section id="history-section" class="container mx-auto px-4 py-12">
            <div class="bg-white dark:bg-gray-800 rounded-xl p-6 max-w-4xl mx-auto shadow-lg">
                <h2 class="text-2xl font-bold mb-6">"Your Prediction History"</h2>

                {move || {
                    let rows = history.get();
                    if rows.is_empty() {
                        view! {
                            <p class="text-gray-500 dark:text-gray-400 py-6 text-center">
                                "No predictions yet."
                            </p>
                        }
                        .into_view()
                    } else {
                        view! {
                            <div class="overflow-x-auto">
                                <table class="w-full text-left">
                                    <thead>
                                        <tr class="border-b border-gray-300 dark:border-gray-600 text-sm uppercase text-gray-500 dark:text-gray-400">
                                            <th class="py-2 pr-4">"Date"</th>
                                            <th class="py-2 pr-4">"Temp"</th>
                                            <th class="py-2 pr-4">"Rain"</th>
                                            <th class="py-2 pr-4">"Fog"</th>
                                            <th class="py-2 pr-4">"Visib."</th>
                                            <th class="py-2 pr-4">"Wind"</th>
                                            <th class="py-2">"Delay"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {rows
                                            .into_iter()
                                            .map(|row| view! { <HistoryRow row=row /> })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        }
                        .into_view()
                    }
                }}
            </div>
        </section>
    }
}

/// Single history row
#[component]
fn HistoryRow(row: PredictionRecord) -> impl IntoView {
    view! {
        <tr class="border-b border-gray-200 dark:border-gray-700 last:border-0">
            <td class="py-2 pr-4">{row.date}</td>
            <td class="py-2 pr-4">{row.temperature}</td>
            <td class="py-2 pr-4">{row.rain}</td>
            <td class="py-2 pr-4">{row.fog}</td>
            <td class="py-2 pr-4">{row.visibility}</td>
            <td class="py-2 pr-4">{row.windspeed}</td>
            <td class="py-2 font-semibold">{row.predicted_delay}</td>
        </tr>
    }
}
