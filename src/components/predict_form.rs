//! Prediction Form
//!
//! Weather inputs for a delay prediction, plus the result "ticket".
//! Fields are collected as strings and parsed once, on submit.

use leptos::*;

use crate::api;
use crate::state::global::{AppState, PredictionRequest};

/// Prediction section with the input form and result badge
#[component]
pub fn PredictForm() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");

    let (date, set_date) = create_signal(String::new());
    let (temperature, set_temperature) = create_signal(String::new());
    let (rain, set_rain) = create_signal("0".to_string());
    let (fog, set_fog) = create_signal("0".to_string());
    let (visibility, set_visibility) = create_signal(String::new());
    let (windspeed, set_windspeed) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let result = state.result;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let request = match build_request(
            &date.get(),
            &temperature.get(),
            &rain.get(),
            &fog.get(),
            &visibility.get(),
            &windspeed.get(),
        ) {
            Ok(request) => request,
            Err(e) => {
                state.show_error(&e);
                return;
            }
        };

        set_submitting.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            match api::predict(&request).await {
                Ok(delay) => {
                    state_clone.result.set(Some(delay));
                    state_clone
                        .show_success(&format!("Predicted Delay: {}", format_delay(delay)));
                }
                Err(_) => {
                    state_clone.show_error("Prediction failed!");
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section id="predict-section" class="container mx-auto px-4 py-12">
            <div class="bg-white dark:bg-gray-800 rounded-xl p-6 max-w-2xl mx-auto shadow-lg">
                <h2 class="text-2xl font-bold mb-6">"Train Delay Prediction"</h2>

                <form on:submit=on_submit class="space-y-4">
                    <FieldRow icon="📅">
                        <input
                            type="date"
                            required=true
                            prop:value=move || date.get()
                            on:input=move |ev| set_date.set(event_target_value(&ev))
                            class="w-full bg-gray-100 dark:bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-300 dark:border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </FieldRow>
                    <FieldRow icon="🌡️">
                        <input
                            type="number"
                            step="any"
                            placeholder="Temperature (°C)"
                            required=true
                            prop:value=move || temperature.get()
                            on:input=move |ev| set_temperature.set(event_target_value(&ev))
                            class="w-full bg-gray-100 dark:bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-300 dark:border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </FieldRow>
                    <FieldRow icon="🌧️">
                        <input
                            type="number"
                            min="0"
                            max="1"
                            placeholder="Rain (0 or 1)"
                            required=true
                            prop:value=move || rain.get()
                            on:input=move |ev| set_rain.set(event_target_value(&ev))
                            class="w-full bg-gray-100 dark:bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-300 dark:border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </FieldRow>
                    <FieldRow icon="🌫️">
                        <input
                            type="number"
                            min="0"
                            max="1"
                            placeholder="Fog (0 or 1)"
                            required=true
                            prop:value=move || fog.get()
                            on:input=move |ev| set_fog.set(event_target_value(&ev))
                            class="w-full bg-gray-100 dark:bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-300 dark:border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </FieldRow>
                    <FieldRow icon="👁️">
                        <input
                            type="number"
                            step="any"
                            placeholder="Visibility (m)"
                            required=true
                            prop:value=move || visibility.get()
                            on:input=move |ev| set_visibility.set(event_target_value(&ev))
                            class="w-full bg-gray-100 dark:bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-300 dark:border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </FieldRow>
                    <FieldRow icon="💨">
                        <input
                            type="number"
                            step="any"
                            placeholder="Wind Speed (km/h)"
                            required=true
                            prop:value=move || windspeed.get()
                            on:input=move |ev| set_windspeed.set(event_target_value(&ev))
                            class="w-full bg-gray-100 dark:bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-300 dark:border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </FieldRow>

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-400
                               text-white rounded-lg py-3 font-semibold transition-colors"
                    >
                        {move || if submitting.get() { "Predicting..." } else { "🚆 Predict Delay" }}
                    </button>
                </form>

                // Result ticket
                {move || {
                    result.get().map(|delay| view! {
                        <div class="ticket-result mt-6 text-center text-lg rounded-lg
                                    bg-primary-600/10 border border-primary-600 px-4 py-3">
                            "🎟️ Predicted Delay: "
                            <span class="font-bold">{format_delay(delay)}</span>
                        </div>
                    })
                }}
            </div>
        </section>
    }
}

/// Input with a leading emoji icon
#[component]
fn FieldRow(icon: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-3">
            <span class="text-xl w-8 text-center">{icon}</span>
            {children()}
        </div>
    }
}

/// Assemble the request from the raw form fields
fn build_request(
    date: &str,
    temperature: &str,
    rain: &str,
    fog: &str,
    visibility: &str,
    windspeed: &str,
) -> Result<PredictionRequest, String> {
    if date.is_empty() {
        return Err("Please pick a date".to_string());
    }

    Ok(PredictionRequest {
        date: date.to_string(),
        temperature: parse_number(temperature, "temperature")?,
        rain: parse_flag(rain, "rain")?,
        fog: parse_flag(fog, "fog")?,
        visibility: parse_number(visibility, "visibility")?,
        windspeed: parse_number(windspeed, "windspeed")?,
    })
}

fn parse_number(value: &str, field: &str) -> Result<f64, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("Enter a number for {}", field))
}

fn parse_flag(value: &str, field: &str) -> Result<u8, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("Enter 0 or 1 for {}", field))
}

/// Render a delay for display: integral values stay bare ("12 min")
fn format_delay(delay: f64) -> String {
    format!("{} min", delay)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_request_round_trips_fields() {
        let request =
            build_request("2025-03-14", "-2.5", "1", "0", "650", "42.5").unwrap();

        assert_eq!(
            request,
            PredictionRequest {
                date: "2025-03-14".to_string(),
                temperature: -2.5,
                rain: 1,
                fog: 0,
                visibility: 650.0,
                windspeed: 42.5,
            }
        );
    }

    #[test]
    fn test_build_request_rejects_non_numeric_field() {
        let err = build_request("2025-03-14", "cold", "0", "0", "650", "42")
            .unwrap_err();
        assert_eq!(err, "Enter a number for temperature");

        let err = build_request("2025-03-14", "4", "yes", "0", "650", "42")
            .unwrap_err();
        assert_eq!(err, "Enter 0 or 1 for rain");
    }

    #[test]
    fn test_build_request_requires_date() {
        assert!(build_request("", "4", "0", "0", "650", "42").is_err());
    }

    #[test]
    fn test_format_delay() {
        assert_eq!(format_delay(12.0), "12 min");
        assert_eq!(format_delay(7.5), "7.5 min");
    }
}
