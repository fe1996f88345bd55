//! HTTP API Client
//!
//! Functions for communicating with the Train Delay Predictor REST API.
//! Every request is credentialed so the server session cookie rides along.

use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::state::global::{PredictionRecord, PredictionRequest};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// localStorage key holding an operator-set base URL override
const API_URL_STORAGE_KEY: &str = "traindelay_api_url";

/// Get the API base URL from local storage or use default.
///
/// Every endpoint goes through this single base; nothing is hardcoded
/// per-call.
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_URL_STORAGE_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    normalize_base(&url)
}

/// Normalize a base URL: remove trailing slashes
fn normalize_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
struct ProfileResponse {
    #[serde(default)]
    username: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct AuthResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    username: Option<String>,
}

#[derive(Debug, serde::Deserialize)]
struct PredictResponse {
    predicted_delay: f64,
}

/// Rejection body: auth routes answer `{message}`, predict/history `{error}`
#[derive(Debug, Default, serde::Deserialize)]
struct ApiRejection {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ApiRejection {
    fn into_message(self, fallback: &str) -> String {
        self.message
            .or(self.error)
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Outcome of a successful registration
#[derive(Debug)]
pub struct Registration {
    pub message: String,
    /// Username to adopt when the server opened a session (HTTP 201)
    pub logged_in_as: Option<String>,
}

// ============ API Functions ============

/// Probe the current session.
///
/// Returns the session username if the cookie is valid. An HTTP rejection
/// (typically 401 for "not logged in") is not an error here, just `None`.
pub async fn fetch_profile() -> Result<Option<String>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/profile", api_base))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Ok(None);
    }

    let profile: ProfileResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(profile.username)
}

/// Log in and return the server-confirmed username
pub async fn login(username: &str, password: &str) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct LoginRequest {
        username: String,
        password: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/login", api_base))
        .credentials(RequestCredentials::Include)
        .json(&LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let rejection: ApiRejection = response.json().await.unwrap_or_default();
        return Err(rejection.into_message("Invalid username or password"));
    }

    let body: AuthResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    body.username
        .ok_or_else(|| "Malformed login response".to_string())
}

/// Register a new account.
///
/// The server opens a session right away on HTTP 201; the caller decides
/// what to do with `logged_in_as`.
pub async fn register(
    username: &str,
    email: &str,
    password: &str,
) -> Result<Registration, String> {
    #[derive(serde::Serialize)]
    struct RegisterRequest {
        username: String,
        email: String,
        password: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/register", api_base))
        .credentials(RequestCredentials::Include)
        .json(&RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let rejection: ApiRejection = response.json().await.unwrap_or_default();
        return Err(rejection.into_message("Registration failed."));
    }

    let status = response.status();
    let body: AuthResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(Registration {
        message: body.message
            .unwrap_or_else(|| "User registered successfully.".to_string()),
        logged_in_as: if status == 201 { body.username } else { None },
    })
}

/// Close the server session
pub async fn logout() -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/logout", api_base))
        .credentials(RequestCredentials::Include)
        .json(&serde_json::json!({}))
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let rejection: ApiRejection = response.json().await.unwrap_or_default();
        return Err(rejection.into_message("Logout failed"));
    }

    Ok(())
}

/// Submit a prediction request and return the predicted delay in minutes
pub async fn predict(request: &PredictionRequest) -> Result<f64, String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/predict", api_base))
        .credentials(RequestCredentials::Include)
        .json(request)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let rejection: ApiRejection = response.json().await.unwrap_or_default();
        return Err(rejection.into_message("Prediction failed"));
    }

    let body: PredictResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(body.predicted_delay)
}

/// Fetch the prediction history of the current user, newest first
pub async fn fetch_history() -> Result<Vec<PredictionRecord>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/history", api_base))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let rejection: ApiRejection = response.json().await.unwrap_or_default();
        return Err(rejection.into_message("Failed to fetch history"));
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_trims_trailing_slashes() {
        assert_eq!(normalize_base("http://localhost:5000/"), "http://localhost:5000");
        assert_eq!(normalize_base("http://localhost:5000///"), "http://localhost:5000");
        assert_eq!(
            normalize_base("https://api.example.com/delay"),
            "https://api.example.com/delay"
        );
    }

    #[test]
    fn test_prediction_request_wire_fields() {
        let request = PredictionRequest {
            date: "2025-03-14".to_string(),
            temperature: -2.5,
            rain: 1,
            fog: 0,
            visibility: 650.0,
            windspeed: 42.0,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "date": "2025-03-14",
                "temperature": -2.5,
                "rain": 1,
                "fog": 0,
                "visibility": 650.0,
                "windspeed": 42.0,
            })
        );
    }

    #[test]
    fn test_history_row_deserializes() {
        let json = r#"{
            "date": "2025-03-14",
            "temperature": 7.0,
            "rain": 0,
            "fog": 1,
            "visibility": 300.5,
            "windspeed": 12.0,
            "predicted_delay": 18.25
        }"#;

        let row: PredictionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(row.date, "2025-03-14");
        assert_eq!(row.fog, 1);
        assert_eq!(row.predicted_delay, 18.25);
    }

    #[test]
    fn test_rejection_prefers_message_over_error() {
        let rejection: ApiRejection = serde_json::from_str(
            r#"{"message": "Username or Email already exists."}"#,
        )
        .unwrap();
        assert_eq!(
            rejection.into_message("fallback"),
            "Username or Email already exists."
        );

        let rejection: ApiRejection =
            serde_json::from_str(r#"{"error": "Prediction failed"}"#).unwrap();
        assert_eq!(rejection.into_message("fallback"), "Prediction failed");

        let rejection: ApiRejection = serde_json::from_str("{}").unwrap();
        assert_eq!(rejection.into_message("fallback"), "fallback");
    }
}
