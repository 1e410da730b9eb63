//! HTTP helpers for talking to the backend API.
//!
//! Every request is sent with credentials so the session cookie travels
//! along. A 401 is logged and surfaces as a plain error like any other
//! non-2xx status; the app never redirects on it.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;

/// Build a full API URL from a path (same-origin `/api` prefix).
pub fn api_url(path: &str) -> String {
    format!("/api{}", path)
}

fn check_status(response: &Response) -> Result<(), String> {
    if response.status() == 401 {
        log::error!("Unauthorized: please log in again");
    }
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    check_status(&response)?;
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = Request::post(&api_url(path))
        .header("Accept", "application/json")
        .credentials(RequestCredentials::Include)
        .json(body)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    check_status(&response)?;
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// POST where only the status matters.
pub async fn post_json_unit<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let response = Request::post(&api_url(path))
        .credentials(RequestCredentials::Include)
        .json(body)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    check_status(&response)
}

/// PUT where only the status matters.
pub async fn put_json_unit<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let response = Request::put(&api_url(path))
        .credentials(RequestCredentials::Include)
        .json(body)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    check_status(&response)
}

pub async fn delete_unit(path: &str) -> Result<(), String> {
    let response = Request::delete(&api_url(path))
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    check_status(&response)
}
