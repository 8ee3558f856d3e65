//! Fetch client for the task REST API.

use shared::{Task, TaskPayload};
use thiserror::Error;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Base URL of the task API, supplied at build time. Empty means
/// same-origin relative paths.
pub fn base_url() -> &'static str {
    option_env!("TASKS_API_URL").unwrap_or("")
}

pub fn collection_url(base: &str) -> String {
    format!("{base}/api/tasks")
}

pub fn item_url(base: &str, id: &str) -> String {
    format!("{base}/api/tasks/{id}")
}

pub async fn list_tasks() -> Result<Vec<Task>, ApiError> {
    let text = send(&collection_url(base_url()), "GET", None).await?;
    Ok(serde_json::from_str(&text)?)
}

pub async fn create_task(draft: &TaskPayload) -> Result<Task, ApiError> {
    let body = serde_json::to_string(draft)?;
    let text = send(&collection_url(base_url()), "POST", Some(body)).await?;
    Ok(serde_json::from_str(&text)?)
}

pub async fn update_task(id: &str, payload: &TaskPayload) -> Result<Task, ApiError> {
    let body = serde_json::to_string(payload)?;
    let text = send(&item_url(base_url(), id), "PUT", Some(body)).await?;
    Ok(serde_json::from_str(&text)?)
}

/// The confirmation body is ignored; callers resync with a fresh listing.
pub async fn delete_task(id: &str) -> Result<(), ApiError> {
    send(&item_url(base_url(), id), "DELETE", None).await?;
    Ok(())
}

async fn send(url: &str, method: &str, body: Option<String>) -> Result<String, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| ApiError::Transport(format!("failed to build {method} {url}")))?;

    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|_| ApiError::Transport("failed to set content type".to_string()))?;
    }

    let window = web_sys::window()
        .ok_or_else(|| ApiError::Transport("no window available".to_string()))?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| ApiError::Transport(format!("{method} {url} failed to send")))?
        .into();

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let text_promise = response
        .text()
        .map_err(|_| ApiError::Transport("failed to read response body".to_string()))?;

    JsFuture::from(text_promise)
        .await
        .map_err(|_| ApiError::Transport("failed to read response body".to_string()))?
        .as_string()
        .ok_or_else(|| ApiError::Transport("response body was not text".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_urls_when_no_base_is_configured() {
        assert_eq!(collection_url(""), "/api/tasks");
        assert_eq!(item_url("", "64b0"), "/api/tasks/64b0");
    }

    #[test]
    fn absolute_urls_join_the_base() {
        assert_eq!(
            collection_url("http://localhost:3000"),
            "http://localhost:3000/api/tasks"
        );
        assert_eq!(
            item_url("http://localhost:3000", "64b0"),
            "http://localhost:3000/api/tasks/64b0"
        );
    }

    #[test]
    fn status_errors_carry_the_code() {
        assert_eq!(ApiError::Status(404).to_string(), "server returned 404");
    }
}
