use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

/// Sends a request and decodes a JSON response, or logs why it could not.
///
/// Upstream APIs are treated as best effort: transport errors, non-2xx
/// statuses and undecodable bodies all collapse to `None`.
pub async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Option<T> {
    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::warn!("Request to {:?} failed: {}", e.url().map(|u| u.as_str()), e);
            return None;
        }
    };

    let status = response.status();
    let url = response.url().clone();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::warn!("{} returned {}: {}", url, status, body);
        return None;
    }

    match response.json::<T>().await {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Failed to decode response from {}: {}", url, e);
            None
        }
    }
}
