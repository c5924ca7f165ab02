use reqwest::{Client, Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url.into())),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) async fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.resolved_base_url().await, path)
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    /// Single round trip: no retry, no timeout override, no caching.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = request
            .build()
            .map_err(|e| ApiError::request_failed(format!("Invalid request: {}", e)))?;
        log::debug!("API Request: {} {}", request.method(), request.url());

        if let Some(mocked) = mocked_response(&request) {
            return mocked;
        }

        self.client.execute(request).await.map_err(|e| {
            let error = ApiError::request_failed(format!("Request failed: {}", e));
            log::error!("API Error: {}", error);
            error
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
fn mocked_response(request: &Request) -> Option<Result<Response, ApiError>> {
    test_transport::lookup(request.url().as_str()).map(|responder| {
        responder
            .respond(request)
            .and_then(MockResponse::into_response)
    })
}

#[cfg(not(all(test, not(target_arch = "wasm32"))))]
fn mocked_response(_request: &Request) -> Option<Result<Response, ApiError>> {
    None
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let body = response.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
    let error = ApiError::from_status(status, &body);
    log::error!("API Error ({}): {}", status, error);
    error
}

pub(crate) async fn map_typed_response<T>(response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }
    let body = response
        .bytes()
        .await
        .map_err(|e| ApiError::decode(format!("Failed to read response: {}", e)))?;
    serde_json::from_slice(&body).map_err(|e| {
        let error = ApiError::decode(format!("Failed to parse response: {}", e));
        log::error!("API Error: {}", error);
        error
    })
}

/// Success with any (or no) body, e.g. `204 No Content` from a delete.
pub(crate) async fn map_empty_response(response: Response) -> Result<(), ApiError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(error_from_response(response).await)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use test_transport::{register_mock, MockResponse, TestResponder};
