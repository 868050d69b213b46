//! Retry helper for HTTP requests with exponential backoff.
//!
//! Requests that fail with a transient status (429, 502, 503, 504) or a
//! connect/timeout transport error are retried with exponential backoff
//! (1s, 2s, 4s = 2^attempt). Every other failure is returned immediately.

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::GrafanaErrorBody;

/// Sends an HTTP request, retrying transient failures up to `max_retries` times.
///
/// # Errors
///
/// - `ClientError::MaxRetriesExceeded` wrapping the last error once retries are exhausted.
/// - The status-specific variant from [`ClientError::from_status`] for non-retryable statuses.
/// - `ClientError::HttpError` for non-retryable transport errors.
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    max_retries: usize,
    endpoint: &str,
    method: &str,
) -> Result<Response> {
    let mut attempt = 0;

    loop {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None => {
                debug!(endpoint, method, "Request builder cannot be cloned, single attempt only");
                return match builder.send().await {
                    Ok(response) => check_status(response).await,
                    Err(e) => Err(ClientError::from(e)),
                };
            }
        };

        let error = match attempt_builder.send().await {
            Ok(response) if response.status().is_success() => {
                if attempt > 0 {
                    debug!(endpoint, method, attempt = attempt + 1, "Request succeeded after retry");
                }
                return Ok(response);
            }
            Ok(response) => {
                let status = response.status().as_u16();
                let error = error_from_response(response).await;
                if !ClientError::is_retryable_status(status) {
                    return Err(error);
                }
                error
            }
            Err(e) if e.is_connect() || e.is_timeout() => ClientError::from(e),
            Err(e) => return Err(ClientError::from(e)),
        };

        if attempt >= max_retries {
            if max_retries == 0 {
                return Err(error);
            }
            debug!(endpoint, method, attempts = attempt + 1, "Max retries exhausted");
            return Err(ClientError::MaxRetriesExceeded(attempt + 1, Box::new(error)));
        }

        let backoff_secs = 2u64.pow(attempt as u32);
        debug!(
            endpoint,
            method,
            attempt = attempt + 1,
            max_attempts = max_retries + 1,
            backoff_secs,
            error = %error,
            "Transient failure, retrying with exponential backoff"
        );
        tokio::time::sleep(tokio::time::Duration::from_secs(backoff_secs)).await;
        attempt += 1;
    }
}

async fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(error_from_response(response).await)
    }
}

/// Turn a non-success response into a `ClientError`, preferring Grafana's
/// `{"message": ...}` body over the raw text.
async fn error_from_response(response: Response) -> ClientError {
    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let message = match serde_json::from_str::<GrafanaErrorBody>(&body) {
        Ok(parsed) => match parsed.status {
            Some(kind) => format!("{} ({})", parsed.message, kind),
            None => parsed.message,
        },
        Err(_) => body,
    };

    ClientError::from_status(status, url, message)
}
