use std::thread;
use std::time::Duration;
use serde::de::DeserializeOwned;
use crate::config::constants::{API_VERSION, SDK_VERSION_HEADER, USER_AGENT};
use crate::errors::{ParityError, ParityResult};
use crate::structs::api_error_body::ApiErrorBody;
use crate::structs::api_request::ApiRequest;
use crate::structs::api_response::ApiResponse;
use crate::traits::transport::Transport;

/// `base × 2^attempt`, saturating instead of overflowing.
pub fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    match 2u32.checked_pow(attempt).and_then(|factor| base.checked_mul(factor)) {
        Some(delay) => delay,
        None if base.is_zero() => Duration::ZERO,
        None => Duration::MAX,
    }
}

/// Headers attached to every API call.
pub fn default_headers(api_key: &str) -> Vec<(String, String)> {
    vec![
        ("Authorization".to_string(), format!("Bearer {}", api_key)),
        ("Content-Type".to_string(), "application/json".to_string()),
        (SDK_VERSION_HEADER.to_string(), API_VERSION.to_string()),
        ("User-Agent".to_string(), USER_AGENT.to_string()),
    ]
}

/// Sends API requests with the fixed header set and bounded retries.
///
/// Server errors (5xx) and connection failures are retried up to
/// `retries` times, sleeping `retry_delay × 2^attempt` between attempts.
/// Every other non-2xx status fails on the first response.
pub struct RequestExecutor {
    transport: Box<dyn Transport>,
    headers: Vec<(String, String)>,
    retries: u32,
    retry_delay: Duration,
}

impl RequestExecutor {
    pub fn new(transport: Box<dyn Transport>, api_key: &str, retries: u32, retry_delay: Duration) -> Self {
        Self {
            transport,
            headers: default_headers(api_key),
            retries,
            retry_delay,
        }
    }

    pub fn retries(&self) -> u32 {
        self.retries
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    pub fn execute(&self, request: ApiRequest) -> ParityResult<ApiResponse> {
        let mut request = request;
        request.headers.extend(self.headers.iter().cloned());

        let operation = request.describe();
        let url = format!("{}{}", self.transport.base_url(), request.path);
        let mut attempt = 0u32;

        loop {
            log::debug!("📡 {} (attempt {}/{})", operation, attempt + 1, self.retries + 1);

            match self.transport.send(&request) {
                Ok(response) if response.is_success() => return Ok(response),
                Ok(response) if response.is_server_error() && attempt < self.retries => {
                    let delay = backoff_delay(self.retry_delay, attempt);
                    log::warn!(
                        "🔄 {} returned HTTP {}, retrying in {:?} (attempt {}/{})",
                        operation, response.status, delay, attempt + 1, self.retries
                    );
                    thread::sleep(delay);
                }
                Ok(response) => {
                    let message = ApiErrorBody::from_body(&response.body).map(|e| e.message);
                    return Err(ParityError::api_error(
                        &operation,
                        &url,
                        response.status,
                        &response.body,
                        message.as_deref(),
                    ));
                }
                Err(error) if error.is_connection_level() && attempt < self.retries => {
                    let delay = backoff_delay(self.retry_delay, attempt);
                    log::warn!(
                        "🔄 {} failed ({}), retrying in {:?} (attempt {}/{})",
                        operation, error, delay, attempt + 1, self.retries
                    );
                    thread::sleep(delay);
                }
                Err(error) => {
                    return Err(ParityError::connection_error(&operation, &url, attempt + 1, &error.to_string()));
                }
            }

            attempt += 1;
        }
    }

    pub fn execute_json<T: DeserializeOwned>(&self, request: ApiRequest) -> ParityResult<T> {
        let operation = request.describe();
        let response = self.execute(request)?;
        response.json().map_err(|e| match e {
            ParityError::ParseError { content_type, line_number, reason, .. } => ParityError::ParseError {
                content_type,
                line_number,
                reason,
                context: Some(format!("response to {}", operation)),
            },
            other => other,
        })
    }
}
