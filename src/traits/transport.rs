use crate::enums::transport_error::TransportError;
use crate::structs::api_request::ApiRequest;
use crate::structs::api_response::ApiResponse;

/// Sends one request and reports what came back, without retrying.
///
/// Any HTTP status, including 4xx and 5xx, is a successful send; only
/// failures to get a response at all are `Err`.
pub trait Transport: Send + Sync {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError>;

    /// Base URL requests are resolved against, for logs and error messages.
    fn base_url(&self) -> &str;
}
