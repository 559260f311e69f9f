use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use parity_sdk::enums::transport_error::TransportError;
use parity_sdk::structs::api_request::ApiRequest;
use parity_sdk::structs::api_response::ApiResponse;
use parity_sdk::structs::config::api_config::ApiConfig;
use parity_sdk::traits::transport::Transport;
use parity_sdk::ParityClient;

pub const TEST_BASE_URL: &str = "https://api.test.parity";

/// Replays canned responses in order and records every request it sees.
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<ApiResponse, TransportError>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl ScriptedTransport {
    pub fn new(responses: Vec<Result<ApiResponse, TransportError>>) -> (Self, Arc<Mutex<Vec<ApiRequest>>>) {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let transport = Self {
            responses: Mutex::new(responses.into()),
            requests: Arc::clone(&requests),
        };
        (transport, requests)
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Connect("script exhausted".to_string())))
    }

    fn base_url(&self) -> &str {
        TEST_BASE_URL
    }
}

pub fn ok(body: &str) -> Result<ApiResponse, TransportError> {
    Ok(ApiResponse::new(200, body))
}

pub fn status(code: u16, body: &str) -> Result<ApiResponse, TransportError> {
    Ok(ApiResponse::new(code, body))
}

pub fn test_config(retries: u32) -> ApiConfig {
    ApiConfig {
        api_key: Some("pk_test_123".to_string()),
        api_key_env: "PARITY_SDK_TEST_UNSET_KEY".to_string(),
        base_url: TEST_BASE_URL.to_string(),
        timeout_ms: 1_000,
        retries,
        retry_delay_ms: 0,
    }
}

pub fn scripted_client(
    responses: Vec<Result<ApiResponse, TransportError>>,
) -> (ParityClient, Arc<Mutex<Vec<ApiRequest>>>) {
    let (transport, requests) = ScriptedTransport::new(responses);
    let client = ParityClient::with_transport(test_config(0), Box::new(transport)).unwrap();
    (client, requests)
}

pub fn skill_json(name: &str) -> String {
    format!(
        r#"{{"name":"{}","version":"1.0.0","description":"{} checks","inputs":[],"outputs":[],"steps":["scan"]}}"#,
        name, name
    )
}

pub fn not_found(message: &str) -> Result<ApiResponse, TransportError> {
    status(
        404,
        &format!(r#"{{"status":404,"error":"Not Found","message":"{}"}}"#, message),
    )
}

pub fn analysis_json(score: u8, severities: &[&str]) -> String {
    let findings: Vec<String> = severities
        .iter()
        .enumerate()
        .map(|(i, severity)| {
            format!(
                r#"{{"severity":"{}","title":"Issue {}","location":{{"file":"lib.rs","line":{}}},"description":"d","recommendation":"r","pattern":"p-{}"}}"#,
                severity,
                i,
                i + 1,
                i
            )
        })
        .collect();

    format!(
        r#"{{"score":{},"findings":[{}],"summary":"s","skills":["security-audit"],"metadata":{{"framework":"anchor","analyzedAt":"2026-01-01T00:00:00Z","duration":12}}}}"#,
        score,
        findings.join(",")
    )
}
