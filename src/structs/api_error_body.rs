use serde::Deserialize;

/// Error envelope returned by the API for non-2xx responses.
#[derive(Deserialize, Debug, Clone)]
pub struct ApiErrorBody {
    pub status: u16,
    pub error: String,
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

impl ApiErrorBody {
    pub fn from_body(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}
