use serde::Serialize;
use crate::enums::framework::Framework;
use crate::enums::output_format::OutputFormat;

/// Body of `POST /v1/analyze`.
#[derive(Debug, Serialize)]
pub struct AnalyzeRequest {
    pub program: String,
    pub framework: Framework,
    pub skills: Vec<String>,
    pub output: OutputFormat,
}
