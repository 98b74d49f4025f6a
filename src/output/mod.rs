// wire rendering of analysis results

use serde::Serialize;

use crate::analyzer::{AnalysisResult, AnalyzeError};

/// structured error response, distinct from AnalysisResult: a failed
/// request never produces a partial result, only this shape.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: &'static str,
}

impl ErrorResponse {
    pub fn from_error(err: &AnalyzeError) -> ErrorResponse {
        let kind = match err {
            AnalyzeError::InvalidInput(_) => "invalid_input",
            AnalyzeError::Internal => "internal",
        };
        ErrorResponse {
            error: err.to_string(),
            kind,
        }
    }
}

/// render a result as pretty JSON for stdout
pub fn render(result: &AnalysisResult) -> String {
    // serialization of a plain-data struct cannot fail
    serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
}

/// render the suggestion-only response: {"suggested_passwords": [...]}
pub fn render_pool(suggestions: &[String]) -> String {
    #[derive(Serialize)]
    struct Pool<'a> {
        suggested_passwords: &'a [String],
    }
    serde_json::to_string_pretty(&Pool {
        suggested_passwords: suggestions,
    })
    .unwrap_or_else(|_| "{}".to_string())
}

pub fn render_error(err: &AnalyzeError) -> String {
    serde_json::to_string_pretty(&ErrorResponse::from_error(err))
        .unwrap_or_else(|_| "{}".to_string())
}
