//! HTTP request handlers for the analysis service.

use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{debug, error, info, info_span};
use uuid::Uuid;

use crate::analyzer::ComplaintAnalyzer;
use crate::dictionary::DictionaryVariant;
use crate::error::AnalysisError;
use crate::processing::ColumnHints;
use crate::types::{AnalysisRequest, AnalysisResponse, ServiceConfig};

/// Application state shared across handlers.
pub struct AppState {
    pub analyzer: Arc<ComplaintAnalyzer>,
    pub config: ServiceConfig,
}

/// Status response.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    status: String,
    version: String,
}

/// Service status endpoint.
pub async fn root() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "online".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health check endpoint.
pub async fn health_check() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Error body returned to clients.
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

/// Handler-level failure.
#[derive(Debug)]
pub enum ApiError {
    /// The upload or its parameters were rejected
    Analysis(AnalysisError),
    /// The analysis task itself failed
    Internal(String),
}

impl From<AnalysisError> for ApiError {
    fn from(err: AnalysisError) -> Self {
        ApiError::Analysis(err)
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::Analysis(AnalysisError::InvalidRequest(err.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Analysis(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::Internal(detail) => (StatusCode::INTERNAL_SERVER_ERROR, detail),
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}

/// Classify an uploaded complaint export.
///
/// Expects `multipart/form-data` with a `file` part and optional `language`,
/// `col_subj`, `col_msg`, `col_date`, `type`, `page` and `limit` fields.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    let mut request = AnalysisRequest::new(Vec::new())
        .with_page(1, state.config.default_page_size)
        .with_hints(ColumnHints::default());
    let mut has_file = false;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                debug!(file_name = ?field.file_name(), "Receiving upload");
                request.content = field.bytes().await?.to_vec();
                has_file = true;
            }
            "language" => request.language = field.text().await?,
            "col_subj" => request.hints.subject = field.text().await?,
            "col_msg" => request.hints.message = field.text().await?,
            "col_date" => request.hints.date = field.text().await?,
            "type" => {
                request.variant = DictionaryVariant::from_type_flag(parse_flag(&field.text().await?)?)
            }
            "page" => request.page = parse_number("page", &field.text().await?)?,
            "limit" => request.page_size = parse_number("limit", &field.text().await?)?,
            other => debug!(field = other, "Ignoring unknown form field"),
        }
    }

    if !has_file {
        return Err(AnalysisError::InvalidRequest("missing 'file' upload".to_string()).into());
    }

    info!(
        %request_id,
        language = %request.language,
        variant = %request.variant,
        bytes = request.content.len(),
        page = request.page,
        limit = request.page_size,
        "Received analysis request"
    );

    let analyzer = Arc::clone(&state.analyzer);
    let span = info_span!("analyze", %request_id);
    let result = tokio::task::spawn_blocking(move || span.in_scope(|| analyzer.analyze(&request)))
        .await
        .map_err(|e| {
            error!(%request_id, error = %e, "Analysis task failed");
            ApiError::Internal("analysis task failed".to_string())
        })?;

    match result {
        Ok(response) => Ok(Json(response)),
        Err(err) => {
            info!(%request_id, error = %err, "Rejected analysis request");
            Err(err.into())
        }
    }
}

/// Parse a form boolean the way HTML forms and API clients send it.
fn parse_flag(value: &str) -> Result<bool, AnalysisError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Ok(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Ok(false),
        other => Err(AnalysisError::InvalidRequest(format!(
            "'type' must be a boolean, got '{}'",
            other
        ))),
    }
}

fn parse_number(field: &str, value: &str) -> Result<usize, AnalysisError> {
    value.trim().parse().map_err(|_| {
        AnalysisError::InvalidRequest(format!(
            "'{}' must be a non-negative integer, got '{}'",
            field, value
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true").unwrap());
        assert!(parse_flag(" On ").unwrap());
        assert!(parse_flag("1").unwrap());
        assert!(!parse_flag("false").unwrap());
        assert!(!parse_flag("0").unwrap());
        assert!(parse_flag("Tipo").is_err());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("page", " 3 ").unwrap(), 3);
        assert!(parse_number("page", "-1").is_err());
        assert!(parse_number("limit", "abc").is_err());
    }
}
