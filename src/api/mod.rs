//! HTTP surface of the analysis service.

pub mod handlers;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use handlers::AppState;

/// Build the service routes over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        // Status
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        // Analysis
        .route("/analyze", post(handlers::analyze))
        .route("/analizar/", post(handlers::analyze))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::analyzer::ComplaintAnalyzer;
    use crate::types::ServiceConfig;

    const BOUNDARY: &str = "insight-test-boundary";

    fn app() -> Router {
        let state = Arc::new(AppState {
            analyzer: Arc::new(ComplaintAnalyzer::default()),
            config: ServiceConfig::default(),
        });
        router(state)
    }

    fn multipart_body(fields: &[(&str, &str)], file: Option<&str>) -> String {
        let mut body = String::new();
        for (name, value) in fields {
            body.push_str(&format!(
                "--{b}\r\nContent-Disposition: form-data; name=\"{n}\"\r\n\r\n{v}\r\n",
                b = BOUNDARY,
                n = name,
                v = value
            ));
        }
        if let Some(content) = file {
            body.push_str(&format!(
                "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"quejas.csv\"\r\nContent-Type: text/csv\r\n\r\n{c}\r\n",
                b = BOUNDARY,
                c = content
            ));
        }
        body.push_str(&format!("--{}--\r\n", BOUNDARY));
        body
    }

    async fn post_form(fields: &[(&str, &str)], file: Option<&str>) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/analyze")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(multipart_body(fields, file)))
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_root_status() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_analyze_success() {
        let csv = "Fecha;Asunto;Contenido\n2024-02-01;Tren con retraso;Tarde\n2024-02-02;Personal muy amable;Gracias\n";
        let (status, body) = post_form(&[("language", "es"), ("type", "true")], Some(csv)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["pagination"]["total_items"], 2);
        assert_eq!(body["pagination"]["items_per_page"], 50);
        assert_eq!(body["data"][0]["detected_categories"][0], "punctuality");
        assert_eq!(body["data"][1]["keywords_found"]["service"][1], "amable");
    }

    #[tokio::test]
    async fn test_analyze_unsupported_language() {
        let csv = "Asunto;Contenido\nRetard;x\n";
        let (status, body) = post_form(&[("language", "fr"), ("type", "false")], Some(csv)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].as_str().unwrap().contains("fr"));
    }

    #[tokio::test]
    async fn test_analyze_missing_columns_lists_available() {
        let csv = "id;texto\n1;hola\n";
        let (status, body) = post_form(&[], Some(csv)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].as_str().unwrap().contains("id, texto"));
    }

    #[tokio::test]
    async fn test_analyze_requires_file() {
        let (status, body) = post_form(&[("language", "es")], None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["detail"].as_str().unwrap().contains("file"));
    }

    #[tokio::test]
    async fn test_analyze_rejects_bad_page() {
        let csv = "Asunto;Contenido\na;b\n";
        let (status, _) = post_form(&[("page", "uno")], Some(csv)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
