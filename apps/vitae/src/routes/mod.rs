pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::document::handlers as documents;
use crate::latex::handlers as export;
use crate::layout::handlers as layout;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Document API
        .route("/api/v1/documents/sample", get(documents::handle_sample))
        .route(
            "/api/v1/documents/normalize",
            post(documents::handle_normalize),
        )
        .route("/api/v1/documents/patch", post(documents::handle_patch))
        // Export API
        .route("/api/v1/export/latex", post(export::handle_export_latex))
        // Layout API
        .route("/api/v1/layout/evaluate", post(layout::handle_evaluate))
        .route("/api/v1/layout/fit", post(layout::handle_fit))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::layout::PageGeometry;

    fn app() -> Router {
        build_router(AppState {
            geometry: PageGeometry::A4,
        })
    }

    async fn post_json(uri: &str, body: Value) -> Response {
        app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "vitae");
    }

    #[tokio::test]
    async fn test_sample_document() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/documents/sample")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["header"]["name"], "Alex Johnson");
        assert!(body["customSections"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_normalize_fills_missing_fields() {
        let response = post_json(
            "/api/v1/documents/normalize",
            json!({ "header": { "name": "Sam" }, "summary": null }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["header"]["name"], "Sam");
        assert_eq!(body["summary"], "");
        assert_eq!(body["experience"], json!([]));
        assert_eq!(body["skills"]["tools"], json!([]));
    }

    #[tokio::test]
    async fn test_normalize_rejects_wrong_shape() {
        let response = post_json("/api/v1/documents/normalize", json!({ "summary": 42 })).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "MALFORMED_DOCUMENT");
    }

    #[tokio::test]
    async fn test_patch_appends_entry() {
        let response = post_json(
            "/api/v1/documents/patch",
            json!({
                "document": {},
                "patch": { "op": "append_entry", "section": "experience" }
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["experience"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_patch_out_of_range_is_rejected() {
        let response = post_json(
            "/api/v1/documents/patch",
            json!({
                "document": {},
                "patch": { "op": "remove_entry", "section": "projects", "index": 3 }
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "PATCH_REJECTED");
    }

    #[tokio::test]
    async fn test_export_latex_escapes_and_sets_headers() {
        let response = post_json(
            "/api/v1/export/latex",
            json!({ "document": { "header": { "name": "A & B" } } }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/x-tex; charset=utf-8"
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let source = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(source.contains(r"A \& B"));
        assert!(source.ends_with("\\end{document}\n"));
    }

    #[tokio::test]
    async fn test_export_latex_honours_visibility() {
        let response = post_json(
            "/api/v1/export/latex",
            json!({
                "document": {},
                "visibleSections": { "skills": false }
            }),
        )
        .await;
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let source = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(!source.contains("\\section{Skills}"));
        assert!(source.contains("\\section{Summary}"));
    }

    #[tokio::test]
    async fn test_evaluate_escalates_on_overflow() {
        let response = post_json(
            "/api/v1/layout/evaluate",
            json!({ "density": "comfortable", "renderedHeightPx": 1129.0 }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["density"], "compact");
        assert_eq!(body["overflowing"], true);
        assert_eq!(body["outcome"]["kind"], "escalated");
        assert_eq!(body["thresholdPx"], 1128.0);
    }

    #[tokio::test]
    async fn test_evaluate_readonly_is_skipped() {
        let response = post_json(
            "/api/v1/layout/evaluate",
            json!({ "density": "compact", "renderedHeightPx": 5000.0, "mode": "readonly" }),
        )
        .await;
        let body = body_json(response).await;
        assert_eq!(body["density"], "compact");
        assert_eq!(body["overflowing"], false);
        assert_eq!(body["outcome"]["kind"], "skipped");
    }

    #[tokio::test]
    async fn test_evaluate_rejects_negative_height() {
        let response = post_json(
            "/api/v1/layout/evaluate",
            json!({ "renderedHeightPx": -1.0 }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_evaluate_rejects_missing_height() {
        let response = post_json("/api/v1/layout/evaluate", json!({})).await;
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "INVALID_BODY");
    }

    #[tokio::test]
    async fn test_fit_sample_document() {
        let sample = serde_json::to_value(crate::models::Document::sample()).unwrap();
        let response = post_json("/api/v1/layout/fit", json!({ "document": sample })).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["decision"]["overflowing"], false);
        assert!(body["estimatedHeightPx"].as_f64().unwrap() > 0.0);
        assert_eq!(body["settings"]["density"], body["decision"]["density"]);
    }

    #[tokio::test]
    async fn test_fit_in_preview_mode_keeps_density() {
        let response = post_json(
            "/api/v1/layout/fit",
            json!({
                "document": {},
                "settings": { "viewMode": "preview", "density": "dense" }
            }),
        )
        .await;
        let body = body_json(response).await;
        assert_eq!(body["decision"]["density"], "dense");
        assert_eq!(body["decision"]["outcome"]["kind"], "skipped");
    }

    #[tokio::test]
    async fn test_requested_density_overrides_engine_default() {
        let response = post_json(
            "/api/v1/layout/evaluate",
            json!({ "density": "dense", "renderedHeightPx": 100.0 }),
        )
        .await;
        let body = body_json(response).await;
        assert_eq!(body["density"], "dense");
        assert_eq!(body["outcome"]["kind"], "fits");

        let response = post_json(
            "/api/v1/layout/fit",
            json!({ "document": {}, "settings": { "density": "compact" } }),
        )
        .await;
        let body = body_json(response).await;
        assert_eq!(body["decision"]["density"], "compact");
        assert_eq!(body["settings"]["density"], "compact");
    }
}
