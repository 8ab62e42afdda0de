pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::profile::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/api/health", get(health::health_handler))
        .route(
            "/api/resumes",
            post(handlers::handle_upload_resume).layer(upload_limit),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::state::testing::{test_state, FixedProfile, FixedText};

    #[tokio::test]
    async fn test_health_is_ok_without_ai() {
        let tmp = tempfile::tempdir().unwrap();
        // The fake AI backend always fails; health must not care.
        let state = test_state(tmp.path(), FixedText(None), FixedProfile::new(None));

        let response = build_router(state)
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let state = test_state(tmp.path(), FixedText(None), FixedProfile::new(None));

        let response = build_router(state)
            .oneshot(
                Request::builder()
                    .uri("/api/unknown")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
