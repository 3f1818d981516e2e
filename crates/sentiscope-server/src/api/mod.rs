mod posts;
mod sentiment;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use sentiscope_core::AnnotatedPost;
use sentiscope_sentiment::Dashboard;
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, RequestId};

/// Read-only data shared by every handler.
///
/// The table is loaded and aggregated once at startup; handlers never touch
/// the filesystem.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<Vec<AnnotatedPost>>,
    pub dashboard: Arc<Dashboard>,
    pub word_limit: usize,
}

impl AppState {
    pub fn new(posts: Vec<AnnotatedPost>, word_limit: usize, sample_rows: usize) -> Self {
        let dashboard = Dashboard::build(&posts, word_limit, sample_rows);
        Self {
            posts: Arc::new(posts),
            dashboard: Arc::new(dashboard),
            word_limit,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    posts: usize,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Clamp a requested page size to `1..=max`, using `default` when absent.
pub(super) fn normalize_limit(limit: Option<i64>, default: usize, max: usize) -> usize {
    let max = max.max(1);
    match limit {
        None => default.clamp(1, max),
        Some(requested) => {
            let upper = i64::try_from(max).unwrap_or(i64::MAX);
            usize::try_from(requested.clamp(1, upper)).unwrap_or(1)
        }
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/dashboard", get(sentiment::get_dashboard))
        .route("/api/v1/sentiment/trend", get(sentiment::get_trend))
        .route(
            "/api/v1/sentiment/distribution",
            get(sentiment::get_distribution),
        )
        .route("/api/v1/sentiment/metrics", get(sentiment::get_metrics))
        .route("/api/v1/sentiment/words", get(sentiment::get_words))
        .route("/api/v1/posts", get(posts::list_posts))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    Json(ApiResponse {
        data: HealthData {
            status: "ok",
            posts: state.posts.len(),
        },
        meta: ResponseMeta::new(req_id.0),
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use sentiscope_core::post::parse_post_date;
    use sentiscope_core::{AnnotatedPost, RawPost};
    use tower::ServiceExt;

    use super::{build_app, AppState};

    pub(crate) fn post(date: &str, processed: &str, score: f64) -> AnnotatedPost {
        AnnotatedPost::new(
            RawPost::new(
                parse_post_date(date).expect("valid test date"),
                Some(processed.to_string()),
            ),
            processed.to_string(),
            score,
        )
    }

    pub(crate) fn sample_state() -> AppState {
        AppState::new(
            vec![
                post("2024-01-01", "love sunny day", 0.8),
                post("2024-01-01 18:00:00", "terrible rain", -0.2),
                post("2024-01-02", "bus late", 0.0),
                post("2024-01-03", "great great coffee", 0.7),
            ],
            50,
            10,
        )
    }

    pub(crate) async fn get_json(state: AppState, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = build_app(state)
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        let json = serde_json::from_slice(&body).expect("json parse");
        (status, json)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{get_json, sample_state};
    use super::*;

    #[test]
    fn normalize_limit_applies_defaults_and_bounds() {
        assert_eq!(normalize_limit(None, 50, 200), 50);
        assert_eq!(normalize_limit(Some(0), 50, 200), 1);
        assert_eq!(normalize_limit(Some(-7), 50, 200), 1);
        assert_eq!(normalize_limit(Some(1_000), 50, 200), 200);
        assert_eq!(normalize_limit(Some(25), 50, 200), 25);
        assert_eq!(normalize_limit(None, 500, 200), 200);
    }

    #[test]
    fn api_error_validation_error_maps_to_bad_request() {
        let response = ApiError::new("req-1", "validation_error", "invalid input").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn api_error_unknown_code_maps_to_internal_error() {
        let response = ApiError::new("req-1", "boom", "unexpected").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn health_reports_loaded_posts() {
        let (status, json) = get_json(sample_state(), "/api/v1/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["status"], "ok");
        assert_eq!(json["data"]["posts"], 4);
        assert!(json["meta"]["request_id"].is_string());
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let response = tower::ServiceExt::oneshot(
            build_app(sample_state()),
            axum::http::Request::builder()
                .uri("/api/v1/nope")
                .body(axum::body::Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
