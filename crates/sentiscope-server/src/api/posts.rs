use axum::{
    extract::{Query, State},
    Extension, Json,
};
use sentiscope_core::AnnotatedPost;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{normalize_limit, ApiResponse, AppState, ResponseMeta};

const DEFAULT_POSTS_LIMIT: usize = 50;
const MAX_POSTS_LIMIT: usize = 200;

#[derive(Debug, Deserialize)]
pub(super) struct PostsQuery {
    pub limit: Option<i64>,
}

/// First rows of the annotated table, in file order.
pub(super) async fn list_posts(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<PostsQuery>,
) -> Json<ApiResponse<Vec<AnnotatedPost>>> {
    let limit = normalize_limit(query.limit, DEFAULT_POSTS_LIMIT, MAX_POSTS_LIMIT);
    let data = state.posts.iter().take(limit).cloned().collect();

    Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    })
}
