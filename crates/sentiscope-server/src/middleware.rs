use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use uuid::Uuid;

/// Newtype wrapping a request ID string, stored as a request extension.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Tags every dashboard request with an ID.
///
/// A non-empty incoming `x-request-id` is reused, otherwise a `UUIDv4` is
/// minted. Handlers read it as [`RequestId`] for the response envelope, the
/// response echoes it in the header, and the completed request is logged
/// at debug level with its route and status.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);
    let route = req.uri().path().to_string();

    req.extensions_mut().insert(RequestId(id.clone()));
    let mut res = next.run(req).await;

    tracing::debug!(request_id = %id, route = %route, status = res.status().as_u16(), "dashboard request");
    if let Ok(val) = HeaderValue::from_str(&id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, val);
    }

    res
}
