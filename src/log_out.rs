//! The endpoint that invalidates the session cookie.

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;
use serde_json::json;

use crate::auth_cookie::invalidate_auth_cookie;

/// A route handler that invalidates the session cookie.
///
/// Idempotent: logging out without a session still returns success.
pub async fn log_out_endpoint(jar: PrivateCookieJar) -> Response {
    let jar = invalidate_auth_cookie(jar);

    (jar, Json(json!({ "success": true }))).into_response()
}
