//! Application router configuration with protected and unprotected route
//! definitions, CORS, and static/SPA fallback serving.

use axum::{
    Json, Router,
    http::{Method, StatusCode, header},
    middleware,
    response::{Html, IntoResponse, Response},
    routing::{any, get, post, put},
};
use serde_json::json;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
};

use crate::{
    AppState,
    auth_middleware::auth_guard,
    endpoints,
    log_in::log_in_endpoint,
    log_out::log_out_endpoint,
    metrics::{latest_metrics_endpoint, upsert_metrics_endpoint},
    register::register_endpoint,
    sales::monthly_sales_endpoint,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, list_transactions_endpoint,
        recent_transactions_endpoint, transaction_totals_endpoint, update_transaction_endpoint,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let unprotected_routes = Router::new()
        .route(endpoints::COFFEE, get(get_coffee))
        .route(endpoints::REGISTER, post(register_endpoint))
        .route(endpoints::LOG_IN, post(log_in_endpoint))
        .route(endpoints::LOG_OUT, post(log_out_endpoint));

    let protected_routes = Router::new()
        .route(endpoints::MONTHLY_SALES, get(monthly_sales_endpoint))
        .route(endpoints::LATEST_METRICS, get(latest_metrics_endpoint))
        .route(endpoints::METRICS, post(upsert_metrics_endpoint))
        .route(
            endpoints::TRANSACTIONS,
            get(list_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(
            endpoints::RECENT_TRANSACTIONS,
            get(recent_transactions_endpoint),
        )
        .route(
            endpoints::TRANSACTION_TOTALS,
            get(transaction_totals_endpoint),
        )
        .route(
            endpoints::TRANSACTION,
            put(update_transaction_endpoint).delete(delete_transaction_endpoint),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_guard));

    // Unmatched API paths get a JSON 404; everything else falls through to the
    // static assets and finally the SPA entry document, so client-side routes
    // reload correctly.
    let serve_spa = ServeDir::new(&state.assets_dir)
        .fallback(ServeFile::new(state.assets_dir.join("index.html")));

    let router = protected_routes
        .merge(unprotected_routes)
        .route("/api", any(get_api_not_found))
        .route("/api/{*unmatched}", any(get_api_not_found))
        .layer(middleware::from_fn(crate::logging_middleware))
        .fallback_service(serve_spa)
        .with_state(state.clone());

    if state.allowed_origins.is_empty() {
        router
    } else {
        router.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(state.allowed_origins))
                .allow_credentials(true)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE]),
        )
    }
}

/// Attempt to get a cup of coffee from the server.
async fn get_coffee() -> Response {
    (StatusCode::IM_A_TEAPOT, Html("I'm a teapot")).into_response()
}

/// The JSON 404 returned for API paths that match no route.
async fn get_api_not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" }))).into_response()
}
