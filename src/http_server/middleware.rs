//! Middleware chain
//!
//! Applied to every route, outermost first:
//! 1. request tracing
//! 2. CORS: `*` origin, fixed method and header lists; every `OPTIONS`
//!    request is answered 200 here and never reaches the router
//! 3. the same method and header lists on every routed response
//! 4. `Content-Type: application/json` on every routed response

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

/// CORS layer shared by all routes
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([header::CONTENT_TYPE])
}

/// `CorsLayer` only lists methods and headers on preflight replies.
pub fn cors_lists_layers() -> (
    SetResponseHeaderLayer<HeaderValue>,
    SetResponseHeaderLayer<HeaderValue>,
) {
    (
        SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET,POST,PUT,DELETE,OPTIONS"),
        ),
        SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("content-type"),
        ),
    )
}

/// Forces a JSON content type on responses
pub fn json_content_type_layer() -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    )
}

/// Request spans and response events at INFO
pub fn trace_layer() -> TraceLayer<SharedClassifier<ServerErrorsAsFailures>> {
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO))
}

/// Wrap `router` in the full chain.
pub fn apply(router: Router) -> Router {
    let (allow_methods, allow_headers) = cors_lists_layers();

    // The last layer added runs first.
    router
        .layer(json_content_type_layer())
        .layer(allow_headers)
        .layer(allow_methods)
        .layer(cors_layer())
        .layer(trace_layer())
}
