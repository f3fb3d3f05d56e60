//! Router assembly.

use axum::{
    Router,
    http::{HeaderName, Method},
    routing::post,
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers::contact;
use crate::infra::app_state::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/contact",
            post(contact::submit_contact)
                .options(contact::preflight)
                .fallback(contact::method_not_allowed),
        )
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Permissive CORS: the relay serves a public site from any origin.
/// Credentials are deliberately not allowed — they cannot be combined
/// with a wildcard origin.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::OPTIONS,
            Method::PATCH,
            Method::DELETE,
            Method::POST,
            Method::PUT,
        ]))
        .allow_headers(AllowHeaders::list([
            HeaderName::from_static("x-csrf-token"),
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("accept-version"),
            HeaderName::from_static("content-length"),
            HeaderName::from_static("content-md5"),
            HeaderName::from_static("content-type"),
            HeaderName::from_static("date"),
            HeaderName::from_static("x-api-version"),
        ]))
}
