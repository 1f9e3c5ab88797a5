//! Route table and middleware stack.

use axum::http::header::{REFERRER_POLICY, X_DNS_PREFETCH_CONTROL, X_FRAME_OPTIONS};
use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{self, pages, replies, threads};
use crate::state::AppState;

/// Builds the application router with all routes.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/api/threads/{board}",
            get(threads::list)
                .post(threads::create)
                .put(threads::report)
                .delete(threads::delete),
        )
        .route(
            "/api/replies/{board}",
            get(replies::show)
                .post(replies::create)
                .put(replies::report)
                .delete(replies::delete),
        )
        .route("/", get(pages::index))
        .route("/b", get(pages::pick_board))
        .route("/b/{board}/", get(pages::board))
        .route("/b/{board}/{thread_id}", get(pages::thread))
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(SetResponseHeaderLayer::overriding(
            X_FRAME_OPTIONS,
            HeaderValue::from_static("SAMEORIGIN"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            X_DNS_PREFETCH_CONTROL,
            HeaderValue::from_static("off"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            REFERRER_POLICY,
            HeaderValue::from_static("same-origin"),
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
