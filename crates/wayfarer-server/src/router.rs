use std::time::Duration;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use wayfarer::store::StorageBackend;

use crate::handlers::{destinations, lists, SharedApi};

pub fn build_router<B: StorageBackend + 'static>(api: SharedApi<B>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/destinations", get(destinations::list_all::<B>))
        .route(
            "/api/destinations/{id}/details",
            get(destinations::details::<B>),
        )
        .route(
            "/api/destinations/{id}/coordinates",
            get(destinations::coordinates::<B>),
        )
        .route("/api/countries", get(destinations::countries::<B>))
        .route("/api/match", get(destinations::match_field::<B>))
        .route("/api/lists", get(lists::all::<B>).post(lists::create::<B>))
        .route(
            "/api/lists/{list_name}",
            axum::routing::put(lists::replace::<B>).delete(lists::delete::<B>),
        )
        .route("/api/lists/{list_name}/add", post(lists::add::<B>))
        .route(
            "/api/lists/{list_name}/destinations",
            get(lists::destinations::<B>),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(api)
}
