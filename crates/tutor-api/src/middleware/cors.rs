//! CORS layer configuration.

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use tutor_core::config::CorsConfig;

use crate::extractors::actor::ACTOR_HEADER;
use crate::handlers::resource::TOTAL_COUNT_HEADER;

/// Builds a CORS tower layer from configuration.
///
/// Browsers may send the actor header and read the total-count header.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new();

    if config.allows_any_origin() {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        layer = layer.allow_origin(origins);
    }

    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();

    layer
        .allow_methods(methods)
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            HeaderName::from_static(ACTOR_HEADER),
        ])
        .expose_headers([TOTAL_COUNT_HEADER, axum::http::header::LOCATION])
        .max_age(Duration::from_secs(config.max_age_seconds))
}
