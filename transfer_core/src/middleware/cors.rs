//! CORS (Cross-Origin Resource Sharing) middleware configuration

use axum::http::{HeaderName, Method};
use tower_http::cors::{Any, CorsLayer as TowerCorsLayer};

/// The landing page and the API share an origin in normal use; any origin is
/// accepted since there are no credentials to protect.
pub fn cors_layer() -> TowerCorsLayer {
    TowerCorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .expose_headers([HeaderName::from_static("content-disposition")])
        .allow_credentials(false)
        .max_age(std::time::Duration::from_secs(3600))
}
