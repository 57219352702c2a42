//! Cross-cutting layers for the router.
use tower_http::cors::CorsLayer;

/// Any origin may call the API.
pub fn cors() -> CorsLayer {
    CorsLayer::permissive()
}
