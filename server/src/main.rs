use axum::{
    Router,
    body::Body,
    http::{HeaderValue, Request, header},
    middleware::{self, Next},
    response::Response,
    routing,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    services::{ServeDir, ServeFile},
};

const DIST_DIR: &str = "../dist";

async fn healthz() -> &'static str {
    "ok"
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let listen_addr = format!(
        "0.0.0.0:{}",
        std::env::var("PORT").unwrap_or_else(|_| "8080".to_string())
    );

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .expect("failed to bind listen address");
    tracing::info!("serving {DIST_DIR} on http://{listen_addr}");

    axum::serve(listener, app()).await.expect("server error");
}

fn app() -> Router {
    // Single-page site: unknown routes fall back to the index
    let static_files = ServeDir::new(DIST_DIR)
        .not_found_service(ServeFile::new(format!("{DIST_DIR}/index.html")));

    Router::new()
        .route("/healthz", routing::get(healthz))
        .fallback_service(static_files)
        .layer(
            ServiceBuilder::new()
                .layer(CompressionLayer::new().br(true).gzip(true))
                .layer(middleware::from_fn(cache_control)),
        )
}

async fn cache_control(req: Request<Body>, next: Next) -> Response {
    let path = req.uri().path().to_owned();
    let mut res = next.run(req).await;

    let value = if path == "/" || path.ends_with(".html") {
        // The page itself is always revalidated so deploys show up
        "no-cache, must-revalidate"
    } else if has_content_hash(&path) {
        "public, max-age=31536000, immutable"
    } else {
        "public, max-age=0, must-revalidate"
    };

    res.headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static(value));
    res
}

/// Treat `name.<hex>.ext` filenames as content-hashed build outputs
fn has_content_hash(path: &str) -> bool {
    let file = path.rsplit('/').next().unwrap_or(path);
    let mut parts = file.split('.');

    match (parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(hash), Some(_)) => {
            hash.len() >= 8 && hash.chars().all(|c| c.is_ascii_hexdigit())
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_hash_detection() {
        assert!(has_content_hash("/app.3f9a0b2c.js"));
        assert!(has_content_hash("/assets/site.deadbeefcafe.wasm"));

        assert!(!has_content_hash("/index.html"));
        assert!(!has_content_hash("/app.js"));
        assert!(!has_content_hash("/app.v2.js"), "non-hex infix");
        assert!(!has_content_hash("/app.ab12.js"), "hash too short");
    }
}
