use crate::config::ServerConfig;
use axum::{
    extract::Request,
    http::{header, HeaderMap, HeaderValue},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::{
    future::Future,
    io,
    net::SocketAddr,
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering},
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tokio::net::TcpListener;
use tower_http::{
    services::{ServeDir, ServeFile},
    set_header::SetResponseHeaderLayer,
};

const SERVICE_NAME: &str = "survey-portfolio";
const REQUEST_ID_HEADER: &str = "x-request-id";
const MAX_REQUEST_ID_LEN: usize = 128;

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("dist directory `{0}` does not exist; run `trunk build --release` first")]
    MissingDist(PathBuf),
    #[error("failed to bind {address}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("server stopped unexpectedly")]
    Serve(#[source] io::Error),
}

#[derive(Serialize)]
struct HealthPayload {
    ok: bool,
    service: &'static str,
}

pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    if !config.dist_dir.is_dir() {
        return Err(ServerError::MissingDist(config.dist_dir));
    }

    let listener = TcpListener::bind(config.bind_address)
        .await
        .map_err(|source| ServerError::Bind {
            address: config.bind_address,
            source,
        })?;

    serve(listener, config, shutdown_signal()).await
}

/// Serves the site on an already-bound listener until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    config: ServerConfig,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), ServerError> {
    let local_address = listener.local_addr().map_err(ServerError::Serve)?;
    tracing::info!(
        address = %local_address,
        dist_dir = %config.dist_dir.display(),
        "static host listening"
    );

    axum::serve(listener, router(&config))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("static host stopped");
    Ok(())
}

pub fn router(config: &ServerConfig) -> Router {
    let static_service =
        ServeDir::new(&config.dist_dir).not_found_service(ServeFile::new(config.index_file()));

    Router::new()
        .route("/healthz", get(health))
        .fallback_service(static_service)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            cache_control(&config.cache_control()),
        ))
        .layer(middleware::from_fn(request_context))
}

async fn health() -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, HeaderValue::from_static("no-store"))],
        Json(HealthPayload {
            ok: true,
            service: SERVICE_NAME,
        }),
    )
}

async fn request_context(request: Request, next: Next) -> Response {
    let request_id = resolve_request_id(request.headers());
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    if status.is_server_error() {
        tracing::warn!(request_id = %request_id, %method, path = %path, status = status.as_u16(), elapsed_ms, "request failed");
    } else {
        tracing::info!(request_id = %request_id, %method, path = %path, status = status.as_u16(), elapsed_ms, "request completed");
    }

    response
}

fn cache_control(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| HeaderValue::from_static("no-cache"))
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty() && value.len() <= MAX_REQUEST_ID_LEN)
        .map(ToString::to_string)
        .unwrap_or_else(generate_request_id)
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::warn!("ctrl-c handler unavailable; serving until killed");
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tokio::sync::oneshot;

    const INDEX_HTML: &str = "<!doctype html><div id=\"app\"></div>";

    struct TestServer {
        base_url: String,
        shutdown: Option<oneshot::Sender<()>>,
        _dist: tempfile::TempDir,
    }

    impl Drop for TestServer {
        fn drop(&mut self) {
            if let Some(shutdown) = self.shutdown.take() {
                let _ = shutdown.send(());
            }
        }
    }

    async fn start_server() -> TestServer {
        let dist = tempfile::tempdir().unwrap();
        fs::write(dist.path().join("index.html"), INDEX_HTML).unwrap();
        fs::create_dir(dist.path().join("images")).unwrap();
        fs::write(dist.path().join("images/image-1.jpg"), b"jpeg").unwrap();

        let config = ServerConfig {
            bind_address: "127.0.0.1:0".parse().unwrap(),
            dist_dir: dist.path().to_path_buf(),
            static_max_age_seconds: 120,
        };
        let listener = TcpListener::bind(config.bind_address).await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let (sender, receiver) = oneshot::channel::<()>();

        tokio::spawn(serve(listener, config, async move {
            let _ = receiver.await;
        }));

        TestServer {
            base_url,
            shutdown: Some(sender),
            _dist: dist,
        }
    }

    #[tokio::test]
    async fn serves_index_and_assets_with_cache_headers() {
        let server = start_server().await;

        let response = reqwest::get(format!("{}/", server.base_url)).await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(
            response.headers().get("cache-control").unwrap(),
            "public, max-age=120"
        );
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
        assert_eq!(response.text().await.unwrap(), INDEX_HTML);

        let asset = reqwest::get(format!("{}/images/image-1.jpg", server.base_url))
            .await
            .unwrap();
        assert_eq!(asset.status(), reqwest::StatusCode::OK);
        assert_eq!(asset.bytes().await.unwrap().as_ref(), b"jpeg");
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_index_as_not_found() {
        let server = start_server().await;

        let response = reqwest::get(format!("{}/no/such/page", server.base_url))
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
        assert_eq!(response.text().await.unwrap(), INDEX_HTML);
    }

    #[tokio::test]
    async fn health_endpoint_reports_ok_and_echoes_request_id() {
        let server = start_server().await;

        let response = reqwest::Client::new()
            .get(format!("{}/healthz", server.base_url))
            .header(REQUEST_ID_HEADER, "trace-42")
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(response.headers().get(REQUEST_ID_HEADER).unwrap(), "trace-42");
        assert_eq!(response.headers().get("cache-control").unwrap(), "no-store");
        let body: serde_json::Value = response.json().await.unwrap();
        assert_eq!(body, serde_json::json!({ "ok": true, "service": "survey-portfolio" }));
    }

    #[tokio::test]
    async fn run_refuses_missing_dist_directory() {
        let config = ServerConfig {
            dist_dir: PathBuf::from("/definitely/not/a/dist"),
            ..ServerConfig::default()
        };

        let error = run(config).await.unwrap_err();
        assert!(matches!(error, ServerError::MissingDist(_)));
    }

    #[test]
    fn blank_or_oversized_request_ids_are_replaced() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("   "));
        assert!(resolve_request_id(&headers).starts_with("req-"));

        headers.insert(
            REQUEST_ID_HEADER,
            HeaderValue::from_str(&"x".repeat(MAX_REQUEST_ID_LEN + 1)).unwrap(),
        );
        assert!(resolve_request_id(&headers).starts_with("req-"));
    }
}
