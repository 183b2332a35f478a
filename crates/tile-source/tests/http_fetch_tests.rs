//! Tests for the HTTP tile fetcher against an in-process server.

use axum::body::Bytes;
use axum::http::{header, StatusCode};
use axum::routing::get;
use axum::Router;
use image::{Rgba, RgbaImage};
use tokio::net::TcpListener;

use himawari_common::SatError;
use tile_source::{content_digest, FetchConfig, HttpTileFetcher, TileFetcher};

// ============================================================================
// Helpers
// ============================================================================

/// Serve `app` on an ephemeral local port and return its base URL.
async fn spawn_server(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn tile_server(png: Bytes) -> Router {
    Router::new()
        .route(
            "/tile.png",
            get(move || async move { ([(header::CONTENT_TYPE, "image/png")], png) }),
        )
        .route("/garbage.png", get(|| async { "<html>No such tile</html>" }))
        .route(
            "/unavailable.png",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "try later") }),
        )
}

fn fetcher() -> HttpTileFetcher {
    HttpTileFetcher::new(&FetchConfig::default()).unwrap()
}

// ============================================================================
// Success
// ============================================================================

#[tokio::test]
async fn test_fetch_decodes_png_and_hashes_body() {
    let png = test_utils::solid_tile_png(Rgba([12, 34, 56, 255]));
    let expected_digest = content_digest(&png);
    let base = spawn_server(tile_server(Bytes::from(png))).await;

    let tile = fetcher().fetch(&format!("{}/tile.png", base)).await.unwrap();

    assert_eq!(tile.image().dimensions(), (550, 550));
    assert_eq!(tile.image().get_pixel(100, 200), &Rgba([12, 34, 56, 255]));
    assert_eq!(tile.digest(), expected_digest);
    assert!(!tile.is_placeholder());
}

#[tokio::test]
async fn test_fetch_logs_progress_line_with_url() {
    let png = test_utils::solid_tile_png(Rgba([0, 0, 0, 255]));
    let base = spawn_server(tile_server(Bytes::from(png))).await;
    let url = format!("{}/tile.png", base);

    let (logs, _guard) = test_utils::capture_logs();
    fetcher().fetch(&url).await.unwrap();

    let progress = logs.lines_containing("Downloading tile");
    assert_eq!(progress.len(), 1, "{}", logs.contents());
    assert!(progress[0].contains("INFO"));
    assert!(progress[0].contains(&format!("url={}", url)), "{}", progress[0]);
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_not_found_is_transport_error() {
    let base = spawn_server(tile_server(Bytes::new())).await;
    let url = format!("{}/missing.png", base);

    let err = fetcher().fetch(&url).await.unwrap_err();

    match err {
        SatError::Transport { url: failed, message } => {
            assert_eq!(failed, url);
            assert!(message.contains("404"), "message was {}", message);
        }
        other => panic!("Expected transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_server_error_is_transport_error() {
    let base = spawn_server(tile_server(Bytes::new())).await;

    let err = fetcher()
        .fetch(&format!("{}/unavailable.png", base))
        .await
        .unwrap_err();

    assert!(matches!(err, SatError::Transport { .. }));
}

#[tokio::test]
async fn test_non_image_body_is_decode_error() {
    let base = spawn_server(tile_server(Bytes::new())).await;

    let err = fetcher()
        .fetch(&format!("{}/garbage.png", base))
        .await
        .unwrap_err();

    assert!(matches!(err, SatError::Decode { .. }));
}

#[tokio::test]
async fn test_undersized_tile_is_decode_error() {
    let small = test_utils::encode_png(&RgbaImage::from_pixel(300, 300, Rgba([255, 0, 0, 255])));
    let base = spawn_server(tile_server(Bytes::from(small))).await;

    let err = fetcher()
        .fetch(&format!("{}/tile.png", base))
        .await
        .unwrap_err();

    match err {
        SatError::Decode { message, .. } => assert!(message.contains("300x300"), "{}", message),
        other => panic!("Expected decode error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Reserve a port, then close it so nothing is listening.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = fetcher()
        .fetch(&format!("http://{}/tile.png", addr))
        .await
        .unwrap_err();

    assert!(matches!(err, SatError::Transport { .. }));
    assert!(err.is_fetch_error());
}
