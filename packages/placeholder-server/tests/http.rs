use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use placeholder_server::{build_router, AppState, ServerConfig};

const DOCS_URL: &str = "https://docs.example.com/placeholder";

fn app() -> Router {
    let config = ServerConfig {
        docs_url: DOCS_URL.to_string(),
        ..ServerConfig::default()
    };
    build_router(AppState::new(&config))
}

async fn get(uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();

    (status, content_type, body)
}

async fn get_image(uri: &str) -> image::RgbImage {
    let (status, content_type, body) = get(uri).await;
    assert_eq!(status, StatusCode::OK, "GET {uri}");
    assert_eq!(content_type.as_deref(), Some("image/jpeg"));
    image::load_from_memory(&body).unwrap().to_rgb8()
}

fn assert_close(actual: &image::Rgb<u8>, expected: [u8; 3]) {
    // JPEG は非可逆なので多少の誤差を許容する
    for (a, e) in actual.0.iter().zip(expected) {
        assert!(a.abs_diff(e) <= 4, "{actual:?} != {expected:?}");
    }
}

async fn assert_error_page(uri: &str, expected: StatusCode) {
    let (status, content_type, body) = get(uri).await;
    assert_eq!(status, expected, "GET {uri}");
    assert!(content_type.unwrap().starts_with("text/html"));

    let page = String::from_utf8(body).unwrap();
    assert!(page.contains(&format!("href=\"{DOCS_URL}\"")), "{page}");
}

#[tokio::test]
async fn test_size_route() {
    let img = get_image("/320x200").await;
    assert_eq!(img.dimensions(), (320, 200));
    // 左上の角はラベルから離れているので背景色
    assert_close(img.get_pixel(0, 0), [0xa5, 0xa5, 0xa5]);
}

#[tokio::test]
async fn test_background_route() {
    let img = get_image("/64x32/abcdef").await;
    assert_eq!(img.dimensions(), (64, 32));
    assert_close(img.get_pixel(0, 0), [171, 205, 239]);
}

#[tokio::test]
async fn test_full_route_with_shorthand_colors() {
    let img = get_image("/50x50/123/000?label=x").await;
    assert_eq!(img.dimensions(), (50, 50));
    assert_close(img.get_pixel(0, 0), [18, 49, 35]);
}

#[tokio::test]
async fn test_repeated_label_uses_first() {
    let (status, content_type, _) = get("/10x10?label=a&label=b").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/jpeg"));
}

#[tokio::test]
async fn test_index_route() {
    let img = get_image("/").await;
    assert_eq!(img.dimensions(), (400, 300));
}

#[tokio::test]
async fn test_max_pixel_count_is_accepted() {
    let (status, content_type, body) = get("/4000x4000").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/jpeg"));
    assert_eq!(&body[0..2], &[0xFF, 0xD8]);
}

#[tokio::test]
async fn test_encode_failure_still_succeeds() {
    // JPEG で表現できない幅でもクライアントには 200 を返す
    let (status, content_type, _) = get("/70000x1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("image/jpeg"));
}

#[tokio::test]
async fn test_too_large_is_bad_request() {
    assert_error_page("/4001x4000", StatusCode::BAD_REQUEST).await;
    assert_error_page("/99999999999x1", StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn test_invalid_color_is_bad_request() {
    assert_error_page("/100x100/abcd", StatusCode::BAD_REQUEST).await;
    assert_error_page("/100x100/fff/abcdefa", StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn test_zero_dimension_is_bad_request() {
    assert_error_page("/0x100", StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn test_unmatched_routes_are_not_found() {
    assert_error_page("/foo", StatusCode::NOT_FOUND).await;
    assert_error_page("/100x100/xyz", StatusCode::NOT_FOUND).await;
    assert_error_page("/100x100/ABCDEF", StatusCode::NOT_FOUND).await;
    assert_error_page("/100x100/fff/fff/fff", StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn test_health() {
    let (status, _, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn test_head_request() {
    let response = app()
        .oneshot(
            Request::builder()
                .method(Method::HEAD)
                .uri("/10x10")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/jpeg");
}
