use std::sync::LazyLock;

use axum::Router;
use axum::middleware;
use axum::routing::get;
use regex::Regex;

use crate::error_page::render_error_responses;
use crate::handler;
use crate::AppState;

static SIZE_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<width>[0-9]+)x(?P<height>[0-9]+)$").expect("valid size pattern")
});

static HEX_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-f]+$").expect("valid hex pattern"));

/// パスセグメントをルートパターンと照合し、指定されたパラメータを返す
///
/// いずれかのセグメントがパターンに一致しない場合は None（404 扱い）。
pub fn match_segments(
    size: &str,
    background: Option<&str>,
    color: Option<&str>,
) -> Option<Vec<(&'static str, String)>> {
    let captures = SIZE_SEGMENT.captures(size)?;
    let mut supplied = vec![
        ("width", captures["width"].to_string()),
        ("height", captures["height"].to_string()),
    ];

    for (name, segment) in [("background", background), ("color", color)] {
        if let Some(segment) = segment {
            if !HEX_SEGMENT.is_match(segment) {
                return None;
            }
            supplied.push((name, segment.to_string()));
        }
    }

    Some(supplied)
}

/// アプリケーションのルーターを構築する
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handler::index))
        .route("/health", get(handler::health))
        .route("/{size}", get(handler::placeholder))
        .route("/{size}/{background}", get(handler::placeholder))
        .route("/{size}/{background}/{color}", get(handler::placeholder))
        .fallback(handler::not_found)
        .layer(middleware::map_response_with_state(
            state.clone(),
            render_error_responses,
        ))
        .with_state(state)
}
