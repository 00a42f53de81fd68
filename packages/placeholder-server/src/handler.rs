use std::collections::HashMap;

use axum::extract::{Path, Query};
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};

use placeholder_core::{resolve_params, PlaceholderError, RequestParameters};

use crate::generate::generate;
use crate::routes::match_segments;

/// インデックスで描画する使い方のヒント
pub const USAGE_LABEL: &str = "/{width}x{height}/{background}/{color}?label=";

/// クエリ文字列から最初の label を取り出す（重複は無視）
fn first_label(query: Vec<(String, String)>) -> Option<String> {
    query
        .into_iter()
        .find(|(name, _)| name == "label")
        .map(|(_, value)| value)
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// `/` はデフォルト寸法・色で使い方のヒントを描画する
pub async fn index(Query(query): Query<Vec<(String, String)>>) -> Result<Response, AppError> {
    let label = first_label(query).unwrap_or_else(|| USAGE_LABEL.to_string());
    respond(resolve_params([("label", label)])).await
}

/// `/{width}x{height}[/{background}[/{color}]]`
pub async fn placeholder(
    Path(segments): Path<HashMap<String, String>>,
    Query(query): Query<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let size = segments.get("size").map(String::as_str).unwrap_or_default();
    let Some(mut supplied) = match_segments(
        size,
        segments.get("background").map(String::as_str),
        segments.get("color").map(String::as_str),
    ) else {
        tracing::debug!(segments = ?segments, "path segments do not match any route");
        return Err(AppError::NotFound);
    };

    if let Some(label) = first_label(query) {
        supplied.push(("label", label));
    }

    respond(resolve_params(supplied)).await
}

pub async fn not_found(uri: Uri) -> AppError {
    tracing::debug!(path = %uri.path(), "no matching route");
    AppError::NotFound
}

async fn respond(params: RequestParameters) -> Result<Response, AppError> {
    tracing::info!(
        width = %params.width,
        height = %params.height,
        background = %params.background,
        color = %params.color,
        label = %params.label,
        "generating placeholder"
    );

    // 画像生成は CPU 処理なのでブロッキングスレッドで実行
    let placeholder = tokio::task::spawn_blocking(move || generate(&params))
        .await
        .map_err(|e| AppError::Internal(format!("render task failed: {e}")))??;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, placeholder.content_type)],
        placeholder.bytes,
    )
        .into_response())
}

#[derive(Debug)]
pub enum AppError {
    BadRequest,
    NotFound,
    Internal(String),
}

impl From<PlaceholderError> for AppError {
    fn from(err: PlaceholderError) -> Self {
        match err {
            PlaceholderError::DimensionsTooLarge { width, height } => {
                tracing::warn!(width = %width, height = %height, "image resolution too large");
                AppError::BadRequest
            }
            PlaceholderError::InvalidDimensions | PlaceholderError::InvalidColor { .. } => {
                tracing::warn!(error = %err, "invalid placeholder parameters");
                AppError::BadRequest
            }
            PlaceholderError::EncodeFailure(msg) => AppError::Internal(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // 本文はエラーページのミドルウェアで差し替えられる
        let (status, message) = match self {
            AppError::BadRequest => (StatusCode::BAD_REQUEST, "bad request".to_string()),
            AppError::NotFound => (StatusCode::NOT_FOUND, "not found".to_string()),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}
