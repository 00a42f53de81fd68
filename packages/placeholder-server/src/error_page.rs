use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::AppState;

/// エラー時に返す HTML ページ
///
/// エラーの種類によらず同じ文言を返し、ドキュメントへのリンクを含める。
pub fn render_error_page(status: StatusCode, docs_url: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><meta charset=\"utf-8\"><title>{code} {reason}</title></head>\n\
         <body>\n\
         <h1>{code} {reason}</h1>\n\
         <p>The requested placeholder image could not be generated.</p>\n\
         <p>See the <a href=\"{href}\">documentation</a> for the supported URL formats.</p>\n\
         </body>\n\
         </html>\n",
        code = status.as_u16(),
        href = escape_html(docs_url),
    )
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// 4xx/5xx のレスポンス本文を HTML エラーページに差し替える
///
/// ハンドラのエラー、フォールバック、エクストラクタの拒否のすべてに適用される。
pub async fn render_error_responses(State(state): State<AppState>, response: Response) -> Response {
    let status = response.status();
    if !status.is_client_error() && !status.is_server_error() {
        return response;
    }

    (status, Html(render_error_page(status, &state.docs_url))).into_response()
}
