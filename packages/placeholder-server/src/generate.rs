use bytes::Bytes;

use placeholder_core::{
    build_canvas, decode_color, decode_dimensions, default_label, draw_label, encode_jpeg,
    ensure_pixel_budget, resolve_label, Dimensions, PlaceholderError, RequestParameters,
    JPEG_CONTENT_TYPE,
};

/// 生成済みのプレースホルダー画像
#[derive(Debug, Clone)]
pub struct Placeholder {
    pub bytes: Bytes,
    pub content_type: &'static str,
    pub dimensions: Dimensions,
    pub label: String,
}

/// デフォルト適用済みのパラメータから画像を生成する
///
/// 検証はすべてキャンバス確保より前に行う。
/// エンコードの失敗はログに残すのみで、それまでに書き込まれたバイト列を返す。
pub fn generate(params: &RequestParameters) -> Result<Placeholder, PlaceholderError> {
    let dimensions = decode_dimensions(&params.width, &params.height)?;
    ensure_pixel_budget(dimensions)?;

    let background = decode_color(&params.background)?;
    let color = decode_color(&params.color)?;
    let label = match resolve_label(&params.label) {
        Some(label) => label.to_string(),
        None => default_label(dimensions),
    };

    let mut canvas = build_canvas(dimensions, background);
    draw_label(&mut canvas, &label, color);

    let mut buf = Vec::new();
    if let Err(e) = encode_jpeg(&canvas, &mut buf) {
        tracing::error!(
            width = %dimensions.width,
            height = %dimensions.height,
            error = %e,
            "image encoding failed"
        );
    }

    Ok(Placeholder {
        bytes: Bytes::from(buf),
        content_type: JPEG_CONTENT_TYPE,
        dimensions,
        label,
    })
}
