use super::size::Dimensions;

/// 指定されたラベルを返す。空の場合は None（デフォルトを使用）
pub fn resolve_label(label: &str) -> Option<&str> {
    if label.is_empty() { None } else { Some(label) }
}

/// デフォルトラベル "{width}x{height}"
pub fn default_label(dimensions: Dimensions) -> String {
    format!("{}x{}", dimensions.width, dimensions.height)
}
