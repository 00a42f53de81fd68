use image::Rgba;

use crate::errors::PlaceholderError;

/// 16進カラー文字列を RGBA にデコードする（アルファは常に 255）
///
/// 3桁の場合は文字列全体を繰り返して6桁にする（"123" → "123123"）。
/// CSS の短縮記法（各桁の複製）とは異なるが、互換性のためこの挙動を維持する。
pub fn decode_color(value: &str) -> Result<Rgba<u8>, PlaceholderError> {
    let invalid = || PlaceholderError::InvalidColor {
        value: value.to_string(),
    };

    let expanded = match value.len() {
        3 => value.repeat(2),
        6 => value.to_string(),
        _ => return Err(invalid()),
    };

    // from_str_radix は先頭の '+' を受け付けるため、先に文字種を確認する
    if !expanded.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| invalid());

    Ok(Rgba([channel(0)?, channel(2)?, channel(4)?, 255]))
}
