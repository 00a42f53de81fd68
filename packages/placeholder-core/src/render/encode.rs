use std::io::Write;

use image::buffer::ConvertBuffer;
use image::codecs::jpeg::JpegEncoder;
use image::{RgbImage, RgbaImage};

use crate::constants::JPEG_QUALITY;
use crate::errors::PlaceholderError;

/// エンコード結果の Content-Type
pub const JPEG_CONTENT_TYPE: &str = "image/jpeg";

/// キャンバスを最高品質の JPEG としてエンコードし、writer に書き込む
pub fn encode_jpeg<W: Write>(canvas: &RgbaImage, writer: W) -> Result<(), PlaceholderError> {
    // JPEG はアルファチャンネルを持たない
    let rgb: RgbImage = canvas.convert();
    let encoder = JpegEncoder::new_with_quality(writer, JPEG_QUALITY);
    rgb.write_with_encoder(encoder)
        .map_err(|e| PlaceholderError::EncodeFailure(format!("JPEG encode failed: {e}")))
}
