use image::{Rgba, RgbaImage};

use crate::validation::Dimensions;

/// 背景色で塗りつぶしたキャンバスを作成する
///
/// 寸法は事前に `ensure_pixel_budget` で検証しておくこと。
pub fn build_canvas(dimensions: Dimensions, background: Rgba<u8>) -> RgbaImage {
    RgbaImage::from_pixel(dimensions.width, dimensions.height, background)
}
