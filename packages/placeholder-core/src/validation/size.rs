use crate::constants::MAX_PIXELS;
use crate::errors::PlaceholderError;

/// 画像の寸法（ピクセル）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// width と height を10進数としてデコードする
pub fn decode_dimensions(width: &str, height: &str) -> Result<Dimensions, PlaceholderError> {
    let width = width
        .parse::<u32>()
        .map_err(|_| PlaceholderError::InvalidDimensions)?;
    let height = height
        .parse::<u32>()
        .map_err(|_| PlaceholderError::InvalidDimensions)?;

    if width == 0 || height == 0 {
        return Err(PlaceholderError::InvalidDimensions);
    }

    Ok(Dimensions { width, height })
}

/// 総ピクセル数を検証し、メモリ枯渇を防ぐ
pub fn ensure_pixel_budget(dimensions: Dimensions) -> Result<(), PlaceholderError> {
    if dimensions.pixel_count() > MAX_PIXELS {
        return Err(PlaceholderError::DimensionsTooLarge {
            width: dimensions.width,
            height: dimensions.height,
        });
    }
    Ok(())
}
