use thiserror::Error;

/// プレースホルダー画像生成のエラー型
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaceholderError {
    #[error("unable to read image dimensions")]
    InvalidDimensions,

    #[error("image resolution exceeds maximum ({width}x{height})")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("unable to read color: {value:?}")]
    InvalidColor { value: String },

    #[error("encode failed: {0}")]
    EncodeFailure(String),
}
